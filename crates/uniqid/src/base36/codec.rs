use crate::{InputError, Result};
use alloc::{string::String, vec::Vec};

/// The base-36 alphabet: `0-9` for values 0 through 9, then `a-z` for 10
/// through 35.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;

/// Lookup table from ASCII byte to digit value. Letters are accepted in either
/// case.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    lut
};

/// Encodes a non-negative decimal integer of any length into base 36.
///
/// The output has no leading zeros; zero itself encodes to `"0"`. Leading
/// zeros in the input are accepted and dropped, so the original width is not
/// recoverable from the result.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for an empty string and
/// [`InputError::InvalidChar`] for the first byte that is not `0-9`.
///
/// # Example
///
/// ```
/// use uniqid::encode_base36;
///
/// assert_eq!(encode_base36("17315042302540352577648").unwrap(), "2ti7knstydhbwxc");
/// assert_eq!(encode_base36("0").unwrap(), "0");
/// ```
pub fn encode_base36(decimal: &str) -> Result<String> {
    let digits = parse_digits(decimal, 10)?;
    Ok(render(&convert_radix(&digits, 10, 36)))
}

/// Decodes a base-36 string of any length into its decimal representation.
///
/// Characters are read most significant first and folded into the
/// accumulator as `acc * 36 + digit`. Upper-case letters decode like their
/// lower-case counterparts.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for an empty string and
/// [`InputError::InvalidChar`] for the first byte outside the alphabet.
///
/// # Example
///
/// ```
/// use uniqid::decode_base36;
///
/// assert_eq!(decode_base36("2ti7knstydhbwxc").unwrap(), "17315042302540352577648");
/// assert!(decode_base36("invalid_characters!").is_err());
/// ```
pub fn decode_base36(encoded: &str) -> Result<String> {
    let digits = parse_digits(encoded, 36)?;
    Ok(render(&convert_radix(&digits, 36, 10)))
}

/// Returns the value of `b` in base 36, if it is part of the alphabet.
#[inline]
pub(crate) const fn digit_value(b: u8) -> Option<u8> {
    match LOOKUP[b as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Validates `input` as digits of `radix` and returns their values, most
/// significant first.
pub(crate) fn parse_digits(input: &str, radix: u8) -> Result<Vec<u8>, InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    input
        .bytes()
        .enumerate()
        .map(|(index, byte)| match digit_value(byte) {
            Some(v) if v < radix => Ok(v),
            _ => Err(InputError::InvalidChar { byte, index }),
        })
        .collect()
}

/// Maps digit values onto [`ALPHABET`].
pub(crate) fn render(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| char::from(ALPHABET[usize::from(d)]))
        .collect()
}

/// Re-expresses `digits` (values `< from`, most significant first) in base
/// `to`, without any fixed-width accumulator.
///
/// Horner's rule over a little-endian digit vector in the target base: each
/// input digit multiplies the accumulator by `from` and adds itself, carrying
/// through the output digits. The result is most significant first, has no
/// leading zeros, and is `[0]` for zero.
pub(crate) fn convert_radix(digits: &[u8], from: u8, to: u8) -> Vec<u8> {
    debug_assert!((2..=36).contains(&from) && (2..=36).contains(&to));
    let (from, to) = (u32::from(from), u32::from(to));

    // log(36)/log(10) < 2, so twice the input length always suffices.
    let mut acc: Vec<u8> = Vec::with_capacity(digits.len() * 2);
    for &d in digits {
        debug_assert!(u32::from(d) < from);
        let mut carry = u32::from(d);
        for slot in acc.iter_mut() {
            let v = u32::from(*slot) * from + carry;
            *slot = (v % to) as u8;
            carry = v / to;
        }
        while carry > 0 {
            acc.push((carry % to) as u8);
            carry /= to;
        }
    }

    if acc.is_empty() {
        acc.push(0);
    }
    acc.reverse();
    acc
}
