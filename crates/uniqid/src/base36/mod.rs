mod codec;

pub use codec::{ALPHABET, decode_base36, encode_base36};
pub(crate) use codec::{convert_radix, digit_value, parse_digits, render};
