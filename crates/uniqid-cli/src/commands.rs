use crate::config::Action;
use anyhow::Context;
use std::io::Write;
use uniqid::{EncodedId, RandSource, TimeSource, UniqueIdGenerator, decode_base36, encode_base36};

/// Carries out `action`, writing one result per line to `out`.
pub fn run<T, R>(
    action: &Action,
    generator: &UniqueIdGenerator<T, R>,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    T: TimeSource<u64>,
    R: RandSource<u32>,
{
    match action {
        Action::Generate {
            timestamp,
            count,
            encoded,
        } => {
            tracing::debug!(?timestamp, count, encoded, "generating ids");
            for _ in 0..*count {
                let id = match timestamp {
                    Some(ts) => generator.next_id_at(*ts),
                    None => generator.next_id(),
                }
                .context("failed to generate id")?;
                if *encoded {
                    writeln!(out, "{}", id.encode())?;
                } else {
                    writeln!(out, "{id}")?;
                }
            }
        }
        Action::Encode { decimal } => {
            let encoded =
                encode_base36(decimal).with_context(|| format!("cannot encode {decimal:?}"))?;
            writeln!(out, "{encoded}")?;
        }
        Action::Decode { encoded, pad } => {
            let decoded = if *pad {
                encoded
                    .parse::<EncodedId>()
                    .and_then(|id| id.to_raw_id())
                    .map(|raw| raw.to_string())
            } else {
                decode_base36(encoded)
            }
            .with_context(|| format!("cannot decode {encoded:?}"))?;
            writeln!(out, "{decoded}")?;
        }
    }

    out.flush()?;
    Ok(())
}
