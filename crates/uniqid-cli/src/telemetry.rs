//! Log output for the binary.
//!
//! Logs always go to stderr so stdout carries nothing but IDs. The level is
//! read from `RUST_LOG` and defaults to `warn`; events from the `uniqid`
//! library (its `tracing` feature is enabled here) pass through the same
//! filter.

use crate::config::LogFormat;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry(format: LogFormat) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::ChronoLocal::rfc_3339());

    match format {
        LogFormat::Pretty => registry
            .with(
                layer
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Compact => registry.with(layer.compact()).try_init()?,
        LogFormat::Json => registry.with(layer.json()).try_init()?,
    }

    Ok(())
}
