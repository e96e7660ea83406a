#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, Config, RngKind};
use telemetry::init_telemetry;
use uniqid::{OsRandom, SystemClock, ThreadRandom, UniqueIdGenerator};

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry(config.log_format).context("failed to initialise logging")?;
    tracing::debug!(?config, "starting");

    let mut out = std::io::stdout().lock();
    match config.rng {
        RngKind::Os => commands::run(
            &config.action,
            &UniqueIdGenerator::new(SystemClock, OsRandom),
            &mut out,
        ),
        RngKind::Thread => commands::run(
            &config.action,
            &UniqueIdGenerator::new(SystemClock, ThreadRandom),
            &mut out,
        ),
    }
}
