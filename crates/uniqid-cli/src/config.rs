use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use uniqid::TIMESTAMP_DIGITS;

/// Upper bound on `--count`, to keep a typo from flooding the terminal.
pub const MAX_COUNT: usize = 1_000_000;

/// Command line arguments for the `uniqid` binary.
///
/// Every option may also be set through its environment variable, or through
/// a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "uniqid",
    version,
    about = "Generate, encode and decode sortable timestamp + random IDs"
)]
pub struct CliArgs {
    /// Source of randomness for the random suffix.
    ///
    /// `os` asks the operating system on every draw and fails loudly if it
    /// cannot. `thread` uses a thread-local CSPRNG seeded from the OS.
    ///
    /// Environment variable: `UNIQID_RNG`
    #[arg(long, env = "UNIQID_RNG", value_enum, default_value_t = RngKind::Os, global = true)]
    pub rng: RngKind,

    /// Format of log lines written to stderr. The level comes from `RUST_LOG`.
    ///
    /// Environment variable: `UNIQID_LOG_FORMAT`
    #[arg(long, env = "UNIQID_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate new IDs, one per line.
    New {
        /// Millisecond Unix timestamp to use instead of the current time.
        ///
        /// Environment variable: `UNIQID_TIMESTAMP`
        #[arg(short, long, env = "UNIQID_TIMESTAMP")]
        timestamp: Option<u64>,

        /// How many IDs to print.
        ///
        /// Environment variable: `UNIQID_COUNT`
        #[arg(short = 'n', long, env = "UNIQID_COUNT", default_value_t = 1)]
        count: usize,

        /// Print the base-36 form instead of the 23-digit form.
        ///
        /// Environment variable: `UNIQID_ENCODED`
        #[arg(short, long, env = "UNIQID_ENCODED", default_value_t = false)]
        encoded: bool,
    },
    /// Encode a decimal digit string in base 36.
    Encode {
        /// Decimal digits, e.g. a 23-digit raw ID.
        decimal: String,
    },
    /// Decode a base-36 string back to decimal.
    Decode {
        /// Base-36 text (`0-9`, `a-z`, any case).
        encoded: String,

        /// Left-pad the result to the 23-digit raw ID width.
        #[arg(long, default_value_t = false)]
        pad: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngKind {
    Os,
    Thread,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

/// What the binary should do, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate {
        timestamp: Option<u64>,
        count: usize,
        encoded: bool,
    },
    Encode {
        decimal: String,
    },
    Decode {
        encoded: String,
        pad: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rng: RngKind,
    pub log_format: LogFormat,
    pub action: Action,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::New {
                timestamp,
                count,
                encoded,
            } => {
                if count == 0 {
                    bail!("COUNT must be greater than 0");
                }
                if count > MAX_COUNT {
                    bail!("COUNT ({count}) exceeds the maximum of {MAX_COUNT}");
                }
                if let Some(ts) = timestamp {
                    let digits = ts.checked_ilog10().map_or(1, |d| d as usize + 1);
                    if digits > TIMESTAMP_DIGITS {
                        bail!(
                            "TIMESTAMP ({ts}) has {digits} digits; at most {TIMESTAMP_DIGITS} fit in an ID"
                        );
                    }
                }
                Action::Generate {
                    timestamp,
                    count,
                    encoded,
                }
            }
            Command::Encode { decimal } => Action::Encode { decimal },
            Command::Decode { encoded, pad } => Action::Decode { encoded, pad },
        };

        Ok(Self {
            rng: args.rng,
            log_format: args.log_format,
            action,
        })
    }
}
