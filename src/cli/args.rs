use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "intervals",
    version,
    about = "Parse interval strings, convert between time units, and size histogram buckets",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short = 'q', long, conflicts_with = "verbose", global = true)]
    pub quiet: bool,

    /// Structured JSON output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an interval string (e.g., "30m", "0.5d")
    Parse {
        #[arg(value_name = "INTERVAL", allow_hyphen_values = true)]
        interval: String,
    },

    /// Convert an interval to another unit
    Convert {
        #[arg(value_name = "INTERVAL", allow_hyphen_values = true)]
        interval: String,

        /// Target unit: ms, s, m, h, d, w, M or y
        #[arg(value_name = "UNIT")]
        unit: String,
    },

    /// Pick the coarsest unit that fits a duration
    Suitable {
        /// Duration in seconds
        #[arg(value_name = "SECONDS", allow_hyphen_values = true)]
        seconds: String,
    },

    /// Size histogram buckets for a time range
    Bucket {
        /// Time range as an interval (e.g., "7d")
        #[arg(value_name = "RANGE", allow_hyphen_values = true)]
        range: String,

        /// Maximum number of buckets
        #[arg(short = 'b', long, value_name = "N", default_value_t = 100)]
        buckets: u64,
    },
}
