mod args;
mod bucket_command;
mod convert_command;
mod parse_command;
mod suitable_command;

use intervals::Result;
use serde::Serialize;

pub use args::{Args, Command};

/// Where and how command results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    /// Print `value` as JSON, or `text` otherwise. Nothing is printed when quiet.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

pub fn run(args: Args) -> Result<()> {
    let output = Output {
        json: args.json,
        quiet: args.quiet,
    };

    match args.command {
        Command::Parse { interval } => parse_command::execute_parse(&interval, output),
        Command::Convert { interval, unit } => {
            convert_command::execute_convert(&interval, &unit, output)
        }
        Command::Suitable { seconds } => suitable_command::execute_suitable(&seconds, output),
        Command::Bucket { range, buckets } => {
            bucket_command::execute_bucket(&range, buckets, output)
        }
    }
}
