use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    let args = cli::Args::parse();

    // RUST_LOG wins over -v/-q when set
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
