//! Monty Hall command-line program.
//!
//! Usage:
//!   cargo run --release --bin monty-hall -- [TRIALS]
//!
//! Without an argument, prints the calculated chances of winning. With a
//! number, runs that many simulations instead.
//!
//! Logging goes to stderr and is off below `warn` unless `RUST_LOG` says
//! otherwise.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use monty_hall::app;
use monty_hall::cli::Cli;
use monty_hall::report::WriteReporter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = cli.mode();

    let mut reporter = WriteReporter::stdout();
    app::run(&mode, StdRng::from_entropy(), true, &mut reporter);
}
