use anyhow::Result;
use clap::Parser;
use crand48::{Rand48, DEFAULT_SEED};
use log::debug;
use std::io::Write;

/// Prints bytes from the 48-bit linear congruential generator, one per line.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Number of bytes to print
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,
    /// Initial generator state
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn")).init();

    let cli = Cli::parse();
    debug!("{:?}", cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for byte in Rand48::with_seed(cli.seed).take(cli.count) {
        writeln!(out, "{byte}")?;
    }
    Ok(())
}
