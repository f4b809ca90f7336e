use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::{generator::OrderGenerator, writer::write_orders};

/// Generate random buy/sell orders and write them to a file, one per line
/// as `side,id,price,quantity`
#[derive(Parser, Debug)]
#[command(name = "order_generator", version)]
pub struct Cli {
    /// Number of orders to generate
    pub num_orders: u64,

    /// File to create or overwrite
    pub output_file: PathBuf,
}

/// Install the global `tracing` subscriber. Level comes from `RUST_LOG`, default `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    info!(num_orders = cli.num_orders, output = %cli.output_file.display(), "generating orders");

    let written = write_orders(&cli.output_file, OrderGenerator::new(cli.num_orders))
        .with_context(|| format!("failed to write orders to {}", cli.output_file.display()))?;

    println!(
        "{} orders generated and written to {}",
        written,
        cli.output_file.display()
    );
    Ok(())
}

/// Parses the command line and runs the generator.
///
/// A wrong argument count or a non-integer `num_orders` makes clap print usage
/// and exit with status 2 before any file is touched.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
