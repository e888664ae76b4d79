// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use ml_scrape::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    let _guard = log::init(&args.log_options()).wrap_err("Could not open log file")?;

    let summary = cli::run(&args)?;
    if !summary.incomplete.is_empty() {
        eprintln!("Dropped incomplete games: {:?}", summary.incomplete);
    }
    println!("Wrote {} ({})", summary.file_written.display(), summary.headline);
    Ok(())
}
