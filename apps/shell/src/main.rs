#![allow(clippy::print_stdout)]

mod args;
mod commands;
mod config;

use crate::args::Cli;
use anyhow::Context;
use canon::logger::Logger;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &cfg.logging)?;

    let catalog = canon::init(&cfg).context("Catalog rejected the configuration")?;

    let output = commands::run(&catalog, cli.command)?;
    println!("{}", output.trim_end());

    Ok(())
}
