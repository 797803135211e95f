//! Main entry point for the bonemix CLI

mod cli;
mod commands;
mod rig;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger; explicit flags win over RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    match cli.command {
        Commands::Eval(args) => commands::eval::execute(args),
        Commands::Blend(args) => commands::blend::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    }
}
