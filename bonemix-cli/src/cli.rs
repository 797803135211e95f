//! Root CLI structure for bonemix

use clap::{Parser, Subcommand};

use crate::commands::{blend::BlendArgs, check::CheckArgs, eval::EvalArgs};

#[derive(Parser)]
#[command(name = "bonemix")]
#[command(about = "Evaluate skinning palettes from JSON rig dumps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter chosen by `-v`/`-q`, or `None` to defer to `RUST_LOG`
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        match (self.verbose, self.quiet) {
            (0, false) => None,
            (0, true) => Some(log::LevelFilter::Error),
            (1, _) => Some(log::LevelFilter::Info),
            (2, _) => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one animation of a rig at a point in time
    Eval(EvalArgs),

    /// Blend two animations of a rig
    Blend(BlendArgs),

    /// Check that every animation of a rig can drive its model
    Check(CheckArgs),
}
