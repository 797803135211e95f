//! `bonemix eval`: skinning palette of one animation

use anyhow::Result;
use bonemix::{CollectingSink, Evaluator};
use clap::Args;
use std::path::PathBuf;

use super::{EvalOptions, emit_palette};
use crate::rig::Rig;

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Path to the rig JSON document
    pub rig: PathBuf,

    /// Index of the animation in the rig
    #[arg(short, long, default_value_t = 0)]
    pub animation: usize,

    /// Animation time in seconds
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f32,

    #[command(flatten)]
    pub options: EvalOptions,
}

pub fn execute(args: EvalArgs) -> Result<()> {
    let rig = Rig::load(&args.rig)?;
    let animation = rig.animation(args.animation)?;

    let evaluator =
        Evaluator::with_options(CollectingSink::new(), args.options.evaluator_options());
    let palette = evaluator.single_palette(animation, &rig.model, args.time);

    emit_palette(&rig.model, &palette, &evaluator.sink().drain(), &args.options)
}
