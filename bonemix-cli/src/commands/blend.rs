//! `bonemix blend`: entry-wise blend of two animations

use anyhow::{Result, ensure};
use bonemix::{CollectingSink, Evaluator};
use clap::Args;
use std::path::PathBuf;

use super::{EvalOptions, emit_palette};
use crate::rig::Rig;

#[derive(Debug, Args)]
pub struct BlendArgs {
    /// Path to the rig JSON document
    pub rig: PathBuf,

    /// Index of the animation weighted by `1 - factor`
    #[arg(long)]
    pub from: usize,

    /// Index of the animation weighted by `factor`
    #[arg(long)]
    pub to: usize,

    /// Time in the first animation, in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time_a: f32,

    /// Time in the second animation, in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time_b: f32,

    /// Blend factor; 0 is the first animation, 1 the second
    #[arg(short, long, default_value_t = 0.5)]
    pub factor: f32,

    #[command(flatten)]
    pub options: EvalOptions,
}

pub fn execute(args: BlendArgs) -> Result<()> {
    ensure!(
        args.factor.is_finite(),
        "Blend factor must be a finite number, got {}",
        args.factor
    );

    let rig = Rig::load(&args.rig)?;
    let from = rig.animation(args.from)?;
    let to = rig.animation(args.to)?;

    let evaluator =
        Evaluator::with_options(CollectingSink::new(), args.options.evaluator_options());
    let palette = evaluator.blended_palette(
        from,
        to,
        &rig.model,
        (args.time_a, args.time_b),
        args.factor,
    );

    emit_palette(&rig.model, &palette, &evaluator.sink().drain(), &args.options)
}
