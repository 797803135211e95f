//! `bonemix check`: model/animation compatibility

use anyhow::{Result, bail};
use bonemix::animation::{check_compatibility, missing_bones};
use clap::Args;
use std::path::PathBuf;

use crate::rig::Rig;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the rig JSON document
    pub rig: PathBuf,

    /// List every missing bone instead of the first
    #[arg(short, long)]
    pub detailed: bool,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let rig = Rig::load(&args.rig)?;
    let mut failed = 0;

    for (index, animation) in rig.animations.iter().enumerate() {
        match check_compatibility(animation, &rig.model) {
            Ok(()) => println!("animation {index}: ok"),
            Err(err) => {
                failed += 1;
                println!("animation {index}: {err}");
                if args.detailed {
                    let missing = missing_bones(animation, &rig.model);
                    if !missing.is_empty() {
                        println!("  missing bones: {missing:?}");
                    }
                }
            }
        }
    }

    if failed > 0 {
        bail!(
            "{failed} of {} animations cannot drive the model",
            rig.animations.len()
        );
    }
    Ok(())
}
