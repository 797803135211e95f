//! JSON rig documents: one model and the animations that drive it

use anyhow::{Context, Result};
use bonemix::{Animation, ModelData};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// In-memory model and clips as serialized by bonemix's `serde-support`
///
/// Deserializing runs the same validation as the bonemix constructors, so a
/// loaded rig has sorted channels and matching model arrays.
#[derive(Debug, Serialize, Deserialize)]
pub struct Rig {
    pub model: ModelData,
    #[serde(default)]
    pub animations: Vec<Animation>,
}

impl Rig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rig from {}", path.display()))?;
        let rig: Rig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse rig {}", path.display()))?;
        log::info!(
            "Loaded rig with {} bones and {} animations",
            rig.model.num_bones(),
            rig.animations.len()
        );
        Ok(rig)
    }

    pub fn animation(&self, index: usize) -> Result<&Animation> {
        self.animations.get(index).with_context(|| {
            format!(
                "Animation {index} requested but the rig has {}",
                self.animations.len()
            )
        })
    }
}
