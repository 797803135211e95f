//! Evaluator configuration

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Deepest parent chain resolved before a bone is reported and skipped
pub const DEFAULT_MAX_HIERARCHY_DEPTH: usize = 256;

/// Options for controlling evaluation behavior
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(default))]
pub struct EvaluatorOptions {
    /// Maximum number of ancestors walked for one bone. Chains longer than
    /// this (including parent cycles) are reported as diagnostics.
    pub max_hierarchy_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }
}

impl EvaluatorOptions {
    pub fn with_max_hierarchy_depth(mut self, depth: usize) -> Self {
        self.max_hierarchy_depth = depth;
        self
    }
}
