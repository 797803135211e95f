//! bonemix: skeletal animation sampling and blending
//!
//! Turns a clip's per-bone keyframe channels and a model's inverse bind poses
//! into the per-bone skinning matrices a renderer uploads each frame.
//!
//! Evaluation is stateless and never fails loudly: problems go to an
//! [`ErrorSink`] and the affected output slot is skipped. Building the input
//! data is where [`BonemixError`] is returned.

pub mod animation;
pub mod error;
pub mod options;
pub mod report;

pub use animation::{
    AnimatedBone, Animation, Channel, Evaluator, Keyframe, Mat4, ModelData, Quat, StaticBone,
    Vec3,
};
pub use error::{BonemixError, Result};
pub use options::{DEFAULT_MAX_HIERARCHY_DEPTH, EvaluatorOptions};
pub use report::{
    CollectingSink, ErrorKind, ErrorReport, ErrorSink, FnSink, LogSink, NullSink, SourceContext,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
