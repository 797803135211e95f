//! Skeletal animation sampling and blending
//!
//! Data flows bottom-up through these modules:
//! - [`types`] / [`matrix`]: vectors, quaternions (slerp) and column-major 4x4 matrices
//! - [`data`]: clips, channels and model bone lists
//! - [`bone_index`]: id lookup of animated and static bone records
//! - [`interpolation`]: looped per-channel keyframe sampling
//! - [`hierarchy`]: parent-chain world transform resolution
//! - [`evaluator`]: whole-palette single and blended evaluation
//!
//! # Example
//!
//! ```rust
//! use bonemix::animation::{
//!     AnimatedBone, Animation, Channel, Evaluator, Keyframe, Mat4, ModelData, Quat,
//!     StaticBone, Vec3,
//! };
//! use bonemix::CollectingSink;
//!
//! let animation = Animation::new(
//!     1.0,
//!     vec![
//!         StaticBone::new(0, 0, Mat4::IDENTITY),
//!         StaticBone::new(1, 0, Mat4::IDENTITY),
//!     ],
//!     vec![AnimatedBone::new(
//!         1,
//!         Channel::new(vec![Keyframe::new(0.0, Vec3::new(1.0, 0.0, 0.0))])?,
//!         Channel::constant(Quat::IDENTITY),
//!         Channel::constant(Vec3::ONE),
//!     )],
//! )?;
//! let model = ModelData::new(vec![1], vec![Mat4::IDENTITY])?;
//!
//! let evaluator = Evaluator::new(CollectingSink::new());
//! let palette = evaluator.single_palette(&animation, &model, 0.25);
//! assert_eq!(palette[0].translation(), Vec3::new(1.0, 0.0, 0.0));
//! # Ok::<(), bonemix::BonemixError>(())
//! ```

pub mod bone_index;
pub mod data;
pub mod evaluator;
pub mod hierarchy;
pub mod interpolation;
pub mod matrix;
pub mod types;
pub mod validate;

pub use bone_index::{find_animated_bone, find_static_bone};
pub use data::{
    AnimatedBone, Animation, Channel, Keyframe, ModelData, PositionKeyframe, ROOT_BONE_ID,
    RotationKeyframe, ScalingKeyframe, StaticBone,
};
pub use evaluator::Evaluator;
pub use hierarchy::resolve_world_transform;
pub use interpolation::{
    LocalPose, find_bracket, sample_channel, sample_local_pose, sample_local_transform, wrap_time,
};
pub use matrix::{Mat4, palette_to_gpu_data};
pub use types::{Lerp, Quat, Vec3, lerp};
pub use validate::{check_compatibility, check_hierarchy, missing_bones};
