//! Read-only animation and model data handed in by the asset loader

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use super::matrix::Mat4;
use super::types::{Quat, Vec3};
use crate::error::{BonemixError, Result};

/// Bone id reserved for the world root: identity transform, no parent
pub const ROOT_BONE_ID: u32 = 0;

/// One keyed value on a channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Keyframe<V> {
    pub time: f32,
    pub value: V,
}

impl<V> Keyframe<V> {
    pub const fn new(time: f32, value: V) -> Self {
        Self { time, value }
    }
}

pub type PositionKeyframe = Keyframe<Vec3>;
pub type RotationKeyframe = Keyframe<Quat>;
pub type ScalingKeyframe = Keyframe<Vec3>;

/// Keyframe track for one transform component
///
/// Always holds at least one keyframe, ordered by non-decreasing time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-support",
    serde(
        try_from = "Vec<Keyframe<V>>",
        into = "Vec<Keyframe<V>>",
        bound(
            serialize = "V: Serialize + Clone",
            deserialize = "V: Deserialize<'de>"
        )
    )
)]
pub struct Channel<V> {
    keyframes: Vec<Keyframe<V>>,
}

impl<V> Channel<V> {
    /// Build a channel, rejecting empty or out-of-order keyframes
    pub fn new(keyframes: Vec<Keyframe<V>>) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(BonemixError::EmptyChannel);
        }
        if let Some(index) = keyframes
            .windows(2)
            .position(|pair| !(pair[0].time <= pair[1].time))
        {
            return Err(BonemixError::UnsortedChannel { index: index + 1 });
        }
        Ok(Self { keyframes })
    }

    /// Channel with a single keyframe at time zero
    pub fn constant(value: V) -> Self {
        Self {
            keyframes: vec![Keyframe::new(0.0, value)],
        }
    }

    pub fn keyframes(&self) -> &[Keyframe<V>] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Never true; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the last keyframe, which is also this channel's loop window
    pub fn last_time(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }
}

impl<V> TryFrom<Vec<Keyframe<V>>> for Channel<V> {
    type Error = BonemixError;

    fn try_from(keyframes: Vec<Keyframe<V>>) -> Result<Self> {
        Self::new(keyframes)
    }
}

impl<V> From<Channel<V>> for Vec<Keyframe<V>> {
    fn from(channel: Channel<V>) -> Self {
        channel.keyframes
    }
}

/// Bone whose local transform is driven by keyframe channels
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct AnimatedBone {
    pub id: u32,
    pub position: Channel<Vec3>,
    pub rotation: Channel<Quat>,
    pub scaling: Channel<Vec3>,
}

impl AnimatedBone {
    pub fn new(
        id: u32,
        position: Channel<Vec3>,
        rotation: Channel<Quat>,
        scaling: Channel<Vec3>,
    ) -> Self {
        Self {
            id,
            position,
            rotation,
            scaling,
        }
    }
}

/// Bone with a fixed local transform relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct StaticBone {
    pub id: u32,
    pub parent_id: u32,
    pub transform: Mat4,
}

impl StaticBone {
    pub const fn new(id: u32, parent_id: u32, transform: Mat4) -> Self {
        Self {
            id,
            parent_id,
            transform,
        }
    }
}

#[cfg(feature = "serde-support")]
#[derive(Deserialize)]
struct AnimationRepr {
    duration: f32,
    static_bones: Vec<StaticBone>,
    animated_bones: Vec<AnimatedBone>,
}

#[cfg(feature = "serde-support")]
impl TryFrom<AnimationRepr> for Animation {
    type Error = BonemixError;

    fn try_from(repr: AnimationRepr) -> Result<Self> {
        Self::new(repr.duration, repr.static_bones, repr.animated_bones)
    }
}

/// One animation clip
///
/// `static_bones[i]` describes bone `i`; `animated_bones` is sorted ascending
/// and unique by id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(try_from = "AnimationRepr"))]
pub struct Animation {
    duration: f32,
    static_bones: Vec<StaticBone>,
    animated_bones: Vec<AnimatedBone>,
}

impl Animation {
    /// Build a clip, rejecting animated bones that are not strictly ascending by id
    pub fn new(
        duration: f32,
        static_bones: Vec<StaticBone>,
        animated_bones: Vec<AnimatedBone>,
    ) -> Result<Self> {
        if let Some(index) = animated_bones
            .windows(2)
            .position(|pair| pair[0].id >= pair[1].id)
        {
            return Err(BonemixError::UnsortedAnimatedBones {
                index: index + 1,
                id: animated_bones[index + 1].id,
            });
        }
        Ok(Self {
            duration,
            static_bones,
            animated_bones,
        })
    }

    /// Build a clip from animated bones in any order; duplicate ids are still rejected
    pub fn from_unsorted(
        duration: f32,
        static_bones: Vec<StaticBone>,
        mut animated_bones: Vec<AnimatedBone>,
    ) -> Result<Self> {
        animated_bones.sort_by_key(|bone| bone.id);
        Self::new(duration, static_bones, animated_bones)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn static_bones(&self) -> &[StaticBone] {
        &self.static_bones
    }

    pub fn animated_bones(&self) -> &[AnimatedBone] {
        &self.animated_bones
    }
}

#[cfg(feature = "serde-support")]
#[derive(Deserialize)]
struct ModelDataRepr {
    bone_ids: Vec<u32>,
    bone_offsets: Vec<Mat4>,
}

#[cfg(feature = "serde-support")]
impl TryFrom<ModelDataRepr> for ModelData {
    type Error = BonemixError;

    fn try_from(repr: ModelDataRepr) -> Result<Self> {
        Self::new(repr.bone_ids, repr.bone_offsets)
    }
}

/// Mesh-side bone list: which bones the mesh references and their inverse bind poses
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(try_from = "ModelDataRepr"))]
pub struct ModelData {
    bone_ids: Vec<u32>,
    bone_offsets: Vec<Mat4>,
}

impl ModelData {
    /// Pair bone ids with their offsets; both lists must be the same length
    pub fn new(bone_ids: Vec<u32>, bone_offsets: Vec<Mat4>) -> Result<Self> {
        if bone_ids.len() != bone_offsets.len() {
            return Err(BonemixError::MismatchedModelData {
                ids: bone_ids.len(),
                offsets: bone_offsets.len(),
            });
        }
        Ok(Self {
            bone_ids,
            bone_offsets,
        })
    }

    /// Build from `(bone id, offset)` pairs in palette order
    pub fn from_bones(bones: impl IntoIterator<Item = (u32, Mat4)>) -> Self {
        let (bone_ids, bone_offsets) = bones.into_iter().unzip();
        Self {
            bone_ids,
            bone_offsets,
        }
    }

    pub fn num_bones(&self) -> usize {
        self.bone_ids.len()
    }

    pub fn bone_ids(&self) -> &[u32] {
        &self.bone_ids
    }

    pub fn bone_offsets(&self) -> &[Mat4] {
        &self.bone_offsets
    }

    /// `(bone id, inverse bind pose)` pairs in palette order
    pub fn bones(&self) -> impl Iterator<Item = (u32, &Mat4)> {
        self.bone_ids.iter().copied().zip(self.bone_offsets.iter())
    }
}
