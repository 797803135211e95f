//! Keyframe interpolation for bone channels
//!
//! Each channel loops over its own window `[0, last keyframe time)`,
//! independently of the clip duration and of the other two channels.

use super::data::{AnimatedBone, Channel, Keyframe};
use super::matrix::Mat4;
use super::types::{Lerp, Quat, Vec3};

/// Wrap `time` into `[0, window)` with floating modulo.
///
/// Negative remainders are shifted up by one window. A window that is not a
/// positive finite number has no loop to wrap into and maps every time to 0.
pub fn wrap_time(time: f32, window: f32) -> f32 {
    if !(window > 0.0 && window.is_finite()) {
        return 0.0;
    }
    let wrapped = time % window;
    if wrapped < 0.0 { wrapped + window } else { wrapped }
}

/// Find the left index of the keyframe pair bracketing `time`
///
/// Returns the largest `index <= len - 2` with `keyframes[index].time <= time`,
/// or 0 when `time` precedes the first keyframe. Callers guarantee at least
/// two keyframes.
pub fn find_bracket<V>(keyframes: &[Keyframe<V>], time: f32) -> usize {
    if keyframes.len() < 2 {
        return 0;
    }

    let mut low = 0;
    let mut high = keyframes.len() - 2;

    while low < high {
        let mid = (low + high).div_ceil(2);
        if keyframes[mid].time <= time {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    low
}

/// Sample a channel at `time`
///
/// A single keyframe is returned unconditionally. Otherwise the time is
/// wrapped into the channel's loop window and the bracketing pair is blended
/// with `V::lerp` (slerp for rotations). The ratio is not clamped, so a time
/// before the first keyframe extrapolates from the first pair.
pub fn sample_channel<V: Lerp>(channel: &Channel<V>, time: f32) -> V {
    let keyframes = channel.keyframes();
    if let [only] = keyframes {
        return only.value;
    }

    let local_time = wrap_time(time, channel.last_time());
    let index = find_bracket(keyframes, local_time);
    let left = &keyframes[index];
    let right = &keyframes[index + 1];

    let span = right.time - left.time;
    if span <= 0.0 {
        return left.value;
    }

    let ratio = (local_time - left.time) / span;
    left.value.lerp(&right.value, ratio)
}

/// Sampled local transform components of one bone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl LocalPose {
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation_scale(self.rotation, self.translation, self.scale)
    }
}

impl Default for LocalPose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Sample all three channels of `bone` at `time`
pub fn sample_local_pose(bone: &AnimatedBone, time: f32) -> LocalPose {
    LocalPose {
        translation: sample_channel(&bone.position, time),
        rotation: sample_channel(&bone.rotation, time),
        scale: sample_channel(&bone.scaling, time),
    }
}

/// Local transform of `bone` at `time`
pub fn sample_local_transform(bone: &AnimatedBone, time: f32) -> Mat4 {
    sample_local_pose(bone, time).to_matrix()
}
