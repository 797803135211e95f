//! Bone record lookup by id

use super::data::{AnimatedBone, Animation, StaticBone};

/// Find the animated-track record for `id`.
///
/// Bisects the id-sorted `animated_bones`, narrowing to `mid` on every step
/// so the interval always shrinks, then compares the survivor once.
pub fn find_animated_bone(animation: &Animation, id: u32) -> Option<&AnimatedBone> {
    let bones = animation.animated_bones();
    let (first, last) = (bones.first()?, bones.last()?);
    if id < first.id || id > last.id {
        return None;
    }

    let mut low = 0;
    let mut high = bones.len() - 1;
    while low < high {
        let mid = low + (high - low) / 2;
        if bones[mid].id < id {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    let bone = &bones[low];
    (bone.id == id).then_some(bone)
}

/// Find the static record for `id`; position in `static_bones` is the id.
///
/// The root sentinel is the caller's responsibility and is not special-cased
/// here.
pub fn find_static_bone(animation: &Animation, id: u32) -> Option<&StaticBone> {
    let index = usize::try_from(id).ok()?;
    animation.static_bones().get(index)
}
