//! Pairing checks between a model and an animation clip
//!
//! Evaluation trusts its inputs and only reports lookups that fail. These
//! checks let a host confirm ahead of time that a clip can drive a model.

use super::bone_index::find_static_bone;
use super::data::{Animation, ModelData, ROOT_BONE_ID};
use crate::error::{BonemixError, Result};

/// Mesh bone ids that have no static record in `animation`, in model order
pub fn missing_bones(animation: &Animation, model: &ModelData) -> Vec<u32> {
    model
        .bone_ids()
        .iter()
        .copied()
        .filter(|&id| id != ROOT_BONE_ID && find_static_bone(animation, id).is_none())
        .collect()
}

/// Check that the static records of `animation` form a lookup-consistent
/// hierarchy: each record sits at the index of its id and names a parent
/// that exists.
pub fn check_hierarchy(animation: &Animation) -> Result<()> {
    let statics = animation.static_bones();
    for (index, bone) in statics.iter().enumerate() {
        if usize::try_from(bone.id).ok() != Some(index) {
            return Err(BonemixError::StaticBoneIdMismatch { index, id: bone.id });
        }
        if bone.id == ROOT_BONE_ID {
            continue;
        }
        if bone.parent_id != ROOT_BONE_ID && find_static_bone(animation, bone.parent_id).is_none()
        {
            return Err(BonemixError::UnknownParent {
                id: bone.id,
                parent_id: bone.parent_id,
            });
        }
    }
    Ok(())
}

/// Check that `animation` can drive every bone `model` references
pub fn check_compatibility(animation: &Animation, model: &ModelData) -> Result<()> {
    check_hierarchy(animation)?;
    if let Some(&id) = missing_bones(animation, model).first() {
        log::warn!("model bone {id} missing from animation");
        return Err(BonemixError::MissingBone(id));
    }
    Ok(())
}
