//! Bone hierarchy transform computation
//!
//! A bone's world transform is its parent's world transform times its local
//! transform. The local transform comes from the bone's animated track when
//! the clip has one, and from its static record otherwise. Bone 0 is the
//! world root and resolves to identity.
//!
//! Resolution recurses up the parent chain with an explicit depth bound, so a
//! malformed clip (cyclic or absurdly deep parents) is reported instead of
//! exhausting the stack. Nothing is cached between bones.

use super::bone_index::{find_animated_bone, find_static_bone};
use super::data::{Animation, ROOT_BONE_ID};
use super::interpolation::sample_local_transform;
use super::matrix::Mat4;
use crate::report::{ErrorKind, ErrorReport, ErrorSink, SourceContext};

/// Resolve the world transform of `bone_id` at `time`.
///
/// Returns `None` after reporting to `sink` when the bone or one of its
/// ancestors has no static record (`NotFound`), or when the chain is deeper
/// than `max_depth` (`DiagnosticMessage`). The subject of the report is the
/// bone at which resolution stopped.
pub fn resolve_world_transform<S: ErrorSink + ?Sized>(
    animation: &Animation,
    time: f32,
    bone_id: u32,
    max_depth: usize,
    sink: &S,
) -> Option<Mat4> {
    resolve_at_depth(animation, time, bone_id, 0, max_depth, sink)
}

fn resolve_at_depth<S: ErrorSink + ?Sized>(
    animation: &Animation,
    time: f32,
    bone_id: u32,
    depth: usize,
    max_depth: usize,
    sink: &S,
) -> Option<Mat4> {
    if bone_id == ROOT_BONE_ID {
        return Some(Mat4::IDENTITY);
    }

    if depth >= max_depth {
        log::debug!("hierarchy deeper than {max_depth} at bone {bone_id}");
        sink.report(ErrorReport::new(
            ErrorKind::DiagnosticMessage,
            SourceContext::ResolveWorld,
            bone_id,
        ));
        return None;
    }

    let Some(static_bone) = find_static_bone(animation, bone_id) else {
        sink.report(ErrorReport::new(
            ErrorKind::NotFound,
            SourceContext::ResolveWorld,
            bone_id,
        ));
        return None;
    };

    let parent = resolve_at_depth(
        animation,
        time,
        static_bone.parent_id,
        depth + 1,
        max_depth,
        sink,
    )?;

    let local = match find_animated_bone(animation, bone_id) {
        Some(animated) => sample_local_transform(animated, time),
        None => static_bone.transform,
    };

    Some(parent.mul(&local))
}
