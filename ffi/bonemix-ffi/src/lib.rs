//! C API for the bonemix skeletal animation evaluator
//!
//! Hosts hand over plain C structs (pointer and count pairs) and a result
//! buffer of `model->numBones` matrices. Each call copies the input into the
//! validated bonemix types, evaluates, and writes the palette back. Problems
//! are never returned: they go to the callback registered with
//! [`bonemix_set_error_callback`] as `(kind, source_context, subject_id)`
//! integers, and the last one per thread is kept for
//! [`bonemix_get_last_error`].

use std::cell::Cell;
use std::slice;
use std::sync::Mutex;

use bonemix::{
    AnimatedBone, Animation, Channel, ErrorKind, ErrorReport, ErrorSink, Evaluator, Keyframe,
    Mat4, ModelData, Quat, SourceContext, StaticBone, Vec3,
};

/// Host function receiving `(kind, source_context, subject_id)`
pub type ErrorCallback = extern "C" fn(kind: u32, source_context: u32, subject_id: u32);

static ERROR_CALLBACK: Mutex<Option<ErrorCallback>> = Mutex::new(None);

// Thread-local error storage
thread_local! {
    static LAST_ERROR: Cell<Option<ErrorReport>> = const { Cell::new(None) };
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CQuat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Column-major matrix, translation in `m[12..15]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CMat4 {
    pub m: [f32; 16],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CPositionKeyframe {
    pub time: f32,
    pub pos: CVec3,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CRotationKeyframe {
    pub time: f32,
    pub rot: CQuat,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CScalingKeyframe {
    pub time: f32,
    pub scl: CVec3,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CAnimatedBone {
    pub id: u32,
    pub n_position_keyframes: u32,
    pub position_channel: *const CPositionKeyframe,
    pub n_rotation_keyframes: u32,
    pub rotation_channel: *const CRotationKeyframe,
    pub n_scaling_keyframes: u32,
    pub scaling_channel: *const CScalingKeyframe,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CModelData {
    pub num_bones: u32,
    pub bone_ids: *const u32,
    pub bone_offsets: *const CMat4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CStaticBone {
    pub id: u32,
    pub parent_id: u32,
    pub transform: CMat4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CAnimation {
    pub duration: f32,
    pub num_static_bones: u32,
    pub static_bones: *const CStaticBone,
    pub num_animated_bones: u32,
    pub animated_bones: *const CAnimatedBone,
}

impl From<CVec3> for Vec3 {
    fn from(v: CVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<CQuat> for Quat {
    fn from(q: CQuat) -> Self {
        Quat::new(q.x, q.y, q.z, q.w)
    }
}

impl From<CMat4> for Mat4 {
    fn from(m: CMat4) -> Self {
        Mat4::from_cols_array(m.m)
    }
}

impl From<Mat4> for CMat4 {
    fn from(m: Mat4) -> Self {
        CMat4 { m: m.data }
    }
}

/// Forwards reports to the registered host callback
#[derive(Debug, Clone, Copy, Default)]
struct HostCallbackSink;

impl ErrorSink for HostCallbackSink {
    fn report(&self, report: ErrorReport) {
        LAST_ERROR.with(|last| last.set(Some(report)));

        let callback = match ERROR_CALLBACK.lock() {
            Ok(callback) => *callback,
            Err(poisoned) => *poisoned.into_inner(),
        };
        match callback {
            Some(callback) => {
                let (kind, context, subject) = report.codes();
                callback(kind, context, subject);
            }
            None => log::warn!("bonemix: {report} (no error callback registered)"),
        }
    }
}

fn report(sink: &HostCallbackSink, kind: ErrorKind, context: SourceContext, subject_id: u32) {
    sink.report(ErrorReport::new(kind, context, subject_id));
}

/// Borrow `len` elements at `ptr`. An empty range may be null; a non-empty
/// one may not.
unsafe fn raw_slice<'a, T>(ptr: *const T, len: u32) -> Option<&'a [T]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { slice::from_raw_parts(ptr, len as usize) })
}

unsafe fn read_channel<C, V>(
    ptr: *const C,
    len: u32,
    bone_id: u32,
    sink: &HostCallbackSink,
    convert: impl Fn(&C) -> Keyframe<V>,
) -> Option<Channel<V>> {
    let keyframes = match unsafe { raw_slice(ptr, len) } {
        Some(raw) if !raw.is_empty() => raw.iter().map(convert).collect(),
        _ => {
            report(sink, ErrorKind::NullInput, SourceContext::SampleBone, bone_id);
            return None;
        }
    };

    match Channel::new(keyframes) {
        Ok(channel) => Some(channel),
        Err(err) => {
            log::debug!("bone {bone_id}: {err}");
            report(sink, ErrorKind::DiagnosticMessage, SourceContext::Ffi, bone_id);
            None
        }
    }
}

unsafe fn read_animated_bone(
    bone: &CAnimatedBone,
    sink: &HostCallbackSink,
) -> Option<AnimatedBone> {
    let position = unsafe {
        read_channel(bone.position_channel, bone.n_position_keyframes, bone.id, sink, |k| {
            Keyframe::new(k.time, Vec3::from(k.pos))
        })
    }?;
    let rotation = unsafe {
        read_channel(bone.rotation_channel, bone.n_rotation_keyframes, bone.id, sink, |k| {
            Keyframe::new(k.time, Quat::from(k.rot))
        })
    }?;
    let scaling = unsafe {
        read_channel(bone.scaling_channel, bone.n_scaling_keyframes, bone.id, sink, |k| {
            Keyframe::new(k.time, Vec3::from(k.scl))
        })
    }?;
    Some(AnimatedBone::new(bone.id, position, rotation, scaling))
}

unsafe fn read_animation(animation: &CAnimation, sink: &HostCallbackSink) -> Option<Animation> {
    let Some(static_bones) =
        (unsafe { raw_slice(animation.static_bones, animation.num_static_bones) })
    else {
        report(sink, ErrorKind::NullInput, SourceContext::Ffi, 0);
        return None;
    };
    let Some(animated_bones) =
        (unsafe { raw_slice(animation.animated_bones, animation.num_animated_bones) })
    else {
        report(sink, ErrorKind::NullInput, SourceContext::Ffi, 0);
        return None;
    };

    let static_bones = static_bones
        .iter()
        .map(|bone| StaticBone::new(bone.id, bone.parent_id, bone.transform.into()))
        .collect();
    let animated_bones = animated_bones
        .iter()
        .map(|bone| unsafe { read_animated_bone(bone, sink) })
        .collect::<Option<Vec<_>>>()?;

    match Animation::new(animation.duration, static_bones, animated_bones) {
        Ok(animation) => Some(animation),
        Err(err) => {
            log::debug!("rejected animation: {err}");
            report(sink, ErrorKind::DiagnosticMessage, SourceContext::Ffi, 0);
            None
        }
    }
}

unsafe fn read_model(model: &CModelData, sink: &HostCallbackSink) -> Option<ModelData> {
    let ids = unsafe { raw_slice(model.bone_ids, model.num_bones) };
    let offsets = unsafe { raw_slice(model.bone_offsets, model.num_bones) };
    let (Some(ids), Some(offsets)) = (ids, offsets) else {
        report(sink, ErrorKind::NullInput, SourceContext::Ffi, 0);
        return None;
    };

    let bones = ids.iter().zip(offsets).map(|(&id, &m)| (id, Mat4::from(m)));
    Some(ModelData::from_bones(bones))
}

/// Run `evaluate` over a copy of the caller's buffer and write it back, so
/// slots the evaluator skips keep their previous contents.
unsafe fn with_result_buffer(rsl_buffer: *mut CMat4, len: u32, evaluate: impl FnOnce(&mut [Mat4])) {
    let out = unsafe { slice::from_raw_parts_mut(rsl_buffer, len as usize) };
    let mut palette: Vec<Mat4> = out.iter().map(|&m| Mat4::from(m)).collect();
    evaluate(&mut palette);
    for (slot, matrix) in out.iter_mut().zip(palette) {
        *slot = matrix.into();
    }
}

/// Register the host error callback; null clears it
#[no_mangle]
pub extern "C" fn bonemix_set_error_callback(callback: Option<ErrorCallback>) {
    match ERROR_CALLBACK.lock() {
        Ok(mut current) => *current = callback,
        Err(poisoned) => *poisoned.into_inner() = callback,
    }
}

/// Copy the last report raised on this thread into the non-null out pointers
///
/// Returns false when nothing has been reported since the last clear.
///
/// # Safety
///
/// Each out pointer must be null or valid for a `u32` write.
#[no_mangle]
pub unsafe extern "C" fn bonemix_get_last_error(
    kind: *mut u32,
    source_context: *mut u32,
    subject_id: *mut u32,
) -> bool {
    let Some(last) = LAST_ERROR.with(Cell::get) else {
        return false;
    };
    let (k, c, s) = last.codes();
    for (out, value) in [(kind, k), (source_context, c), (subject_id, s)] {
        if !out.is_null() {
            unsafe { *out = value };
        }
    }
    true
}

#[no_mangle]
pub extern "C" fn bonemix_clear_last_error() {
    LAST_ERROR.with(|last| last.set(None));
}

/// Fill `rsl_buffer[..model->numBones]` with the skinning palette of
/// `animation` at `animation_time`.
///
/// # Safety
///
/// Non-null pointers must reference valid structs whose pointer and count
/// pairs describe live arrays, and `rsl_buffer` must hold `model->numBones`
/// matrices.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn getSingleAnimation(
    rsl_buffer: *mut CMat4,
    animation: *const CAnimation,
    model: *const CModelData,
    animation_time: f32,
) {
    let sink = HostCallbackSink;
    if rsl_buffer.is_null() || animation.is_null() || model.is_null() {
        report(&sink, ErrorKind::NullInput, SourceContext::EvaluateSingle, 0);
        return;
    }
    let (animation, model) = unsafe { (&*animation, &*model) };

    let Some(model_data) = (unsafe { read_model(model, &sink) }) else {
        return;
    };
    let Some(animation) = (unsafe { read_animation(animation, &sink) }) else {
        return;
    };

    let evaluator = Evaluator::new(sink);
    unsafe {
        with_result_buffer(rsl_buffer, model.num_bones, |out| {
            evaluator.evaluate_single(out, &animation, &model_data, animation_time);
        });
    }
}

/// Fill `rsl_buffer[..model->numBones]` with the entry-wise blend of `a1` at
/// `t1` and `a2` at `t2`.
///
/// # Safety
///
/// Same requirements as [`getSingleAnimation`], for both clips.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn getBlendedAnimation(
    rsl_buffer: *mut CMat4,
    a1: *const CAnimation,
    a2: *const CAnimation,
    model: *const CModelData,
    t1: f32,
    t2: f32,
    blend_factor: f32,
) {
    let sink = HostCallbackSink;
    if rsl_buffer.is_null() || a1.is_null() || a2.is_null() || model.is_null() {
        report(&sink, ErrorKind::NullInput, SourceContext::EvaluateBlended, 0);
        return;
    }
    let (a1, a2, model) = unsafe { (&*a1, &*a2, &*model) };

    let Some(model_data) = (unsafe { read_model(model, &sink) }) else {
        return;
    };
    let Some(a1) = (unsafe { read_animation(a1, &sink) }) else {
        return;
    };
    let Some(a2) = (unsafe { read_animation(a2, &sink) }) else {
        return;
    };

    let evaluator = Evaluator::new(sink);
    unsafe {
        with_result_buffer(rsl_buffer, model.num_bones, |out| {
            evaluator.evaluate_blended(out, &a1, &a2, &model_data, t1, t2, blend_factor);
        });
    }
}
