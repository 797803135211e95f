//! Batch evaluation of skinning palettes
//!
//! For every bone the mesh references, the skinning matrix is the bone's
//! world transform times its inverse bind pose. Output slot `i` belongs to
//! `model.bone_ids()[i]`; slots past `model.num_bones()` are never touched,
//! and a slot whose bone fails to resolve keeps whatever the caller left in
//! it.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::data::{Animation, ModelData};
use super::hierarchy::resolve_world_transform;
use super::matrix::Mat4;
use crate::options::EvaluatorOptions;
use crate::report::{ErrorKind, ErrorReport, ErrorSink, LogSink, SourceContext};

/// Skinning palette evaluator
///
/// Holds no per-frame state: every call recomputes from its inputs, so one
/// evaluator can serve any number of clips and models, and concurrent calls
/// only need separate output buffers.
#[derive(Debug, Clone)]
pub struct Evaluator<S = LogSink> {
    sink: S,
    options: EvaluatorOptions,
}

impl Default for Evaluator<LogSink> {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

impl<S: ErrorSink> Evaluator<S> {
    /// Create an evaluator reporting to `sink` with default options
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, EvaluatorOptions::default())
    }

    pub fn with_options(sink: S, options: EvaluatorOptions) -> Self {
        Self { sink, options }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Fill `out[..model.num_bones()]` with the skinning palette of
    /// `animation` at `time`.
    ///
    /// A buffer shorter than the model is reported as `NullInput` and left
    /// untouched.
    pub fn evaluate_single(
        &self,
        out: &mut [Mat4],
        animation: &Animation,
        model: &ModelData,
        time: f32,
    ) {
        let Some(out) = self.output_slots(out, model, SourceContext::EvaluateSingle) else {
            return;
        };
        log::debug!("evaluating {} bones at t={time}", model.num_bones());

        for (slot, (bone_id, offset)) in out.iter_mut().zip(model.bones()) {
            if let Some(matrix) = self.skinning_matrix(animation, time, bone_id, offset) {
                *slot = matrix;
            }
        }
    }

    /// Fill `out[..model.num_bones()]` with an entry-wise blend of two clips.
    ///
    /// Each clip is evaluated as in [`Evaluator::evaluate_single`], then the
    /// sixteen entries of each pair of skinning matrices are interpolated
    /// independently with `blend_factor` (0 gives `animation_a`, 1 gives
    /// `animation_b`). A bone that fails in either clip is skipped.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_blended(
        &self,
        out: &mut [Mat4],
        animation_a: &Animation,
        animation_b: &Animation,
        model: &ModelData,
        time_a: f32,
        time_b: f32,
        blend_factor: f32,
    ) {
        let Some(out) = self.output_slots(out, model, SourceContext::EvaluateBlended) else {
            return;
        };
        log::debug!(
            "blending {} bones at t=({time_a}, {time_b}) factor {blend_factor}",
            model.num_bones()
        );

        for (slot, (bone_id, offset)) in out.iter_mut().zip(model.bones()) {
            if let Some(matrix) = self.blended_matrix(
                (animation_a, time_a),
                (animation_b, time_b),
                bone_id,
                offset,
                blend_factor,
            ) {
                *slot = matrix;
            }
        }
    }

    /// Allocate an identity-filled palette sized to the model and evaluate into it
    pub fn single_palette(&self, animation: &Animation, model: &ModelData, time: f32) -> Vec<Mat4> {
        let mut palette = vec![Mat4::IDENTITY; model.num_bones()];
        self.evaluate_single(&mut palette, animation, model, time);
        palette
    }

    /// Allocate an identity-filled palette sized to the model and blend into it
    pub fn blended_palette(
        &self,
        animation_a: &Animation,
        animation_b: &Animation,
        model: &ModelData,
        times: (f32, f32),
        blend_factor: f32,
    ) -> Vec<Mat4> {
        let mut palette = vec![Mat4::IDENTITY; model.num_bones()];
        self.evaluate_blended(
            &mut palette,
            animation_a,
            animation_b,
            model,
            times.0,
            times.1,
            blend_factor,
        );
        palette
    }

    fn output_slots<'a>(
        &self,
        out: &'a mut [Mat4],
        model: &ModelData,
        context: SourceContext,
    ) -> Option<&'a mut [Mat4]> {
        let required = model.num_bones();
        if out.len() < required {
            log::debug!("output buffer holds {} slots, {required} required", out.len());
            self.sink.report(ErrorReport::new(
                ErrorKind::NullInput,
                context,
                u32::try_from(required).unwrap_or(u32::MAX),
            ));
            return None;
        }
        Some(&mut out[..required])
    }

    fn skinning_matrix(
        &self,
        animation: &Animation,
        time: f32,
        bone_id: u32,
        offset: &Mat4,
    ) -> Option<Mat4> {
        let world = resolve_world_transform(
            animation,
            time,
            bone_id,
            self.options.max_hierarchy_depth,
            &self.sink,
        );
        if world.is_none() {
            log::trace!("skipping bone {bone_id}");
        }
        Some(world?.mul(offset))
    }

    fn blended_matrix(
        &self,
        (animation_a, time_a): (&Animation, f32),
        (animation_b, time_b): (&Animation, f32),
        bone_id: u32,
        offset: &Mat4,
        blend_factor: f32,
    ) -> Option<Mat4> {
        let a = self.skinning_matrix(animation_a, time_a, bone_id, offset)?;
        let b = self.skinning_matrix(animation_b, time_b, bone_id, offset)?;
        Some(a.lerp_entries(&b, blend_factor))
    }
}

#[cfg(feature = "parallel")]
impl<S: ErrorSink + Sync> Evaluator<S> {
    /// [`Evaluator::evaluate_single`] with bones dispatched across the rayon pool
    pub fn evaluate_single_par(
        &self,
        out: &mut [Mat4],
        animation: &Animation,
        model: &ModelData,
        time: f32,
    ) {
        let Some(out) = self.output_slots(out, model, SourceContext::EvaluateSingle) else {
            return;
        };

        out.par_iter_mut()
            .zip(model.bone_ids().par_iter())
            .zip(model.bone_offsets().par_iter())
            .for_each(|((slot, &bone_id), offset)| {
                if let Some(matrix) = self.skinning_matrix(animation, time, bone_id, offset) {
                    *slot = matrix;
                }
            });
    }

    /// [`Evaluator::evaluate_blended`] with bones dispatched across the rayon pool
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_blended_par(
        &self,
        out: &mut [Mat4],
        animation_a: &Animation,
        animation_b: &Animation,
        model: &ModelData,
        time_a: f32,
        time_b: f32,
        blend_factor: f32,
    ) {
        let Some(out) = self.output_slots(out, model, SourceContext::EvaluateBlended) else {
            return;
        };

        out.par_iter_mut()
            .zip(model.bone_ids().par_iter())
            .zip(model.bone_offsets().par_iter())
            .for_each(|((slot, &bone_id), offset)| {
                if let Some(matrix) = self.blended_matrix(
                    (animation_a, time_a),
                    (animation_b, time_b),
                    bone_id,
                    offset,
                    blend_factor,
                ) {
                    *slot = matrix;
                }
            });
    }
}
