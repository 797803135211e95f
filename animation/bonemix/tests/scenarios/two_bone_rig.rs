//! Root plus one translated bone, the smallest rig that exercises every stage

use bonemix::{Animation, CollectingSink, Evaluator, Mat4, ModelData, StaticBone, Vec3};
use pretty_assertions::assert_eq;

use crate::common::moving_bone;

fn rig() -> (Animation, ModelData) {
    let animation = Animation::new(
        1.0,
        vec![
            StaticBone::new(0, 0, Mat4::IDENTITY),
            StaticBone::new(1, 0, Mat4::IDENTITY),
        ],
        vec![moving_bone(1, &[(0.0, Vec3::new(1.0, 0.0, 0.0))])],
    )
    .unwrap();
    let model = ModelData::new(vec![1], vec![Mat4::IDENTITY]).unwrap();
    (animation, model)
}

#[test]
fn translation_holds_at_every_time() {
    let (animation, model) = rig();
    let evaluator = Evaluator::new(CollectingSink::new());
    let mut out = [Mat4::IDENTITY; 1];

    for time in [0.0, 0.25, 1.0, 17.5, -2.0] {
        evaluator.evaluate_single(&mut out, &animation, &model, time);
        assert_eq!(out[0], Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)));
    }
    assert!(evaluator.sink().is_empty());
}

#[test]
fn blending_a_clip_with_itself_changes_nothing() {
    let (animation, model) = rig();
    let evaluator = Evaluator::new(CollectingSink::new());

    let single = evaluator.single_palette(&animation, &model, 0.0);
    for factor in [0.0, 0.25, 0.5, 1.0] {
        let blended = evaluator.blended_palette(&animation, &animation, &model, (0.0, 0.9), factor);
        assert_eq!(blended, single);
    }
}

#[test]
fn root_in_model_gets_its_offset() {
    let (animation, _) = rig();
    let offset = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
    let model = ModelData::new(vec![0, 1], vec![offset, Mat4::IDENTITY]).unwrap();

    let palette = Evaluator::new(CollectingSink::new()).single_palette(&animation, &model, 0.0);
    assert_eq!(palette[0], offset);
    assert_eq!(palette[1].translation(), Vec3::new(1.0, 0.0, 0.0));
}
