//! Three-joint arm driven through a full loop

use std::f32::consts::FRAC_1_SQRT_2;

use bonemix::{CollectingSink, Evaluator, Mat4, Vec3};

use crate::common::{approx_eq, arm_animation, arm_model};

fn assert_close(actual: Vec3, expected: Vec3) {
    let close = (actual.x - expected.x).abs() < 1e-4
        && (actual.y - expected.y).abs() < 1e-4
        && (actual.z - expected.z).abs() < 1e-4;
    assert!(close, "{actual:?} != {expected:?}");
}

#[test]
fn rest_pose_skins_to_identity() {
    let evaluator = Evaluator::new(CollectingSink::new());
    let animation = arm_animation();
    let model = arm_model();

    // Every channel is back at its first keyframe at 0 and at 2 seconds.
    for time in [0.0, 2.0, 4.0] {
        let palette = evaluator.single_palette(&animation, &model, time);
        for matrix in &palette {
            assert!(approx_eq(matrix, &Mat4::IDENTITY, 1e-6), "t={time}: {matrix:?}");
        }
    }
    assert!(evaluator.sink().is_empty());
}

#[test]
fn eighth_turn_with_scaled_wrist() {
    let evaluator = Evaluator::new(CollectingSink::new());
    let palette = evaluator.single_palette(&arm_animation(), &arm_model(), 0.5);

    // Shoulder at 45 degrees, wrist scale at 2.
    let elbow = palette[1].transform_point(Vec3::new(2.0, 5.0, 0.0));
    assert_close(elbow, Vec3::new(2.0 * FRAC_1_SQRT_2, 5.0 + 2.0 * FRAC_1_SQRT_2, 0.0));

    let wrist = palette[2].transform_point(Vec3::new(4.0, 5.0, 0.0));
    assert_close(wrist, Vec3::new(4.0 * FRAC_1_SQRT_2, 5.0 + 4.0 * FRAC_1_SQRT_2, 0.0));

    // One unit past the wrist is stretched to two.
    let fingertip = palette[2].transform_point(Vec3::new(5.0, 5.0, 0.0));
    assert_close(fingertip, Vec3::new(6.0 * FRAC_1_SQRT_2, 5.0 + 6.0 * FRAC_1_SQRT_2, 0.0));
}

#[test]
fn crossfade_towards_rest() {
    let evaluator = Evaluator::new(CollectingSink::new());
    let animation = arm_animation();
    let model = arm_model();

    let posed = evaluator.single_palette(&animation, &model, 1.0);
    let halfway = evaluator.blended_palette(&animation, &animation, &model, (1.0, 0.0), 0.5);

    for (posed, blended) in posed.iter().zip(&halfway) {
        let expected = posed.lerp_entries(&Mat4::IDENTITY, 0.5);
        assert!(approx_eq(blended, &expected, 1e-5));
    }
}
