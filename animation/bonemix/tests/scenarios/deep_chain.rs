//! Long parent chains near and past the hierarchy depth limit

use bonemix::{
    Animation, CollectingSink, DEFAULT_MAX_HIERARCHY_DEPTH, ErrorKind, Evaluator, Mat4, ModelData,
    Vec3,
};
use pretty_assertions::assert_eq;

use crate::common::{chain_statics, moving_bone};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn chain(len: u32) -> Animation {
    let sway = moving_bone(
        1,
        &[
            (0.0, Vec3::new(0.0, 1.0, 0.0)),
            (1.0, Vec3::new(2.0, 1.0, 0.0)),
        ],
    );
    Animation::new(1.0, chain_statics(len), vec![sway]).unwrap()
}

#[test]
fn tip_of_long_chain() {
    init_logging();
    let animation = chain(200);
    let model = ModelData::new(vec![199, 100, 1], vec![Mat4::IDENTITY; 3]).unwrap();

    let evaluator = Evaluator::default();
    let palette = evaluator.single_palette(&animation, &model, 0.5);

    assert_eq!(palette[0].translation(), Vec3::new(1.0, 199.0, 0.0));
    assert_eq!(palette[1].translation(), Vec3::new(1.0, 100.0, 0.0));
    assert_eq!(palette[2].translation(), Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn chain_past_default_depth_is_reported() {
    init_logging();
    let len = DEFAULT_MAX_HIERARCHY_DEPTH as u32 + 44;
    let tip = len - 1;
    let animation = chain(len);
    let model = ModelData::new(vec![tip, 2], vec![Mat4::IDENTITY; 2]).unwrap();

    let evaluator = Evaluator::new(CollectingSink::new());
    let palette = evaluator.single_palette(&animation, &model, 0.0);

    assert_eq!(palette[0], Mat4::IDENTITY);
    assert_eq!(palette[1].translation(), Vec3::new(0.0, 2.0, 0.0));

    let reports = evaluator.sink().reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, ErrorKind::DiagnosticMessage);
    assert_eq!(reports[0].subject_id, tip - DEFAULT_MAX_HIERARCHY_DEPTH as u32);
}
