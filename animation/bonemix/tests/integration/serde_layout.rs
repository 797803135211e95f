//! JSON layout of clips and models

use bonemix::{
    Animation, BonemixError, Channel, ErrorKind, ErrorReport, ModelData, SourceContext, Vec3,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{arm_animation, arm_model};

#[test]
fn animation_survives_json() {
    let animation = arm_animation();
    let text = serde_json::to_string(&animation).unwrap();
    let parsed: Animation = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, animation);

    let model = arm_model();
    let parsed: ModelData = serde_json::from_value(serde_json::to_value(&model).unwrap()).unwrap();
    assert_eq!(parsed, model);
}

#[test]
fn channel_is_a_plain_keyframe_list() {
    let value = json!([
        { "time": 0.0, "value": { "x": 0.0, "y": 0.0, "z": 0.0 } },
        { "time": 1.5, "value": { "x": 3.0, "y": 0.0, "z": 0.0 } }
    ]);
    let channel: Channel<Vec3> = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(channel.len(), 2);
    assert_eq!(channel.last_time(), 1.5);
    assert_eq!(serde_json::to_value(&channel).unwrap(), value);
}

#[test]
fn unsorted_channel_is_rejected() {
    let value = json!([
        { "time": 1.0, "value": 0.0 },
        { "time": 0.5, "value": 1.0 }
    ]);
    let err = serde_json::from_value::<Channel<f32>>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains(&BonemixError::UnsortedChannel { index: 1 }.to_string())
    );
}

#[test]
fn empty_channel_is_rejected() {
    assert!(serde_json::from_value::<Channel<f32>>(json!([])).is_err());
}

#[test]
fn unsorted_animated_bones_are_rejected() {
    let mut value = serde_json::to_value(arm_animation()).unwrap();
    let bones = value["animated_bones"].as_array_mut().unwrap();
    bones.reverse();
    assert!(serde_json::from_value::<Animation>(value).is_err());
}

#[test]
fn mismatched_model_is_rejected() {
    let mut value = serde_json::to_value(arm_model()).unwrap();
    value["bone_ids"].as_array_mut().unwrap().push(json!(9));
    assert!(serde_json::from_value::<ModelData>(value).is_err());
}

#[test]
fn error_report_layout() {
    let report = ErrorReport::new(ErrorKind::NotFound, SourceContext::ResolveWorld, 12);
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(
        value,
        json!({ "kind": "NotFound", "context": "ResolveWorld", "subject_id": 12 })
    );
}
