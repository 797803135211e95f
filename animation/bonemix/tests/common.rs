//! Rig builders shared by the integration tests

use bonemix::{AnimatedBone, Animation, Channel, Keyframe, Mat4, ModelData, Quat, StaticBone, Vec3};

pub fn approx_eq(a: &Mat4, b: &Mat4, tolerance: f32) -> bool {
    a.data
        .iter()
        .zip(b.data.iter())
        .all(|(x, y)| (x - y).abs() <= tolerance)
}

pub fn vec3_channel(points: &[(f32, Vec3)]) -> Channel<Vec3> {
    Channel::new(points.iter().map(|&(t, v)| Keyframe::new(t, v)).collect()).unwrap()
}

pub fn quat_channel(points: &[(f32, glam::Quat)]) -> Channel<Quat> {
    Channel::new(
        points
            .iter()
            .map(|&(t, q)| Keyframe::new(t, Quat::from(q)))
            .collect(),
    )
    .unwrap()
}

/// Animated bone with only a position track
pub fn moving_bone(id: u32, points: &[(f32, Vec3)]) -> AnimatedBone {
    AnimatedBone::new(
        id,
        vec3_channel(points),
        Channel::constant(Quat::IDENTITY),
        Channel::constant(Vec3::ONE),
    )
}

/// Straight chain: bone `i` is the child of bone `i - 1`, each offset by +1 on y
pub fn chain_statics(len: u32) -> Vec<StaticBone> {
    (0..len)
        .map(|id| {
            let transform = if id == 0 {
                Mat4::IDENTITY
            } else {
                Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0))
            };
            StaticBone::new(id, id.saturating_sub(1), transform)
        })
        .collect()
}

/// Arm rig: shoulder (1) rotates about z over 2s, elbow (2) is static,
/// wrist (3) scales over 1s.
pub fn arm_animation() -> Animation {
    let statics = vec![
        StaticBone::new(0, 0, Mat4::IDENTITY),
        StaticBone::new(1, 0, Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0))),
        StaticBone::new(2, 1, Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0))),
        StaticBone::new(3, 2, Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0))),
    ];
    let shoulder = AnimatedBone::new(
        1,
        vec3_channel(&[(0.0, Vec3::new(0.0, 5.0, 0.0))]),
        quat_channel(&[
            (0.0, glam::Quat::IDENTITY),
            (1.0, glam::Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
            (2.0, glam::Quat::IDENTITY),
        ]),
        Channel::constant(Vec3::ONE),
    );
    let wrist = AnimatedBone::new(
        3,
        vec3_channel(&[(0.0, Vec3::new(2.0, 0.0, 0.0))]),
        Channel::constant(Quat::IDENTITY),
        vec3_channel(&[(0.0, Vec3::ONE), (1.0, Vec3::new(3.0, 3.0, 3.0))]),
    );
    Animation::new(2.0, statics, vec![shoulder, wrist]).unwrap()
}

pub fn arm_model() -> ModelData {
    ModelData::new(
        vec![1, 2, 3],
        vec![
            Mat4::from_translation(Vec3::new(0.0, -5.0, 0.0)),
            Mat4::from_translation(Vec3::new(-2.0, -5.0, 0.0)),
            Mat4::from_translation(Vec3::new(-4.0, -5.0, 0.0)),
        ],
    )
    .unwrap()
}
