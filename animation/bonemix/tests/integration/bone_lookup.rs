//! Id lookups over sorted animated bones and positional static bones

use bonemix::animation::{find_animated_bone, find_static_bone};
use bonemix::{Animation, Mat4, StaticBone, Vec3};
use test_case::test_case;

use crate::common::{chain_statics, moving_bone};

fn animation(ids: &[u32]) -> Animation {
    let animated = ids
        .iter()
        .map(|&id| moving_bone(id, &[(0.0, Vec3::new(id as f32, 0.0, 0.0))]))
        .collect();
    Animation::new(1.0, chain_statics(16), animated).unwrap()
}

#[test_case(2 ; "first entry")]
#[test_case(5 ; "second entry")]
#[test_case(9 ; "third entry")]
#[test_case(14 ; "last entry")]
fn present_ids_are_found(id: u32) {
    let animation = animation(&[2, 5, 9, 14]);
    let bone = find_animated_bone(&animation, id).unwrap();
    assert_eq!(bone.id, id);
}

#[test_case(0 ; "root below range")]
#[test_case(1 ; "adjacent below first")]
#[test_case(3 ; "adjacent above first")]
#[test_case(4 ; "adjacent below second")]
#[test_case(6 ; "adjacent above second")]
#[test_case(8 ; "adjacent below third")]
#[test_case(10 ; "adjacent above third")]
#[test_case(15 ; "adjacent above last")]
fn absent_ids_are_not_found(id: u32) {
    let animation = animation(&[2, 5, 9, 14]);
    assert!(find_animated_bone(&animation, id).is_none());
}

#[test]
fn every_id_in_dense_range_resolves() {
    let ids: Vec<u32> = (1..=64).collect();
    let animated = ids
        .iter()
        .map(|&id| moving_bone(id, &[(0.0, Vec3::ZERO)]))
        .collect();
    let animation = Animation::new(1.0, chain_statics(65), animated).unwrap();
    for id in ids {
        assert_eq!(find_animated_bone(&animation, id).map(|b| b.id), Some(id));
    }
    assert!(find_animated_bone(&animation, 65).is_none());
}

#[test]
fn sparse_ids_adjacent_to_every_midpoint() {
    let ids: Vec<u32> = (0..33).map(|i| i * 3 + 1).collect();
    let animation = animation(&ids);
    for &id in &ids {
        assert_eq!(find_animated_bone(&animation, id).map(|b| b.id), Some(id));
        assert!(find_animated_bone(&animation, id + 1).is_none());
        assert!(find_animated_bone(&animation, id - 1).is_none());
    }
}

#[test]
fn static_lookup_is_positional() {
    let statics = vec![
        StaticBone::new(0, 0, Mat4::IDENTITY),
        StaticBone::new(1, 0, Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0))),
    ];
    let animation = Animation::new(1.0, statics, Vec::new()).unwrap();
    assert_eq!(
        find_static_bone(&animation, 1).map(|b| b.transform.translation()),
        Some(Vec3::new(1.0, 0.0, 0.0))
    );
    assert!(find_static_bone(&animation, 2).is_none());
}
