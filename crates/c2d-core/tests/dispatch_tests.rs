// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use c2d_core::{BoundingCirclePolicy, Collider, ColliderKind, Collision, Detector};
use c2d_dry_tests::FakeSprite;
use proptest::prelude::*;

fn collider(kind: ColliderKind, x: f32, y: f32) -> Collider {
    let sprite = FakeSprite::solid(10.0, 10.0).at(x, y).shared();
    Collider::new(kind, sprite, BoundingCirclePolicy::default()).unwrap()
}

#[test]
fn every_pair_hits_when_solid_shapes_overlap() {
    let detector = Detector::default();
    for ka in ColliderKind::ALL {
        for kb in ColliderKind::ALL {
            let a = collider(ka, 0.0, 0.0);
            let b = collider(kb, 4.0, 4.0);
            assert!(detector.collided(&a, &b).is_hit(), "{ka} vs {kb}");
            assert!(detector.collided(&b, &a).is_hit(), "{kb} vs {ka}");
        }
    }
}

#[test]
fn every_pair_misses_when_far_apart() {
    let detector = Detector::default();
    for ka in ColliderKind::ALL {
        for kb in ColliderKind::ALL {
            let a = collider(ka, 0.0, 0.0);
            let b = collider(kb, 50.0, 50.0);
            assert_eq!(detector.collided(&a, &b), Collision::Miss, "{ka} vs {kb}");
        }
    }
}

#[test]
fn collider_never_collides_with_itself() {
    let detector = Detector::default();
    for kind in ColliderKind::ALL {
        let a = collider(kind, 0.0, 0.0);
        assert_eq!(detector.collided(&a, &a), Collision::Miss, "{kind}");
    }
}

#[test]
fn identical_geometry_is_not_identity() {
    let detector = Detector::default();
    let a = collider(ColliderKind::Box, 0.0, 0.0);
    let b = collider(ColliderKind::Box, 0.0, 0.0);
    assert_eq!(detector.collided(&a, &b), Collision::Overlap);
}

#[test]
fn touching_boxes_collide() {
    let detector = Detector::default();
    let a = collider(ColliderKind::Box, 0.0, 0.0);
    let b = collider(ColliderKind::Box, 10.0, 0.0);
    assert_eq!(detector.collided(&a, &b), Collision::Overlap);
}

#[test]
fn tangent_circles_do_not_collide() {
    let detector = Detector::default();
    let a = collider(ColliderKind::Circle, 0.0, 0.0);
    assert!(detector.collided(&a, &collider(ColliderKind::Circle, 8.0, 0.0)).is_hit());
    assert!(!detector.collided(&a, &collider(ColliderKind::Circle, 10.0, 0.0)).is_hit());
}

#[test]
fn circle_against_box_respects_corners() {
    let detector = Detector::default();
    // Circle centered (5, 5), radius 5.
    let circle = collider(ColliderKind::Circle, 0.0, 0.0);

    // Corner region: boxes overlap but the vertex (9, 9) is outside the disc.
    let corner_miss = collider(ColliderKind::Box, 9.0, 9.0);
    assert!(!detector.collided(&circle, &corner_miss).is_hit());
    assert!(!detector.collided(&corner_miss, &circle).is_hit());

    let corner_hit = collider(ColliderKind::Box, 7.0, 7.0);
    assert!(detector.collided(&circle, &corner_hit).is_hit());
    assert!(detector.collided(&corner_hit, &circle).is_hit());

    // Edge regions fall back to the box test.
    assert!(detector.collided(&circle, &collider(ColliderKind::Box, 9.0, 0.0)).is_hit());
    assert!(!detector.collided(&circle, &collider(ColliderKind::Box, 12.0, 0.0)).is_hit());
}

#[test]
fn non_alpha_results_carry_no_point() {
    let detector = Detector::default();
    let a = collider(ColliderKind::Circle, 0.0, 0.0);
    let b = collider(ColliderKind::Box, 4.0, 4.0);
    let hit = detector.collided(&a, &b);
    assert_eq!(hit, Collision::Overlap);
    assert_eq!(hit.point(), None);
}

fn kind_strategy() -> impl Strategy<Value = ColliderKind> {
    prop_oneof![
        Just(ColliderKind::Box),
        Just(ColliderKind::Circle),
        Just(ColliderKind::Alpha),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn box_and_circle_pairs_are_symmetric(
        ka in prop_oneof![Just(ColliderKind::Box), Just(ColliderKind::Circle)],
        kb in prop_oneof![Just(ColliderKind::Box), Just(ColliderKind::Circle)],
        x in -30i16..30,
        y in -30i16..30,
    ) {
        let detector = Detector::default();
        let a = collider(ka, 0.0, 0.0);
        let b = collider(kb, f32::from(x), f32::from(y));
        prop_assert_eq!(
            detector.collided(&a, &b).is_hit(),
            detector.collided(&b, &a).is_hit()
        );
    }

    #[test]
    fn self_collision_is_always_a_miss(kind in kind_strategy(), x in -100i16..100, y in -100i16..100) {
        let detector = Detector::default();
        let a = collider(kind, f32::from(x), f32::from(y));
        prop_assert_eq!(detector.collided(&a, &a), Collision::Miss);
    }

    #[test]
    fn precise_predicates_imply_box_overlap(
        ka in kind_strategy(),
        kb in kind_strategy(),
        x in -30i16..30,
        y in -30i16..30,
    ) {
        let detector = Detector::default();
        let a = collider(ka, 0.0, 0.0);
        let b = collider(kb, f32::from(x), f32::from(y));
        if detector.collided(&a, &b).is_hit() {
            prop_assert!(c2d_core::collided_box(&a.effective_bounds(), &b.effective_bounds()));
        }
    }
}
