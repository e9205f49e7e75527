use super::*;
use crate::transform::card::TransformAnchor;

fn small_cfg() -> StackConfig {
    StackConfig {
        total_cards: 3,
        ..StackConfig::default()
    }
}

#[test]
fn identity_frame_matches_resting_state() {
    let cfg = small_cfg();
    let viewport = Viewport::new(430.0, 932.0).unwrap();
    let stack = Evaluator::eval_stack_at(&cfg, viewport, ScrollPhase::Identity).unwrap();

    assert_eq!(stack.cards.len(), 3);
    for card in &stack.cards {
        assert_eq!(card.transform.scale, 1.4);
        assert_eq!(card.size, cfg.card_size);
        assert_eq!(card.corner_radius, 5.0);
    }

    // Painter's order is back to front: highest index first.
    let indices: Vec<u32> = stack.cards.iter().map(|c| c.index.0).collect();
    assert_eq!(indices, vec![2, 1, 0]);
    let zs: Vec<i32> = stack.cards.iter().map(|c| c.z).collect();
    assert_eq!(zs, vec![-2, -1, 0]);

    // Resting angles for a 3-card stack.
    let by_index = |i: u32| {
        stack
            .cards
            .iter()
            .find(|c| c.index.0 == i)
            .unwrap()
            .transform
            .rotation
            .degrees
    };
    assert_eq!(by_index(0), -45.0);
    assert_eq!(by_index(1), -50.0);
    assert_eq!(by_index(2), -55.0);
}

#[test]
fn per_card_phases_drive_each_transform() {
    let cfg = small_cfg();
    let viewport = Viewport::new(430.0, 932.0).unwrap();
    let stack = Evaluator::eval_stack(&cfg, viewport, &[-1.0, 0.0, 1.0]).unwrap();

    let by_index = |i: u32| stack.cards.iter().find(|c| c.index.0 == i).unwrap().clone();

    // Leading card flattens, trailing card doubles its resting angle.
    assert_eq!(by_index(0).transform.rotation.degrees, 0.0);
    assert_eq!(by_index(0).transform.scale, 1.9);
    assert_eq!(by_index(1).transform.rotation.degrees, -50.0);
    assert_eq!(by_index(2).transform.rotation.degrees, -110.0);
    assert_eq!(by_index(2).transform.scale, 1.0);
    assert_eq!(by_index(2).transform.scale_anchor, TransformAnchor::BottomTrailing);
}

#[test]
fn colors_cycle_through_the_palette() {
    let cfg = StackConfig {
        total_cards: 7,
        ..StackConfig::default()
    };
    let viewport = Viewport::new(430.0, 932.0).unwrap();
    let stack = Evaluator::eval_stack_at(&cfg, viewport, ScrollPhase::Identity).unwrap();

    let by_index = |i: u32| stack.cards.iter().find(|c| c.index.0 == i).unwrap().color;
    assert_eq!(by_index(5), by_index(0));
    assert_eq!(by_index(6), by_index(1));
    // The wash keeps the stock 0.3 opacity.
    assert_eq!(by_index(0).a, 77);
}

#[test]
fn evaluation_is_deterministic() {
    let cfg = small_cfg();
    let viewport = Viewport::new(430.0, 932.0).unwrap();
    let phases = [0.25, -0.4, 0.9];
    let a = Evaluator::eval_stack(&cfg, viewport, &phases).unwrap();
    let b = Evaluator::eval_stack(&cfg, viewport, &phases).unwrap();

    for (ca, cb) in a.cards.iter().zip(&b.cards) {
        assert_eq!(ca.transform, cb.transform);
        assert_eq!(ca.origin, cb.origin);
        assert_eq!(ca.color, cb.color);
    }
}

#[test]
fn phase_slice_must_cover_every_card() {
    let cfg = small_cfg();
    let viewport = Viewport::new(430.0, 932.0).unwrap();

    assert!(matches!(
        Evaluator::eval_stack(&cfg, viewport, &[0.0, 0.0]),
        Err(CardstackError::Evaluation(_))
    ));
    assert!(matches!(
        Evaluator::eval_stack(&cfg, viewport, &[0.0, f64::NAN, 0.0]),
        Err(CardstackError::Evaluation(_))
    ));
}

#[test]
fn evaluated_stack_serializes_to_json() {
    let cfg = small_cfg();
    let viewport = Viewport::new(430.0, 932.0).unwrap();
    let stack = Evaluator::eval_stack_at(&cfg, viewport, ScrollPhase::Trailing).unwrap();

    let v: serde_json::Value = serde_json::to_value(&stack).unwrap();
    assert_eq!(v["cards"].as_array().unwrap().len(), 3);
    assert_eq!(v["cards"][0]["z"], -2);
}
