use super::*;
use crate::animation::state::Property;

fn scale(v: f64) -> VisualState {
    VisualState::new().with(Property::Scale, v)
}

fn button() -> HoverTarget {
    let layer = HoverLayer::new("cta", scale(1.0), scale(1.05))
        .with_press(scale(0.95))
        .with_timing(0.2, 0.0, Ease::Linear);
    HoverTarget::new("cta", vec![layer]).unwrap()
}

fn scale_at(target: &HoverTarget, now: f64) -> f64 {
    target.frame(now).layers[0].state.get(Property::Scale).unwrap()
}

#[test]
fn rests_until_pointer_arrives() {
    let t = button();
    assert_eq!(t.pointer(), PointerState::Rest);
    assert_eq!(scale_at(&t, 0.0), 1.0);
    assert_eq!(scale_at(&t, 100.0), 1.0);
    assert!(t.is_settled(0.0));
}

#[test]
fn hover_tweens_to_hover_look() {
    let mut t = button();
    assert!(t.set_hovered(true, 0.0));
    assert_eq!(scale_at(&t, 0.0), 1.0);
    assert!((scale_at(&t, 0.1) - 1.025).abs() < 1e-12);
    assert_eq!(scale_at(&t, 0.2), 1.05);
    assert!(!t.is_settled(0.1));
    assert!(t.is_settled(0.2));
    assert!(!t.set_hovered(true, 0.5));
}

#[test]
fn interrupted_transition_is_continuous() {
    let mut t = button();
    t.set_hovered(true, 0.0);
    let mid = scale_at(&t, 0.1);
    t.set_hovered(false, 0.1);
    assert_eq!(scale_at(&t, 0.1), mid);
    assert!((scale_at(&t, 0.2) - (mid + (1.0 - mid) * 0.5)).abs() < 1e-12);
    assert_eq!(scale_at(&t, 0.5), 1.0);
}

#[test]
fn press_then_leave_releases_to_rest() {
    let mut t = button();
    t.set_hovered(true, 0.0);
    assert!(t.set_pointer(PointerState::Press, 1.0));
    assert_eq!(scale_at(&t, 2.0), 0.95);
    // Re-entering while pressed keeps the press.
    assert!(!t.set_hovered(true, 2.0));
    assert!(t.set_hovered(false, 2.0));
    assert_eq!(t.pointer(), PointerState::Rest);
    assert_eq!(scale_at(&t, 3.0), 1.0);
}

#[test]
fn press_falls_back_to_hover_look() {
    let layer =
        HoverLayer::new("icon", scale(1.0), scale(1.2)).with_timing(0.0, 0.0, Ease::Linear);
    let mut t = HoverTarget::new("icon", vec![layer]).unwrap();
    t.set_pointer(PointerState::Press, 0.0);
    assert_eq!(scale_at(&t, 0.0), 1.2);
}

#[test]
fn layers_share_one_pointer_but_keep_their_timing() {
    let overlay = HoverLayer::new(
        "overlay",
        VisualState::new().with(Property::Opacity, 0.0),
        VisualState::new().with(Property::Opacity, 1.0),
    )
    .with_timing(0.3, 0.0, Ease::Linear);
    let actions = HoverLayer::new(
        "actions",
        VisualState::new().with(Property::Y, 20.0),
        VisualState::new().with(Property::Y, 0.0),
    )
    .with_timing(0.3, 0.1, Ease::Linear);
    let mut card = HoverTarget::new("card", vec![overlay, actions]).unwrap();
    card.set_hovered(true, 0.0);

    let f = card.frame(0.1);
    assert_eq!(f.pointer, PointerState::Hover);
    assert!(f.layers[0].state.get(Property::Opacity).unwrap() > 0.0);
    assert_eq!(f.layers[1].state.get(Property::Y), Some(20.0));
    assert!(!card.is_settled(0.35));
    assert!(card.is_settled(0.5));
}

#[test]
fn mismatched_looks_are_rejected() {
    let layer = HoverLayer::new(
        "bad",
        scale(1.0),
        VisualState::new().with(Property::Rotate, 10.0),
    );
    assert!(HoverTarget::new("bad", vec![layer]).is_err());
    let layer =
        HoverLayer::new("bad", scale(1.0), scale(1.1)).with_timing(f64::NAN, 0.0, Ease::Linear);
    assert!(HoverTarget::new("bad", vec![layer]).is_err());
    assert!(HoverTarget::new(" ", vec![]).is_err());
}

#[test]
fn layer_parses_with_default_timing() {
    let layer: HoverLayer = serde_json::from_str(
        r#"{"target":"icon","rest":{"scale":1,"rotate":0},"hover":{"scale":1.2,"rotate":10}}"#,
    )
    .unwrap();
    assert_eq!(layer.duration, Timeline::DEFAULT_DURATION);
    assert_eq!(layer.delay, 0.0);
    assert!(layer.press.is_none());
    layer.validate().unwrap();
}
