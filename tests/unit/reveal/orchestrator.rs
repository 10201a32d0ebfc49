use super::*;
use crate::{
    animation::{ease::Ease, state::Property, timeline::Timeline},
    scroll::region::RegionId,
};

fn fade() -> Timeline {
    Timeline::new(
        VisualState::new().with(Property::Opacity, 0.0),
        VisualState::new().with(Property::Opacity, 1.0),
        0.6,
    )
    .with_ease(Ease::Linear)
}

fn orchestrator() -> RevealOrchestrator {
    RevealOrchestrator::new(
        TrackedRegion::new(RegionId::new("projects"), 0.0),
        vec![StaggerGroup::with_delays("cards", &fade(), &[0.4, 0.5, 0.6])],
    )
}

fn region() -> Option<Rect> {
    Some(Rect::new(0.0, 2000.0, 1280.0, 2800.0))
}

fn viewport(scroll_y: f64) -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap().scrolled_to(scroll_y)
}

fn opacities(frames: &[GroupFrame]) -> Vec<f64> {
    frames[0]
        .states
        .iter()
        .map(|s| s.get(Property::Opacity).unwrap())
        .collect()
}

#[test]
fn holds_from_until_region_enters() {
    let mut o = orchestrator();
    let frames = o.tick(5.0, region(), &viewport(0.0));
    assert_eq!(opacities(&frames), vec![0.0, 0.0, 0.0]);
    assert_eq!(o.triggered_at(), None);
}

#[test]
fn timelines_run_from_trigger_instant() {
    let mut o = orchestrator();
    o.tick(1.0, region(), &viewport(0.0));
    o.tick(2.0, region(), &viewport(1500.0));
    assert_eq!(o.triggered_at(), Some(2.0));

    let at = opacities(&o.frame(2.45));
    assert!(at[0] > 0.0);
    assert_eq!(at[1], 0.0);
    assert_eq!(at[2], 0.0);

    // Scrolling away does not rewind anything.
    let later = opacities(&o.tick(4.0, region(), &viewport(0.0)));
    assert_eq!(later, vec![1.0, 1.0, 1.0]);
    assert!(o.is_settled(4.0));
}

#[test]
fn retriggering_keeps_first_instant() {
    let mut o = orchestrator();
    o.tick(2.0, region(), &viewport(1500.0));
    o.tick(3.0, region(), &viewport(0.0));
    o.tick(4.0, region(), &viewport(1500.0));
    assert_eq!(o.triggered_at(), Some(2.0));
}

#[test]
fn unmount_before_trigger_never_animates() {
    let mut o = orchestrator();
    o.tick(1.0, region(), &viewport(0.0));
    o.unmount(1.5);
    let frames = o.tick(2.0, region(), &viewport(1500.0));
    assert_eq!(o.triggered_at(), None);
    assert_eq!(opacities(&frames), vec![0.0, 0.0, 0.0]);
    assert!(!o.is_mounted());
}

#[test]
fn unmount_freezes_running_timelines() {
    let mut o = orchestrator();
    o.tick(0.0, region(), &viewport(1500.0));
    o.unmount(0.7);
    let frozen = opacities(&o.frame(0.7));
    assert_eq!(opacities(&o.frame(10.0)), frozen);
    assert!(frozen[0] > 0.0 && frozen[0] < 1.0);
}
