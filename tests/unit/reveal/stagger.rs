use super::*;
use crate::animation::{ease::Ease, state::Property};

fn card() -> Timeline {
    Timeline::new(
        VisualState::new()
            .with(Property::Opacity, 0.0)
            .with(Property::Y, 50.0),
        VisualState::new()
            .with(Property::Opacity, 1.0)
            .with(Property::Y, 0.0),
        0.6,
    )
    .with_ease(Ease::OUT_EXPO)
}

#[test]
fn staggered_members_start_in_sequence() {
    let group = StaggerGroup::with_delays("cards", &card(), &[0.4, 0.5, 0.6]);
    let states = group.states_at(Some(0.45));
    assert_ne!(states[0], card().from);
    assert!(states[0].get(Property::Opacity).unwrap() > 0.0);
    assert_eq!(states[1], card().from);
    assert_eq!(states[2], card().from);

    let done = group.states_at(Some(1.2));
    assert!(done.iter().all(|s| *s == card().to));
    assert!(group.is_finished(1.2));
    assert!(!group.is_finished(1.19));
}

#[test]
fn untriggered_group_shows_from_states() {
    let group = StaggerGroup::uniform("cards", &card(), 4, 0.2, 0.1);
    let states = group.states_at(None);
    assert_eq!(states.len(), 4);
    assert!(states.iter().all(|s| *s == card().from));
}

#[test]
fn uniform_spaces_delays() {
    let group = StaggerGroup::uniform("skills", &card().with_delay(0.1), 3, 0.2, 0.05);
    let delays: Vec<f64> = group.members.iter().map(|m| m.delay).collect();
    for (got, want) in delays.iter().zip([0.3, 0.35, 0.4]) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn simultaneous_delays_are_legal() {
    let group = StaggerGroup::with_delays("pair", &card(), &[0.3, 0.3]);
    group.validate().unwrap();
    let states = group.states_at(Some(0.5));
    assert_eq!(states[0], states[1]);
}

#[test]
fn validate_names_the_bad_member() {
    let mut group = StaggerGroup::with_delays("cards", &card(), &[0.0, 0.1]);
    group.members[1].to.set(Property::Scale, 1.0);
    let err = group.validate().unwrap_err().to_string();
    assert!(err.contains("cards"));
    assert!(err.contains("member 1"));
}
