use super::*;
use crate::{
    animation::state::Property,
    foundation::core::{Rect, Viewport},
    page::intro::IntroPhase,
};

const PAGE: &str = r#"{
    "sections": [
        {
            "id": "hero",
            "reveal": [
                {"name": "title", "template": {"from": {"opacity": 0}, "to": {"opacity": 1}, "duration": 0.8}, "delays": [0.2]}
            ]
        },
        {
            "id": "projects",
            "margin": -100,
            "reveal": [
                {"name": "cards", "template": {"from": {"opacity": 0}, "to": {"opacity": 1}, "duration": 0.6, "ease": "linear"}, "delays": [0.4, 0.5, 0.6]}
            ]
        }
    ]
}"#;

fn layout() -> RegionLayout {
    RegionLayout::new()
        .with("hero", Rect::new(0.0, 0.0, 1280.0, 800.0))
        .with("projects", Rect::new(0.0, 2000.0, 1280.0, 3000.0))
}

fn snapshot(scroll_y: f64) -> ScrollSnapshot {
    ScrollSnapshot::new(Viewport::new(1280.0, 800.0).unwrap().scrolled_to(scroll_y), 4800.0)
}

fn page() -> Page {
    Page::from_spec(&PageSpec::from_json_str(PAGE).unwrap(), 0.0).unwrap()
}

#[test]
fn each_section_holds_one_listener() {
    let page = page();
    assert_eq!(page.listener_count(), 2);
    let ids: Vec<&str> = page.section_ids().map(RegionId::as_str).collect();
    assert_eq!(ids, vec!["hero", "projects"]);
}

#[test]
fn tick_before_any_scroll_input_shows_from_states() {
    let mut page = page();
    let frame = page.tick(0.5, &layout());
    assert_eq!(frame.page_progress, 0.0);
    assert!(frame.sections.iter().all(|s| !s.entered));
}

#[test]
fn scroll_input_reaches_sections_on_next_tick() {
    let mut page = page();
    page.on_scroll(snapshot(0.0));
    let frame = page.tick(0.0, &layout());
    assert!(frame.sections[0].entered);
    assert!(!frame.sections[1].entered);

    page.on_scroll(snapshot(2000.0));
    let frame = page.tick(1.0, &layout());
    assert!(frame.sections[1].entered);
    assert_eq!(frame.page_progress, 0.5);
    assert_eq!(
        page.section(&RegionId::new("projects")).unwrap().reveal().triggered_at(),
        Some(1.0)
    );
}

#[test]
fn unmount_drops_listener_and_section() {
    let mut page = page();
    assert!(page.unmount(&RegionId::new("projects"), 1.0));
    assert!(!page.unmount(&RegionId::new("projects"), 1.0));
    assert_eq!(page.listener_count(), 1);
    page.on_scroll(snapshot(2000.0));
    let frame = page.tick(2.0, &layout());
    assert_eq!(frame.sections.len(), 1);
    assert_eq!(frame.sections[0].id, RegionId::new("hero"));
}

#[test]
fn remounting_a_section_starts_fresh() {
    let mut page = page();
    page.on_scroll(snapshot(0.0));
    page.tick(0.0, &layout());
    let spec = PageSpec::from_json_str(PAGE).unwrap();
    assert!(page.mount(&spec.sections[0], 1.0).is_err());
    page.unmount(&RegionId::new("hero"), 1.0);
    page.mount(&spec.sections[0], 1.0).unwrap();
    // The new listener sees the latest snapshot straight away.
    let frame = page.tick(1.0, &layout());
    let hero = frame.sections.iter().find(|s| s.id.as_str() == "hero").unwrap();
    assert!(hero.entered);
    assert_eq!(
        page.section(&RegionId::new("hero")).unwrap().reveal().triggered_at(),
        Some(1.0)
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"{"sections":[{"id":"a"},{"id":"a"}]}"#;
    let err = PageSpec::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("duplicate section id 'a'"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageSpec::from_json_str("{").unwrap_err();
    assert!(matches!(err, ScrollcueError::Serde(_)));
}

const INTRO_PAGE: &str = r#"{
    "intro": {"hold": 1.0, "exit": 0.5, "fade_in": 0.5},
    "sections": [
        {
            "id": "hero",
            "hover": [
                {"id": "card", "layers": [
                    {"target": "overlay", "rest": {"opacity": 0}, "hover": {"opacity": 1}, "duration": 0.3, "ease": "linear"}
                ]}
            ]
        }
    ]
}"#;

fn intro_page() -> Page {
    Page::from_spec(&PageSpec::from_json_str(INTRO_PAGE).unwrap(), 0.0).unwrap()
}

#[test]
fn sections_wait_behind_the_intro() {
    let mut page = intro_page();
    let hero = RegionId::new("hero");
    assert_eq!(page.section(&hero).unwrap().mounted_at(), 1.5);
    page.on_scroll(snapshot(0.0));

    let frame = page.tick(0.5, &layout());
    assert_eq!(frame.intro.as_ref().unwrap().phase, IntroPhase::Loading);
    assert!(!frame.sections[0].entered);
    assert!(!page.is_content_mounted(1.2));

    let frame = page.tick(1.5, &layout());
    assert_eq!(frame.intro.as_ref().unwrap().phase, IntroPhase::Revealing);
    assert!(frame.sections[0].entered);
    assert_eq!(page.section(&hero).unwrap().reveal().triggered_at(), Some(1.5));
}

#[test]
fn pointer_input_is_ignored_until_content_mounts() {
    let mut page = intro_page();
    let hero = RegionId::new("hero");
    assert!(!page.set_pointer(&hero, "card", PointerState::Hover, 1.0));
    assert!(page.set_pointer(&hero, "card", PointerState::Hover, 2.0));
    assert!(!page.set_pointer(&hero, "missing", PointerState::Hover, 2.0));
    let nowhere = RegionId::new("nowhere");
    assert!(!page.set_pointer(&nowhere, "card", PointerState::Hover, 2.0));

    let frame = page.tick(2.15, &layout());
    let card = &frame.sections[0].hover[0];
    assert_eq!(card.pointer, PointerState::Hover);
    let opacity = card.layers[0].state.get(Property::Opacity).unwrap();
    assert!(opacity > 0.0 && opacity < 1.0, "opacity {opacity}");
}

#[test]
fn pages_without_intro_report_none() {
    let mut page = page();
    assert!(page.intro().is_none());
    assert!(page.is_content_mounted(0.0));
    assert!(page.tick(0.0, &layout()).intro.is_none());
}
