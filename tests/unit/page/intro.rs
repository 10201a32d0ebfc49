use super::*;

fn intro() -> IntroSequence {
    IntroSequence::start(IntroSpec::default(), 10.0).unwrap()
}

fn element<'a>(frame: &'a IntroFrame, target: &str) -> &'a VisualState {
    &frame
        .elements
        .iter()
        .find(|e| e.target == target)
        .unwrap()
        .state
}

#[test]
fn phases_follow_hold_exit_and_fade() {
    let i = intro();
    assert_eq!(i.content_start(), 12.5);
    assert_eq!(i.phase(10.0), IntroPhase::Loading);
    assert_eq!(i.phase(11.99), IntroPhase::Loading);
    assert_eq!(i.phase(12.0), IntroPhase::Exiting);
    assert_eq!(i.phase(12.5), IntroPhase::Revealing);
    assert_eq!(i.phase(13.0), IntroPhase::Done);
    assert!(!i.is_content_mounted(12.49));
    assert!(i.is_content_mounted(12.5));
}

#[test]
fn splash_fades_out_before_content_fades_in() {
    let i = intro();
    let f = i.frame(11.0);
    assert_eq!((f.splash_opacity, f.content_opacity), (1.0, 0.0));
    let f = i.frame(12.25);
    assert_eq!((f.splash_opacity, f.content_opacity), (0.5, 0.0));
    let f = i.frame(12.75);
    assert_eq!((f.splash_opacity, f.content_opacity), (0.0, 0.5));
    let f = i.frame(20.0);
    assert_eq!((f.splash_opacity, f.content_opacity), (0.0, 1.0));
    assert_eq!(f.phase, IntroPhase::Done);
}

#[test]
fn splash_elements_animate_from_intro_start() {
    let i = intro();
    let start = i.frame(10.0);
    assert_eq!(element(&start, "logo").get(Property::Scale), Some(0.8));
    assert_eq!(element(&start, "loading_bar").get(Property::Width), Some(0.0));

    let early = i.frame(10.2);
    assert_eq!(element(&early, "wordmark").get(Property::Opacity), Some(0.0));
    assert_eq!(element(&early, "caption").get(Property::Opacity), Some(0.0));

    let mid = i.frame(10.75);
    let width = element(&mid, "loading_bar").get(Property::Width).unwrap();
    assert!(width > 75.0 && width < 100.0, "width {width}");

    let loaded = i.frame(11.5);
    assert_eq!(element(&loaded, "loading_bar").get(Property::Width), Some(100.0));
    assert_eq!(element(&loaded, "logo").get(Property::Opacity), Some(1.0));
}

#[test]
fn splash_elements_unmount_with_the_splash() {
    let i = intro();
    assert_eq!(i.frame(12.4).elements.len(), 4);
    assert!(i.frame(12.5).elements.is_empty());
}

#[test]
fn spec_fields_default_individually() {
    let spec: IntroSpec = serde_json::from_str(r#"{"hold": 1.0}"#).unwrap();
    assert_eq!(spec.hold, 1.0);
    assert_eq!(spec.exit, 0.5);
    assert_eq!(spec.elements.len(), 4);
    assert_eq!(spec.content_delay(), 1.5);
}

#[test]
fn invalid_timing_is_rejected() {
    let spec = IntroSpec {
        hold: -1.0,
        ..IntroSpec::default()
    };
    assert!(spec.validate().is_err());
    let spec = IntroSpec {
        fade_in: f64::NAN,
        ..IntroSpec::default()
    };
    assert!(IntroSequence::start(spec, 0.0).is_err());
    assert!(IntroSequence::start(IntroSpec::default(), f64::INFINITY).is_err());
}

#[test]
fn zero_length_intro_mounts_content_immediately() {
    let spec = IntroSpec {
        hold: 0.0,
        exit: 0.0,
        fade_in: 0.0,
        elements: Vec::new(),
    };
    let i = IntroSequence::start(spec, 3.0).unwrap();
    assert!(i.is_content_mounted(3.0));
    assert_eq!(i.phase(3.0), IntroPhase::Done);
    assert_eq!(i.frame(3.0).content_opacity, 1.0);
}
