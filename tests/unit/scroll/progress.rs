use super::*;

fn viewport(scroll_y: f64) -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap().scrolled_to(scroll_y)
}

fn region() -> Option<Rect> {
    Some(Rect::new(0.0, 1000.0, 1280.0, 1400.0))
}

#[test]
fn parses_named_and_numeric_edges() {
    assert_eq!(Anchor::parse("start end").unwrap(), Anchor::START_END);
    assert_eq!(Anchor::parse(" end   start ").unwrap(), Anchor::END_START);
    assert_eq!(Anchor::parse("center 0.25").unwrap(), Anchor::new(0.5, 0.25));
    assert!(Anchor::parse("start").is_err());
    assert!(Anchor::parse("start end end").is_err());
    assert!(Anchor::parse("top bottom").is_err());
    assert!(Anchor::parse("start NaN").is_err());
}

#[test]
fn anchor_serde_uses_string_form() {
    let json = serde_json::to_string(&Anchor::START_END).unwrap();
    assert_eq!(json, r#""start end""#);
    let a: Anchor = serde_json::from_str(r#""center 0.3""#).unwrap();
    assert_eq!(a, Anchor::new(0.5, 0.3));
    assert!(serde_json::from_str::<Anchor>(r#""left""#).is_err());
}

#[test]
fn default_sampler_spans_enter_to_leave() {
    let s = ScrollProgressSampler::default();
    // start: 1000 - 800 = 200, end: 1400 - 0 = 1400
    assert_eq!(s.sample(region(), &viewport(200.0)), 0.0);
    assert_eq!(s.sample(region(), &viewport(800.0)), 0.5);
    assert_eq!(s.sample(region(), &viewport(1400.0)), 1.0);
}

#[test]
fn output_is_not_clamped() {
    let s = ScrollProgressSampler::default();
    assert!(s.sample(region(), &viewport(0.0)) < 0.0);
    assert!(s.sample(region(), &viewport(2600.0)) > 1.0);
}

#[test]
fn missing_region_samples_zero() {
    let s = ScrollProgressSampler::default();
    assert_eq!(s.sample(None, &viewport(800.0)), 0.0);
    let bad = Some(Rect::new(0.0, f64::INFINITY, 10.0, f64::INFINITY));
    assert_eq!(s.sample(bad, &viewport(800.0)), 0.0);
}

#[test]
fn zero_length_range_samples_zero() {
    let s = ScrollProgressSampler::new(Anchor::START_START, Anchor::START_START);
    assert_eq!(s.sample(region(), &viewport(1000.0)), 0.0);
    assert_eq!(s.sample(region(), &viewport(5.0)), 0.0);
}

#[test]
fn free_function_matches_sampler() {
    let a = sample_progress(region(), &viewport(500.0), Anchor::START_END, Anchor::END_END);
    let b = ScrollProgressSampler::new(Anchor::START_END, Anchor::END_END)
        .sample(region(), &viewport(500.0));
    assert_eq!(a, b);
}

#[test]
fn page_progress_clamps_and_handles_short_documents() {
    let snap = |scroll_y: f64, doc: f64| ScrollSnapshot::new(viewport(scroll_y), doc);
    assert_eq!(page_progress(&snap(0.0, 4800.0)), 0.0);
    assert_eq!(page_progress(&snap(2000.0, 4800.0)), 0.5);
    assert_eq!(page_progress(&snap(4000.0, 4800.0)), 1.0);
    assert_eq!(page_progress(&snap(9000.0, 4800.0)), 1.0);
    assert_eq!(page_progress(&snap(0.0, 800.0)), 0.0);
}
