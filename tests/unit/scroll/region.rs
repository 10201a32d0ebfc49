use super::*;

#[test]
fn measure_returns_settled_rects() {
    let layout = RegionLayout::new().with("about", Rect::new(0.0, 900.0, 1280.0, 1700.0));
    assert_eq!(
        layout.measure(&RegionId::new("about")),
        Some(Rect::new(0.0, 900.0, 1280.0, 1700.0))
    );
    assert_eq!(layout.measure(&RegionId::new("missing")), None);
}

#[test]
fn measure_filters_unsettled_rects() {
    let mut layout = RegionLayout::new();
    layout.insert("nan", Rect::new(0.0, f64::NAN, 10.0, 10.0));
    layout.insert("inverted", Rect::new(0.0, 50.0, 10.0, 10.0));
    assert_eq!(layout.measure(&RegionId::new("nan")), None);
    assert_eq!(layout.measure(&RegionId::new("inverted")), None);
    assert_eq!(layout.len(), 2);
}

#[test]
fn layout_deserializes_from_id_map() {
    let layout: RegionLayout = serde_json::from_str(
        r#"{"hero":{"x0":0.0,"y0":0.0,"x1":1280.0,"y1":800.0}}"#,
    )
    .unwrap();
    assert_eq!(
        layout.measure(&RegionId::from("hero")),
        Some(Rect::new(0.0, 0.0, 1280.0, 800.0))
    );
}
