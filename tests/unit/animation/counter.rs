use super::*;

#[test]
fn reaches_target_exactly_at_end() {
    let c = AnimatedCounter::new(150);
    assert_eq!(c.value_at(0.0), 0);
    assert_eq!(c.value_at(2.0), 150);
    assert_eq!(c.value_at(60.0), 150);
}

#[test]
fn follows_out_cubic_floor() {
    let c = AnimatedCounter::new(150);
    // t = 0.5 -> 1 - 0.125 = 0.875 -> 131.25
    assert_eq!(c.value_at(1.0), 131);
}

#[test]
fn holds_zero_during_delay() {
    let c = AnimatedCounter::new(40).with_delay(0.5);
    assert_eq!(c.value_at(0.49), 0);
    assert!(c.value_at(1.0) > 0);
    assert_eq!(c.value_at(2.5), 40);
}

#[test]
fn zero_duration_shows_target_immediately() {
    let c = AnimatedCounter::new(7).with_duration(0.0);
    assert_eq!(c.value_at(0.0), 7);
}

#[test]
fn display_appends_suffix() {
    let c = AnimatedCounter::new(50).with_suffix("+");
    assert_eq!(c.display_at(10.0), "50+");
    assert_eq!(c.display_at(f64::NAN), "0+");
}

#[test]
fn deserializes_with_defaults() {
    let c: AnimatedCounter = serde_json::from_str(r#"{"target":15,"suffix":"+"}"#).unwrap();
    assert_eq!(c.duration, AnimatedCounter::DEFAULT_DURATION);
    assert_eq!(c.delay, 0.0);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_decreases(target in 0u64..100_000, a in 0.0f64..3.0, b in 0.0f64..3.0) {
            let c = AnimatedCounter::new(target);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(c.value_at(lo) <= c.value_at(hi));
            prop_assert!(c.value_at(hi) <= target);
        }
    }
}
