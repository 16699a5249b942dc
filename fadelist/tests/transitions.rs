use std::time::{Duration, Instant};

use fadelist::{Easing, TransitionConfig};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in_out_midpoint() {
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_clamps_out_of_range_progress() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(-0.5), 0.0, "{:?} below 0", easing);
        assert_eq!(easing.apply(1.5), 1.0, "{:?} above 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// TransitionConfig Tests
// =============================================================================

#[test]
fn test_default_transition_is_200ms() {
    let config = TransitionConfig::default();
    assert_eq!(config.duration, Duration::from_millis(200));
    assert_eq!(config.easing, Easing::EaseInOut);
}

#[test]
fn test_with_duration_keeps_easing() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::EaseOut)
        .with_duration(Duration::from_millis(400));
    assert_eq!(config.duration, Duration::from_millis(400));
    assert_eq!(config.easing, Easing::EaseOut);
}

#[test]
fn test_progress_linear() {
    let config = TransitionConfig::new(Duration::from_millis(200), Easing::Linear);
    let start = Instant::now();

    assert_eq!(config.progress(start, start), 0.0);
    let half = config.progress(start, start + Duration::from_millis(100));
    assert!((half - 0.5).abs() < 0.0001);
    assert_eq!(config.progress(start, start + Duration::from_secs(5)), 1.0);
}

#[test]
fn test_progress_before_start_is_zero() {
    let config = TransitionConfig::new(Duration::from_millis(200), Easing::Linear);
    let now = Instant::now();
    let start = now + Duration::from_millis(50);
    assert_eq!(config.progress(start, now), 0.0);
}

#[test]
fn test_zero_duration_is_complete() {
    let config = TransitionConfig::new(Duration::ZERO, Easing::EaseIn);
    let start = Instant::now();
    assert_eq!(config.progress(start, start), 1.0);
    assert!(config.is_finished(start, start));
}

#[test]
fn test_is_finished() {
    let config = TransitionConfig::default();
    let start = Instant::now();
    assert!(!config.is_finished(start, start + Duration::from_millis(199)));
    assert!(config.is_finished(start, start + Duration::from_millis(200)));
}
