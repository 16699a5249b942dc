use std::time::{Duration, Instant};

use fadelist::{AnimatedView, Easing, ListAnimator, SlotFrame, TransitionConfig};

fn linear(ms: u64) -> TransitionConfig {
    TransitionConfig::new(Duration::from_millis(ms), Easing::Linear)
}

fn seeded(count: usize) -> ListAnimator<&'static str> {
    let mut animator = ListAnimator::new();
    animator.initial_item_count(count);
    animator
}

/// Compact description of frames: live slots by index, removed ones by visual.
fn layout(frames: &[SlotFrame<&'static str>]) -> Vec<String> {
    frames
        .iter()
        .map(|frame| match frame {
            SlotFrame::Live { index, .. } => index.to_string(),
            SlotFrame::Removed { visual, .. } => format!("-{visual}"),
        })
        .collect()
}

// =============================================================================
// Slot bookkeeping
// =============================================================================

#[test]
fn test_initial_items_are_steady() {
    let animator = seeded(3);
    assert_eq!(animator.len(), 3);
    assert_eq!(animator.logical_len(), 3);
    assert!(!animator.has_active_transitions());

    let frames = animator.frames(Instant::now());
    assert_eq!(layout(&frames), vec!["0", "1", "2"]);
    assert!(frames
        .iter()
        .all(|frame| matches!(frame, SlotFrame::Live { visibility, .. } if *visibility == 1.0)));
}

#[test]
fn test_removed_slot_keeps_its_place() {
    let mut animator = seeded(3);
    animator.remove_item(1, linear(200), Box::new(|| "b"));

    assert_eq!(animator.len(), 3);
    assert_eq!(animator.logical_len(), 2);
    assert!(animator.has_active_transitions());
    assert_eq!(layout(&animator.frames(Instant::now())), vec!["0", "-b", "1"]);
}

#[test]
fn test_logical_indices_skip_exiting_slots() {
    let mut animator = seeded(3);
    animator.remove_item(0, linear(200), Box::new(|| "a"));
    // Logical 0 is now the second slot on screen.
    animator.remove_item(0, linear(200), Box::new(|| "b"));

    assert_eq!(animator.logical_len(), 1);
    assert_eq!(layout(&animator.frames(Instant::now())), vec!["-a", "-b", "0"]);
}

#[test]
fn test_insert_goes_before_current_holder_of_index() {
    let mut animator = seeded(3);
    animator.remove_item(1, linear(200), Box::new(|| "b"));
    animator.insert_item(1, linear(200));

    assert_eq!(
        layout(&animator.frames(Instant::now())),
        vec!["0", "-b", "1", "2"]
    );
}

#[test]
fn test_insert_at_end_appends() {
    let mut animator = seeded(1);
    animator.insert_item(1, linear(200));
    assert_eq!(layout(&animator.frames(Instant::now())), vec!["0", "1"]);
}

#[test]
fn test_remove_unknown_index_is_ignored() {
    let mut animator = seeded(2);
    animator.remove_item(5, linear(200), Box::new(|| "x"));
    assert_eq!(animator.len(), 2);
    assert!(!animator.has_active_transitions());
}

// =============================================================================
// Progress and pruning
// =============================================================================

#[test]
fn test_visibility_runs_towards_target() {
    let mut animator = seeded(1);
    animator.insert_item(1, linear(200));
    animator.remove_item(0, linear(200), Box::new(|| "gone"));

    let later = Instant::now() + Duration::from_secs(1);
    let frames = animator.frames(later);
    match &frames[..] {
        [SlotFrame::Removed { visibility: out, .. }, SlotFrame::Live { visibility: into, .. }] => {
            assert_eq!(*out, 0.0);
            assert_eq!(*into, 1.0);
        }
        other => panic!("unexpected frames: {:?}", other),
    }
}

#[test]
fn test_advance_prunes_exits_and_settles_entries() {
    let mut animator = seeded(2);
    animator.remove_item(0, linear(10_000), Box::new(|| "a"));
    animator.insert_item(1, linear(10_000));

    // Too early: nothing changes.
    animator.advance(Instant::now());
    assert_eq!(animator.len(), 3);

    animator.advance(Instant::now() + Duration::from_secs(60));
    assert_eq!(animator.len(), 2);
    assert_eq!(animator.logical_len(), 2);
    assert!(!animator.has_active_transitions());
}

#[test]
fn test_reduced_motion_applies_immediately() {
    let mut animator = seeded(3);
    animator.set_reduced_motion(true);
    assert!(animator.reduced_motion());

    animator.remove_item(0, linear(200), Box::new(|| "a"));
    animator.insert_item(2, linear(200));

    assert_eq!(animator.len(), 3);
    assert!(!animator.has_active_transitions());
    assert_eq!(layout(&animator.frames(Instant::now())), vec!["0", "1", "2"]);
}
