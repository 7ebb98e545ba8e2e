use super::*;

fn hit(key: usize) -> Intersection {
    Intersection { key, is_intersecting: true }
}

fn miss(key: usize) -> Intersection {
    Intersection { key, is_intersecting: false }
}

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn track_reports_new_keys() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.track(0));
    assert!(!tracker.track(0));
    assert_eq!(tracker.pending_count(), 1);
}

#[test]
fn intersecting_entry_fires_once() {
    let mut tracker = RevealTracker::new();
    tracker.track(3);
    assert_eq!(tracker.on_intersections([hit(3)]), vec![3]);
    assert_eq!(tracker.on_intersections([hit(3)]), Vec::<usize>::new());
    assert!(!tracker.is_pending(3));
}

#[test]
fn non_intersecting_entry_stays_pending() {
    let mut tracker = RevealTracker::new();
    tracker.track(1);
    assert!(tracker.on_intersections([miss(1)]).is_empty());
    assert!(tracker.is_pending(1));
}

#[test]
fn untracked_keys_never_fire() {
    let mut tracker = RevealTracker::new();
    tracker.track(0);
    assert!(tracker.on_intersections([hit(7)]).is_empty());
}

#[test]
fn mixed_batch_preserves_report_order() {
    let mut tracker = RevealTracker::new();
    for key in 0..4 {
        tracker.track(key);
    }
    let fired = tracker.on_intersections([hit(2), miss(0), hit(1), hit(2)]);
    assert_eq!(fired, vec![2, 1]);
    assert_eq!(tracker.pending_count(), 2);
}

#[test]
fn parse_key_reads_back_indices() {
    assert_eq!(parse_key("0"), Some(0));
    assert_eq!(parse_key(" 12 "), Some(12));
    assert_eq!(parse_key("-1"), None);
    assert_eq!(parse_key("card"), None);
}

// =============================================================
// stagger_delay
// =============================================================

#[test]
fn first_card_has_no_delay() {
    assert_eq!(stagger_delay(0, 0.1), "0s");
}

#[test]
fn project_card_delays() {
    let delays = (0..4).map(|i| stagger_delay(i, 0.1)).collect::<Vec<_>>();
    assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s"]);
}

#[test]
fn skill_card_delays() {
    assert_eq!(stagger_delay(1, 0.05), "0.05s");
    assert_eq!(stagger_delay(3, 0.05), "0.15s");
    assert_eq!(stagger_delay(20, 0.05), "1s");
    assert_eq!(stagger_delay(25, 0.05), "1.25s");
}
