#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{TimerKind, TransitionId};

fn timer() -> TransitionTimer {
    TransitionTimer { id: TransitionId(7), kind: TimerKind::Primary }
}

#[test]
fn default_scheduler_is_unbound() {
    assert!(!BrowserTimers::default().is_bound());
}

#[test]
fn schedule_off_browser_returns_no_handle() {
    let mut timers = BrowserTimers::default();
    assert_eq!(timers.schedule(timer(), Duration::from_millis(400)), None);
    timers.cancel(None);
    timers.cancel(Some(3));
}

#[test]
fn bind_marks_scheduler_bound() {
    let owner = Owner::new();
    owner.with(|| {
        let mut timers = BrowserTimers::default();
        timers.bind(Callback::new(|_: TransitionTimer| {}));
        assert!(timers.is_bound());
        assert_eq!(timers.schedule(timer(), Duration::from_millis(1000)), None);
    });
}

#[test]
fn cancelled_timeouts_are_released() {
    let mut table = TimeoutTable::default();
    let first = table.next_key();
    table.insert(first, "primary");
    let second = table.next_key();
    table.insert(second, "failsafe");
    assert_ne!(first, second);

    assert_eq!(table.cancel(second), Some("failsafe"));
    assert_eq!(table.cancel(second), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn fired_timeouts_are_released_on_sweep() {
    let mut table = TimeoutTable::default();
    for _ in 0..3 {
        let key = table.next_key();
        table.insert(key, ());
        table.mark_fired(key);
    }
    assert_eq!(table.len(), 3);

    table.sweep();
    assert!(table.is_empty());
}

#[test]
fn repeated_toggles_do_not_accumulate_entries() {
    let mut table = TimeoutTable::default();
    for _ in 0..100 {
        table.sweep();
        let primary = table.next_key();
        table.insert(primary, ());
        let failsafe = table.next_key();
        table.insert(failsafe, ());

        // Primary fires, then the coordinator cancels the failsafe.
        table.mark_fired(primary);
        table.sweep();
        table.cancel(failsafe);
    }
    assert!(table.is_empty());
}
