//! `setTimeout`-backed scheduler for theme transition timers.
//!
//! Each scheduled timer hands its `TransitionTimer` to the bound callback.
//! The gloo `Timeout`s themselves are not `Send`, so they live in a
//! thread-local `TimeoutTable` and the scheduler only holds integer keys,
//! which keeps it `Send + Sync` for storage in a reactive signal.
//!
//! Cancelling a key drops its `Timeout` (clearing the JS timer and freeing
//! the closure). A fired timeout cannot drop itself from inside its own
//! callback, so it is only marked fired and released on the next
//! `schedule` or `cancel`.

use std::collections::HashMap;
use std::time::Duration;

use leptos::prelude::*;

use crate::state::theme::{TransitionScheduler, TransitionTimer};

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

/// Owned pending timeouts keyed by a monotonically increasing id.
#[derive(Debug)]
pub struct TimeoutTable<T> {
    next_key: u32,
    pending: HashMap<u32, T>,
    fired: Vec<u32>,
}

impl<T> Default for TimeoutTable<T> {
    fn default() -> Self {
        Self { next_key: 0, pending: HashMap::new(), fired: Vec::new() }
    }
}

impl<T> TimeoutTable<T> {
    /// Reserve the key the next inserted entry will get.
    pub fn next_key(&mut self) -> u32 {
        self.next_key = self.next_key.wrapping_add(1);
        self.next_key
    }

    pub fn insert(&mut self, key: u32, entry: T) {
        self.pending.insert(key, entry);
    }

    /// Record that `key` ran; it is released by the next [`Self::sweep`].
    pub fn mark_fired(&mut self, key: u32) {
        self.fired.push(key);
    }

    /// Remove and return `key`'s entry, if still pending.
    pub fn cancel(&mut self, key: u32) -> Option<T> {
        self.pending.remove(&key)
    }

    /// Release every entry marked fired.
    pub fn sweep(&mut self) {
        for key in self.fired.drain(..) {
            self.pending.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static TIMEOUTS: std::cell::RefCell<TimeoutTable<gloo_timers::callback::Timeout>> =
        std::cell::RefCell::new(TimeoutTable::default());
}

/// Browser timer scheduler. Unbound or off-browser, scheduling is a no-op.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimers {
    sink: Option<Callback<TransitionTimer>>,
}

impl BrowserTimers {
    /// Route fired timers to `sink`.
    pub fn bind(&mut self, sink: Callback<TransitionTimer>) {
        self.sink = Some(sink);
    }

    pub fn is_bound(&self) -> bool {
        self.sink.is_some()
    }
}

impl TransitionScheduler for BrowserTimers {
    type Handle = Option<u32>;

    fn schedule(&mut self, timer: TransitionTimer, delay: Duration) -> Self::Handle {
        #[cfg(feature = "hydrate")]
        {
            let sink = self.sink?;
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            TIMEOUTS.with(|table| {
                let mut table = table.borrow_mut();
                table.sweep();
                let key = table.next_key();
                let timeout = gloo_timers::callback::Timeout::new(millis, move || {
                    sink.run(timer);
                    TIMEOUTS.with(|table| table.borrow_mut().mark_fired(key));
                });
                table.insert(key, timeout);
                Some(key)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (timer, delay);
            None
        }
    }

    fn cancel(&mut self, handle: Self::Handle) {
        #[cfg(feature = "hydrate")]
        {
            let Some(key) = handle else {
                return;
            };
            let cancelled = TIMEOUTS.with(|table| {
                let mut table = table.borrow_mut();
                table.sweep();
                table.cancel(key)
            });
            // Dropping a gloo Timeout clears the JS timer.
            drop(cancelled);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handle;
        }
    }
}
