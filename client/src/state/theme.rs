//! Theme coordination: resolved light/dark value, persisted preference, and
//! the short-lived "transitioning" flag behind the theme-switch overlay.
//!
//! DESIGN
//! ======
//! `ThemeCoordinator` is a plain state machine with two injected seams:
//! a `PreferenceStore` for the single persisted key and a
//! `TransitionScheduler` for the primary + failsafe timers. Browser
//! implementations live in `util::theme_dom` and `util::timers`; tests drive
//! the machine with in-memory fakes and a virtual clock.
//!
//! STATE MACHINE
//! =============
//! `Idle --toggle--> Transitioning(id)` flips, persists, and schedules both
//! timers keyed to `id`. A matching timer moves back to `Idle`; a second
//! `toggle` while transitioning cancels instead of flipping. Every exit from
//! `Transitioning` cancels whatever timers are still pending.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Local-storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Delay before the primary timer clears the transitioning flag.
pub const PRIMARY_DELAY: Duration = Duration::from_millis(400);

/// Delay before the failsafe timer force-clears the transitioning flag.
/// Always longer than [`PRIMARY_DELAY`].
pub const FAILSAFE_DELAY: Duration = Duration::from_millis(1000);

// =============================================================================
// PREFERENCE / RESOLVED THEME
// =============================================================================

/// The user's stored theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preference {
    Light,
    Dark,
    /// Follow the system color-scheme signal.
    #[default]
    System,
}

impl Preference {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Concretize against the current system signal.
    pub fn resolve(self, system_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::from_system(system_dark),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(StoreError::Invalid(other.to_owned())),
        }
    }
}

impl From<ResolvedTheme> for Preference {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

/// The concrete theme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn from_system(system_dark: bool) -> Self {
        if system_dark { Self::Dark } else { Self::Light }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class name placed on the root element.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Failure reading or writing the persisted preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage mechanism is reachable (private mode, SSR, sandboxed frame).
    #[error("preference storage unavailable")]
    Unavailable,

    /// Storage exists but refused the write (quota, security policy).
    #[error("preference storage rejected write: {0}")]
    Rejected(String),

    /// A stored value is not one of `light`, `dark`, `system`.
    #[error("unrecognized stored preference: {0:?}")]
    Invalid(String),
}

/// Persistence for the single preference slot.
pub trait PreferenceStore {
    /// Read the stored preference. `Ok(None)` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage is unreachable or holds a value
    /// that does not parse.
    fn load(&self) -> Result<Option<Preference>, StoreError>;

    /// Write the preference.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage is unreachable or rejects the write.
    fn save(&mut self, preference: Preference) -> Result<(), StoreError>;
}

/// Identifies one toggle. Both of its timers carry the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Primary,
    Failsafe,
}

/// Payload delivered back to [`ThemeCoordinator::timer_fired`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionTimer {
    pub id: TransitionId,
    pub kind: TimerKind,
}

/// Deferred-callback scheduler for transition timers.
///
/// Implementations arrange for `timer` to be handed back to the coordinator
/// after `delay`, unless `cancel` is called with the returned handle first.
pub trait TransitionScheduler {
    type Handle;

    fn schedule(&mut self, timer: TransitionTimer, delay: Duration) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

// =============================================================================
// COORDINATOR
// =============================================================================

/// Snapshot of the observable theme state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: Preference,
    pub resolved: ResolvedTheme,
    pub transitioning: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning(TransitionId),
}

/// Result of a [`ThemeCoordinator::toggle`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The theme flipped and a new transition started.
    Switched { id: TransitionId, resolved: ResolvedTheme },
    /// A transition was in progress; it was reset without flipping.
    Cancelled,
}

struct PendingTimers<H> {
    primary: H,
    failsafe: H,
}

/// Owns the theme state and coordinates persistence and transition timers.
pub struct ThemeCoordinator<S, T: TransitionScheduler> {
    store: S,
    scheduler: T,
    preference: Preference,
    resolved: ResolvedTheme,
    phase: Phase,
    pending: Option<PendingTimers<T::Handle>>,
    last_id: u64,
    initialized: bool,
    session_only: bool,
}

impl<S: PreferenceStore, T: TransitionScheduler> ThemeCoordinator<S, T> {
    pub fn new(store: S, scheduler: T) -> Self {
        Self {
            store,
            scheduler,
            preference: Preference::System,
            resolved: ResolvedTheme::default(),
            phase: Phase::Idle,
            pending: None,
            last_id: 0,
            initialized: false,
            session_only: false,
        }
    }

    /// Load the persisted preference and resolve it against `system_dark`.
    ///
    /// Idempotent: after the first call it returns the current resolved theme
    /// without touching storage again.
    pub fn initialize(&mut self, system_dark: bool) -> ResolvedTheme {
        if self.initialized {
            return self.resolved;
        }
        self.preference = match self.store.load() {
            Ok(Some(preference)) => preference,
            Ok(None) => Preference::System,
            Err(StoreError::Invalid(raw)) => {
                leptos::logging::warn!("ignoring stored theme preference {raw:?}");
                Preference::System
            }
            Err(e) => {
                leptos::logging::warn!("theme preference not persisted this session: {e}");
                self.session_only = true;
                Preference::System
            }
        };
        self.resolved = self.preference.resolve(system_dark);
        self.initialized = true;
        self.resolved
    }

    /// Flip the resolved theme, or reset a transition already in progress.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if let Phase::Transitioning(_) = self.phase {
            self.finish_transition(None);
            return ToggleOutcome::Cancelled;
        }

        let next = self.resolved.flipped();
        self.resolved = next;
        self.preference = Preference::from(next);
        self.persist();

        self.last_id += 1;
        let id = TransitionId(self.last_id);
        self.phase = Phase::Transitioning(id);
        let primary = self
            .scheduler
            .schedule(TransitionTimer { id, kind: TimerKind::Primary }, PRIMARY_DELAY);
        let failsafe = self
            .scheduler
            .schedule(TransitionTimer { id, kind: TimerKind::Failsafe }, FAILSAFE_DELAY);
        self.pending = Some(PendingTimers { primary, failsafe });

        ToggleOutcome::Switched { id, resolved: next }
    }

    /// Deliver a fired timer. Returns `true` if it ended the current transition.
    ///
    /// Timers from an earlier transition, or the second timer of a transition
    /// that already ended, are ignored.
    pub fn timer_fired(&mut self, timer: TransitionTimer) -> bool {
        match self.phase {
            Phase::Transitioning(id) if id == timer.id => {
                self.finish_transition(Some(timer.kind));
                true
            }
            _ => false,
        }
    }

    /// Record a system color-scheme change. Returns `true` if `resolved` changed.
    ///
    /// Only a `System` preference follows the signal.
    pub fn set_system_dark(&mut self, system_dark: bool) -> bool {
        if self.preference != Preference::System {
            return false;
        }
        let next = Preference::System.resolve(system_dark);
        let changed = next != self.resolved;
        self.resolved = next;
        changed
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            preference: self.preference,
            resolved: self.resolved,
            transitioning: self.is_transitioning(),
        }
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// `true` once storage has failed; later toggles stay in memory.
    pub fn is_session_only(&self) -> bool {
        self.session_only
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    fn persist(&mut self) {
        if self.session_only {
            return;
        }
        if let Err(e) = self.store.save(self.preference) {
            leptos::logging::warn!("theme preference kept in memory only: {e}");
            self.session_only = true;
        }
    }

    fn finish_transition(&mut self, fired: Option<TimerKind>) {
        self.phase = Phase::Idle;
        let Some(pending) = self.pending.take() else {
            return;
        };
        // The timer that just fired has nothing left to cancel.
        if fired != Some(TimerKind::Primary) {
            self.scheduler.cancel(pending.primary);
        }
        if fired != Some(TimerKind::Failsafe) {
            self.scheduler.cancel(pending.failsafe);
        }
    }
}
