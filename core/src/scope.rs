//! # Scope Diagnostics
//!
//! The matcher reports which value of the favorite band it sees from two
//! places: the method body and the filter predicate. Both reports go through
//! [`ScopeLog`] so callers can choose where they land.

use std::cell::RefCell;

use tracing::debug;

pub const SCOPE_TARGET: &str = "bandmatch::scope";

/// Sink for the two diagnostic lines the matcher emits.
pub trait ScopeLog {
    /// Called once per match call, before filtering starts.
    fn user_scope(&self, favorite_band: &str);
    /// Called once per element examined by the filter predicate.
    fn callback_scope(&self, favorite_band: &str);
}

impl<L: ScopeLog + ?Sized> ScopeLog for &L {
    fn user_scope(&self, favorite_band: &str) {
        (**self).user_scope(favorite_band)
    }

    fn callback_scope(&self, favorite_band: &str) {
        (**self).callback_scope(favorite_band)
    }
}

/// Emits scope lines as `debug` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingScopeLog;

impl ScopeLog for TracingScopeLog {
    fn user_scope(&self, favorite_band: &str) {
        debug!(target: SCOPE_TARGET, "in User scope: {favorite_band}");
    }

    fn callback_scope(&self, favorite_band: &str) {
        debug!(target: SCOPE_TARGET, "in the anonymous function scope: {favorite_band}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeEvent {
    UserScope(String),
    CallbackScope(String),
}

impl ScopeEvent {
    pub fn favorite_band(&self) -> &str {
        match self {
            ScopeEvent::UserScope(band) | ScopeEvent::CallbackScope(band) => band,
        }
    }

    /// The line as it would appear on the console.
    pub fn message(&self) -> String {
        match self {
            ScopeEvent::UserScope(band) => format!("in User scope: {band}"),
            ScopeEvent::CallbackScope(band) => {
                format!("in the anonymous function scope: {band}")
            }
        }
    }
}

/// Keeps every scope line in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingScopeLog {
    events: RefCell<Vec<ScopeEvent>>,
}

impl RecordingScopeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScopeEvent> {
        self.events.borrow().clone()
    }

    pub fn callback_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ScopeEvent::CallbackScope(_)))
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl ScopeLog for RecordingScopeLog {
    fn user_scope(&self, favorite_band: &str) {
        self.events
            .borrow_mut()
            .push(ScopeEvent::UserScope(favorite_band.to_string()));
    }

    fn callback_scope(&self, favorite_band: &str) {
        self.events
            .borrow_mut()
            .push(ScopeEvent::CallbackScope(favorite_band.to_string()));
    }
}
