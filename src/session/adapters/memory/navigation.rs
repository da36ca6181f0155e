//! Navigator that records redirects instead of performing them.

use std::sync::{Arc, Mutex, PoisonError};

use crate::session::{domain::View, ports::Navigator};

/// Thread-safe navigator recording every redirect in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<View>>>,
}

impl RecordingNavigator {
    /// Creates a navigator with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all redirects so far.
    #[must_use]
    pub fn history(&self) -> Vec<View> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent redirect target.
    #[must_use]
    pub fn current(&self) -> Option<View> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, view: View) {
        tracing::debug!(route = view.route(), "redirect");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(view);
    }
}
