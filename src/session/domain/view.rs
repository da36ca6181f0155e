//! Named views the navigator can redirect to.

use std::fmt;

/// Application views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Credential entry.
    Login,
    /// Issue board.
    Board,
}

impl View {
    /// Route path of the view.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Board => "/dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
