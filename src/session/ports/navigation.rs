//! Port for redirecting between views.

use crate::session::domain::View;

/// Navigation contract.
pub trait Navigator: Send + Sync {
    /// Redirects to the named view.
    fn redirect(&self, view: View);
}
