//! View state of the issue board.
//!
//! The issue list held here is a snapshot. It is only ever replaced
//! wholesale by a successful store read, never patched locally.

use crate::issue::domain::{
    Issue, IssueDomainError, IssueDraft, IssueFilter, IssueId, IssuePriority, IssueStatus,
    Selection, StatusTransition,
};
use crate::session::domain::Principal;
use std::fmt;

/// Creation form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueForm {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Priority selector.
    pub priority: IssuePriority,
    /// Status selector.
    pub status: IssueStatus,
    /// Assignee input; empty means unassigned.
    pub assigned_to: String,
}

impl IssueForm {
    /// Validates the fields into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError`] when the title or description is blank.
    pub fn to_draft(&self) -> Result<IssueDraft, IssueDomainError> {
        Ok(IssueDraft::new(self.title.as_str(), self.description.as_str())?
            .with_priority(self.priority)
            .with_status(self.status)
            .with_assignee(self.assigned_to.as_str()))
    }
}

/// A possible duplicate found on submission.
///
/// The draft is held only until the user answers. Declining drops it while
/// the similar issue stays on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateWarning {
    similar: Issue,
    draft: Option<IssueDraft>,
}

impl DuplicateWarning {
    pub(crate) const fn new(similar: Issue, draft: IssueDraft) -> Self {
        Self {
            similar,
            draft: Some(draft),
        }
    }

    /// Returns the existing issue that triggered the warning.
    #[must_use]
    pub const fn similar(&self) -> &Issue {
        &self.similar
    }

    /// Returns the draft awaiting confirmation, if still undecided.
    #[must_use]
    pub const fn draft(&self) -> Option<&IssueDraft> {
        self.draft.as_ref()
    }

    /// Returns whether a decision is still outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.draft.is_some()
    }

    pub(crate) fn take_draft(&mut self) -> Option<IssueDraft> {
        self.draft.take()
    }

    /// Confirmation question put to the user.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Similar issue found: \"{}\". Create anyway?",
            self.similar.title()
        )
    }
}

impl fmt::Display for DuplicateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Similar issue exists: {}", self.similar.title())
    }
}

/// User-visible result of a status change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardNotice {
    /// The workflow guard refused the change.
    TransitionRejected {
        /// Issue the change was requested for.
        issue_id: IssueId,
        /// Current status.
        from: IssueStatus,
        /// Requested status.
        to: IssueStatus,
    },
    /// The guard accepted the change. Nothing was persisted.
    TransitionAcknowledged(StatusTransition),
}

impl fmt::Display for BoardNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransitionRejected { from, to, .. } => write!(
                f,
                "Cannot move directly from {from} to {to}. Please set to In Progress first."
            ),
            Self::TransitionAcknowledged(_) => f.write_str("Status update would happen here"),
        }
    }
}

/// Complete view state of the issue board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) principal: Option<Principal>,
    pub(crate) issues: Vec<Issue>,
    pub(crate) form: IssueForm,
    pub(crate) form_visible: bool,
    pub(crate) filter: IssueFilter,
    pub(crate) duplicate: Option<DuplicateWarning>,
    pub(crate) notice: Option<BoardNotice>,
    pub(crate) last_error: Option<String>,
}

impl BoardState {
    /// Returns the signed-in principal, if any.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Returns the cached issue list, newest first.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns the cached issues that pass the current filters.
    #[must_use]
    pub fn filtered_issues(&self) -> Vec<&Issue> {
        self.filter.apply(&self.issues)
    }

    /// Returns the creation form.
    #[must_use]
    pub const fn form(&self) -> &IssueForm {
        &self.form
    }

    /// Returns the creation form for editing.
    pub const fn form_mut(&mut self) -> &mut IssueForm {
        &mut self.form
    }

    /// Returns whether the creation form is shown.
    #[must_use]
    pub const fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    /// Shows or hides the creation form. Field values are kept.
    pub const fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// Returns the active filters.
    #[must_use]
    pub const fn filter(&self) -> IssueFilter {
        self.filter
    }

    /// Replaces the status filter.
    pub const fn set_status_filter(&mut self, status: Selection<IssueStatus>) {
        self.filter.set_status(status);
    }

    /// Replaces the priority filter.
    pub const fn set_priority_filter(&mut self, priority: Selection<IssuePriority>) {
        self.filter.set_priority(priority);
    }

    /// Returns the outstanding duplicate warning, if any.
    #[must_use]
    pub const fn duplicate_warning(&self) -> Option<&DuplicateWarning> {
        self.duplicate.as_ref()
    }

    /// Returns the last status-change notice, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&BoardNotice> {
        self.notice.as_ref()
    }

    /// Returns the last failure message, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn replace_issues(&mut self, issues: Vec<Issue>) {
        self.issues = issues;
        self.last_error = None;
    }

    pub(crate) fn pending_draft(&mut self) -> Option<IssueDraft> {
        self.duplicate.as_mut().and_then(DuplicateWarning::take_draft)
    }

    pub(crate) fn reset_after_create(&mut self) {
        self.form = IssueForm::default();
        self.form_visible = false;
        self.duplicate = None;
    }
}
