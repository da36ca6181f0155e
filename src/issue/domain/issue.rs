//! Issue aggregate and the values used to create it.

use super::{IssueDomainError, IssueId, IssuePriority, IssueStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated user input for a new issue, before a creator is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    title: String,
    description: String,
    priority: IssuePriority,
    status: IssueStatus,
    assigned_to: Option<String>,
}

impl IssueDraft {
    /// Creates a draft with the required title and description.
    ///
    /// Priority defaults to [`IssuePriority::Low`] and status to
    /// [`IssueStatus::Open`].
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyTitle`] or
    /// [`IssueDomainError::EmptyDescription`] when either value is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, IssueDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(IssueDomainError::EmptyTitle);
        }

        let raw_description = description.into();
        let normalized_description = raw_description.trim();
        if normalized_description.is_empty() {
            return Err(IssueDomainError::EmptyDescription);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: normalized_description.to_owned(),
            priority: IssuePriority::default(),
            status: IssueStatus::default(),
            assigned_to: None,
        })
    }

    /// Sets the issue priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: IssuePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial issue status.
    #[must_use]
    pub const fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the assignee. Blank input leaves the issue unassigned.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        let value = assignee.into();
        let normalized = value.trim();
        self.assigned_to = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issue description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the issue priority.
    #[must_use]
    pub const fn priority(&self) -> IssuePriority {
        self.priority
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> IssueStatus {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }
}

/// Insert payload handed to the issue store.
///
/// The store assigns the identifier and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    draft: IssueDraft,
    created_by: String,
}

impl NewIssue {
    /// Attaches the creator's email to a validated draft.
    #[must_use]
    pub fn new(draft: IssueDraft, created_by: impl Into<String>) -> Self {
        Self {
            draft,
            created_by: created_by.into(),
        }
    }

    /// Returns the validated draft.
    #[must_use]
    pub const fn draft(&self) -> &IssueDraft {
        &self.draft
    }

    /// Returns the creator's email.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }
}

/// Issue record as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    title: String,
    description: String,
    priority: IssuePriority,
    status: IssueStatus,
    assigned_to: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
}

/// Parameter object for reconstructing a stored issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedIssueData {
    /// Store-assigned identifier.
    pub id: IssueId,
    /// Issue title.
    pub title: String,
    /// Issue description.
    pub description: String,
    /// Issue priority.
    pub priority: IssuePriority,
    /// Issue status.
    pub status: IssueStatus,
    /// Optional assignee.
    pub assigned_to: Option<String>,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Creator email.
    pub created_by: String,
}

/// Outcome of a status change accepted by the workflow guard.
///
/// Accepted changes are acknowledged only; nothing is written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    /// Issue the change was requested for.
    pub issue_id: IssueId,
    /// Status before the change.
    pub from: IssueStatus,
    /// Requested status.
    pub to: IssueStatus,
}

impl Issue {
    /// Builds the stored form of a new issue once the store has assigned an
    /// identifier and timestamp.
    #[must_use]
    pub fn from_insert(issue: &NewIssue, id: IssueId, created_at: DateTime<Utc>) -> Self {
        let draft = issue.draft();
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            priority: draft.priority,
            status: draft.status,
            assigned_to: draft.assigned_to.clone(),
            created_at,
            created_by: issue.created_by.clone(),
        }
    }

    /// Reconstructs an issue from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedIssueData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            created_by: data.created_by,
        }
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issue description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the issue priority.
    #[must_use]
    pub const fn priority(&self) -> IssuePriority {
        self.priority
    }

    /// Returns the issue status.
    #[must_use]
    pub const fn status(&self) -> IssueStatus {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the store-assigned creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the creator email.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Checks a requested status change against the workflow guard.
    ///
    /// The issue itself is left unchanged either way.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidStatusTransition`] for a direct
    /// `Open` to `Done` change.
    pub fn check_transition(
        &self,
        target: IssueStatus,
    ) -> Result<StatusTransition, IssueDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(IssueDomainError::InvalidStatusTransition {
                issue_id: self.id,
                from: self.status,
                to: target,
            });
        }
        Ok(StatusTransition {
            issue_id: self.id,
            from: self.status,
            to: target,
        })
    }
}
