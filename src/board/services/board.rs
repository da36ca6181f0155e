//! Issue board orchestration: loading, creation and status requests.

use crate::board::{
    error::{BoardError, BoardResult},
    state::{BoardNotice, BoardState, DuplicateWarning},
};
use crate::issue::{
    domain::{
        Issue, IssueDomainError, IssueDraft, IssueId, IssueStatus, NewIssue, find_similar_issue,
    },
    ports::IssueStore,
};
use crate::session::domain::Principal;
use std::sync::Arc;

/// Result of submitting the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The issue was stored and the list reloaded.
    Created(Issue),
    /// A similar issue exists; creation is paused until the user decides.
    DuplicateWarning(Issue),
    /// The user declined to create a possible duplicate.
    Declined,
}

/// The user's answer to a duplicate warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDecision {
    /// Create the issue regardless.
    CreateAnyway,
    /// Abandon the submission.
    Decline,
}

/// Issue board service holding the view state.
pub struct IssueBoard<S>
where
    S: IssueStore,
{
    store: Arc<S>,
    state: BoardState,
}

impl<S> IssueBoard<S>
where
    S: IssueStore,
{
    /// Creates a board with empty state.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: BoardState::default(),
        }
    }

    /// Returns the view state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the view state for form and filter edits.
    pub const fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    /// Records the signed-in principal, or clears it on sign-out.
    pub fn set_principal(&mut self, principal: Option<Principal>) {
        self.state.principal = principal;
    }

    /// Discards the whole view state when the session ends.
    ///
    /// The cached list, form, pending duplicate and notices go with the
    /// principal, so nothing carries over to the next user.
    pub fn clear_session(&mut self) {
        self.state = BoardState::default();
    }

    /// Replaces the cached list with every stored issue, newest first.
    ///
    /// On failure the previous list is kept and the error message is recorded
    /// for display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store read fails.
    pub async fn load_issues(&mut self) -> BoardResult<usize> {
        match self.store.list_newest_first().await {
            Ok(issues) => {
                let count = issues.len();
                self.state.replace_issues(issues);
                tracing::debug!(count, "issue list reloaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load issues");
                self.state.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Submits the creation form.
    ///
    /// The duplicate-title heuristic runs against the cached list first. A
    /// match pauses the submission and returns
    /// [`SubmitOutcome::DuplicateWarning`] without writing; the user answers
    /// through [`IssueBoard::resolve_duplicate`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSignedIn`] without a principal,
    /// [`BoardError::Domain`] for blank required fields, and
    /// [`BoardError::Store`] when the insert fails.
    pub async fn submit_form(&mut self) -> BoardResult<SubmitOutcome> {
        let principal = self
            .state
            .principal
            .clone()
            .ok_or(BoardError::NotSignedIn)?;
        let draft = self.state.form.to_draft()?;

        if let Some(similar) = find_similar_issue(&self.state.issues, draft.title()) {
            tracing::info!(
                title = draft.title(),
                similar_id = %similar.id(),
                similar_title = similar.title(),
                "possible duplicate issue"
            );
            let similar_issue = similar.clone();
            self.state.duplicate = Some(DuplicateWarning::new(similar_issue.clone(), draft));
            return Ok(SubmitOutcome::DuplicateWarning(similar_issue));
        }

        self.state.duplicate = None;
        let issue = self.create(&principal, draft).await?;
        Ok(SubmitOutcome::Created(issue))
    }

    /// Answers an outstanding duplicate warning.
    ///
    /// Either answer consumes the paused draft. Declining writes nothing and
    /// leaves the form and the similar issue on display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPendingSubmission`] when no draft awaits a
    /// decision, [`BoardError::NotSignedIn`] when confirming without a
    /// principal, and
    /// [`BoardError::Store`] when the insert fails.
    pub async fn resolve_duplicate(
        &mut self,
        decision: DuplicateDecision,
    ) -> BoardResult<SubmitOutcome> {
        match decision {
            DuplicateDecision::Decline => {
                let draft = self
                    .state
                    .pending_draft()
                    .ok_or(BoardError::NoPendingSubmission)?;
                tracing::info!(title = draft.title(), "duplicate creation declined");
                Ok(SubmitOutcome::Declined)
            }
            DuplicateDecision::CreateAnyway => {
                let principal = self
                    .state
                    .principal
                    .clone()
                    .ok_or(BoardError::NotSignedIn)?;
                let draft = self
                    .state
                    .pending_draft()
                    .ok_or(BoardError::NoPendingSubmission)?;
                let issue = self.create(&principal, draft).await?;
                Ok(SubmitOutcome::Created(issue))
            }
        }
    }

    /// Checks a status change for a listed issue against the workflow guard.
    ///
    /// Accepted changes are acknowledged only; the store is not written.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownIssue`] when the issue is not in the
    /// cached list.
    pub fn request_status_change(
        &mut self,
        issue_id: IssueId,
        target: IssueStatus,
    ) -> BoardResult<BoardNotice> {
        let issue = self
            .state
            .issues
            .iter()
            .find(|issue| issue.id() == issue_id)
            .ok_or(BoardError::UnknownIssue(issue_id))?;

        let notice = match issue.check_transition(target) {
            Ok(transition) => BoardNotice::TransitionAcknowledged(transition),
            Err(IssueDomainError::InvalidStatusTransition { from, to, .. }) => {
                tracing::warn!(%issue_id, %from, %to, "status change rejected");
                BoardNotice::TransitionRejected { issue_id, from, to }
            }
            Err(other) => return Err(other.into()),
        };
        self.state.notice = Some(notice);
        Ok(notice)
    }

    async fn create(&mut self, principal: &Principal, draft: IssueDraft) -> BoardResult<Issue> {
        let new_issue = NewIssue::new(draft, principal.email().as_str());
        let issue = match self.store.insert(&new_issue).await {
            Ok(issue) => issue,
            Err(err) => {
                tracing::warn!(error = %err, "failed to create issue");
                self.state.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };
        tracing::info!(
            issue_id = %issue.id(),
            created_by = issue.created_by(),
            "issue created"
        );

        self.state.reset_after_create();
        if let Err(err) = self.load_issues().await {
            tracing::warn!(error = %err, "issue created but the list could not be reloaded");
        }
        Ok(issue)
    }
}
