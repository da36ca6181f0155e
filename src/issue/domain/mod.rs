//! Domain model for issues.
//!
//! Issues are created from validated drafts, listed newest first, filtered
//! by status and priority, and checked against a duplicate-title heuristic
//! before insertion. Status changes pass through a workflow guard that is
//! advisory only.

mod attributes;
mod error;
mod filter;
mod ids;
mod issue;
mod similarity;

pub use attributes::{IssuePriority, IssueStatus};
pub use error::IssueDomainError;
pub use filter::{IssueFilter, Selection};
pub use ids::IssueId;
pub use issue::{Issue, IssueDraft, NewIssue, PersistedIssueData, StatusTransition};
pub use similarity::{find_similar_issue, titles_overlap};
