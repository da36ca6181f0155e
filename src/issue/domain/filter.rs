//! Status and priority filters applied to the cached issue list.

use super::{Issue, IssueDomainError, IssuePriority, IssueStatus};
use std::fmt;
use std::str::FromStr;

/// A filter selection: either the wildcard or one concrete value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// Matches every value.
    #[default]
    All,
    /// Matches only the given value.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Returns whether `value` passes this selection.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = IssueDomainError>,
{
    type Err = IssueDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Combined status and priority filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueFilter {
    status: Selection<IssueStatus>,
    priority: Selection<IssuePriority>,
}

impl IssueFilter {
    /// Creates a filter from both selections.
    #[must_use]
    pub const fn new(status: Selection<IssueStatus>, priority: Selection<IssuePriority>) -> Self {
        Self { status, priority }
    }

    /// Returns the status selection.
    #[must_use]
    pub const fn status(&self) -> Selection<IssueStatus> {
        self.status
    }

    /// Returns the priority selection.
    #[must_use]
    pub const fn priority(&self) -> Selection<IssuePriority> {
        self.priority
    }

    /// Replaces the status selection.
    pub const fn set_status(&mut self, status: Selection<IssueStatus>) {
        self.status = status;
    }

    /// Replaces the priority selection.
    pub const fn set_priority(&mut self, priority: Selection<IssuePriority>) {
        self.priority = priority;
    }

    /// Returns whether `issue` satisfies both selections.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.matches(&issue.status()) && self.priority.matches(&issue.priority())
    }

    /// Returns the matching issues, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.matches(issue)).collect()
    }
}
