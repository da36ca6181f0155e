//! Diesel row models for issue persistence.

use super::schema::issues;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for issue records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueRow {
    /// Issue identifier.
    pub id: uuid::Uuid,
    /// Issue title.
    pub title: String,
    /// Issue description.
    pub description: String,
    /// Priority label.
    pub priority: String,
    /// Status label.
    pub status: String,
    /// Optional assignee.
    pub assigned_to: Option<String>,
    /// Creator email.
    pub created_by: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for issue records.
///
/// `created_at` is omitted so the column default assigns server time.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = issues)]
pub struct NewIssueRow {
    /// Issue identifier.
    pub id: uuid::Uuid,
    /// Issue title.
    pub title: String,
    /// Issue description.
    pub description: String,
    /// Priority label.
    pub priority: String,
    /// Status label.
    pub status: String,
    /// Optional assignee.
    pub assigned_to: Option<String>,
    /// Creator email.
    pub created_by: String,
}
