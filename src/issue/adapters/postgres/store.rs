//! `PostgreSQL` store implementation for issues.

use super::{
    models::{IssueRow, NewIssueRow},
    schema::issues,
};
use crate::config::DatabaseConfig;
use crate::issue::{
    domain::{Issue, IssueId, IssuePriority, IssueStatus, NewIssue, PersistedIssueData},
    ports::{IssueStore, IssueStoreError, IssueStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the issue store.
pub type IssuePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed issue store.
#[derive(Debug, Clone)]
pub struct PostgresIssueStore {
    pool: IssuePgPool,
}

impl PostgresIssueStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from configuration and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::Persistence`] when the pool cannot open its
    /// initial connections.
    pub fn connect(config: &DatabaseConfig) -> IssueStoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .build(manager)
            .map_err(IssueStoreError::persistence)?;
        tracing::debug!(
            max_connections = config.max_connections,
            "issue store connection pool ready"
        );
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> IssueStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> IssueStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(IssueStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(IssueStoreError::persistence)?
    }
}

#[async_trait]
impl IssueStore for PostgresIssueStore {
    async fn insert(&self, issue: &NewIssue) -> IssueStoreResult<Issue> {
        let new_row = to_new_row(issue, IssueId::new());
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(issues::table)
                .values(&new_row)
                .returning(IssueRow::as_returning())
                .get_result::<IssueRow>(connection)
                .map_err(IssueStoreError::persistence)?;
            row_to_issue(row)
        })
        .await
    }

    async fn list_newest_first(&self) -> IssueStoreResult<Vec<Issue>> {
        self.run_blocking(|connection| {
            let rows = issues::table
                .order((issues::created_at.desc(), issues::seq.desc()))
                .select(IssueRow::as_select())
                .load::<IssueRow>(connection)
                .map_err(IssueStoreError::persistence)?;
            rows.into_iter().map(row_to_issue).collect()
        })
        .await
    }
}

fn to_new_row(issue: &NewIssue, id: IssueId) -> NewIssueRow {
    let draft = issue.draft();
    NewIssueRow {
        id: id.into_inner(),
        title: draft.title().to_owned(),
        description: draft.description().to_owned(),
        priority: draft.priority().as_str().to_owned(),
        status: draft.status().as_str().to_owned(),
        assigned_to: draft.assigned_to().map(str::to_owned),
        created_by: issue.created_by().to_owned(),
    }
}

fn row_to_issue(row: IssueRow) -> IssueStoreResult<Issue> {
    let IssueRow {
        id,
        title,
        description,
        priority: persisted_priority,
        status: persisted_status,
        assigned_to,
        created_by,
        created_at,
    } = row;

    let priority = IssuePriority::try_from(persisted_priority.as_str())
        .map_err(IssueStoreError::persistence)?;
    let status =
        IssueStatus::try_from(persisted_status.as_str()).map_err(IssueStoreError::persistence)?;

    Ok(Issue::from_persisted(PersistedIssueData {
        id: IssueId::from_uuid(id),
        title,
        description,
        priority,
        status,
        assigned_to,
        created_at,
        created_by,
    }))
}
