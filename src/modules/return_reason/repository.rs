use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgExecutor, Postgres, QueryBuilder};

/// Serializes the entity's own columns; relations are rendered by the selection policy.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReturnReason {
    pub id: String,
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub parent_return_reason_id: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    /// `None` until the relation has been loaded.
    #[serde(skip)]
    pub parent_return_reason: Option<Option<Box<ReturnReason>>>,
    #[serde(skip)]
    pub return_reason_children: Option<Vec<ReturnReason>>,
}

impl ReturnReason {
    pub fn is_top_level(&self) -> bool {
        self.parent_return_reason_id.is_none()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(sqlx::FromRow)]
struct DbReturnReason {
    id: String,
    value: String,
    label: String,
    description: Option<String>,
    parent_return_reason_id: Option<String>,
    metadata: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<DbReturnReason> for ReturnReason {
    fn from(row: DbReturnReason) -> Self {
        Self {
            id: row.id,
            value: row.value,
            label: row.label,
            description: row.description,
            parent_return_reason_id: row.parent_return_reason_id,
            metadata: row.metadata,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            parent_return_reason: None,
            return_reason_children: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParentFilter {
    #[default]
    Any,
    TopLevel,
    ChildOf(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub parent_return_reason_id: ParentFilter,
}

impl Filters {
    pub fn top_level() -> Self {
        Self {
            parent_return_reason_id: ParentFilter::TopLevel,
        }
    }

    /// Soft-deleted reasons never match.
    pub fn matches(&self, reason: &ReturnReason) -> bool {
        if reason.is_deleted() {
            return false;
        }

        match &self.parent_return_reason_id {
            ParentFilter::Any => true,
            ParentFilter::TopLevel => reason.is_top_level(),
            ParentFilter::ChildOf(parent_id) => {
                reason.parent_return_reason_id.as_deref() == Some(parent_id.as_str())
            }
        }
    }

    fn push_where<'a>(&'a self, query: &mut QueryBuilder<'a, Postgres>) {
        query.push(" WHERE deleted_at IS NULL");

        match &self.parent_return_reason_id {
            ParentFilter::Any => {}
            ParentFilter::TopLevel => {
                query.push(" AND parent_return_reason_id IS NULL");
            }
            ParentFilter::ChildOf(parent_id) => {
                query
                    .push(" AND parent_return_reason_id = ")
                    .push_bind(parent_id.as_str());
            }
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Conflict(String),
    UnexpectedError,
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation() =>
            {
                Error::Conflict(db_err.message().to_string())
            }
            _ => Error::UnexpectedError,
        }
    }
}

const COLUMNS: &str = "id, value, label, description, parent_return_reason_id, metadata, \
                       created_at, updated_at, deleted_at";

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
) -> Result<Option<ReturnReason>, Error> {
    match sqlx::query_as::<_, DbReturnReason>(&format!(
        "SELECT {} FROM return_reason WHERE id = $1 AND deleted_at IS NULL",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(e)
    .await
    {
        Ok(maybe_reason) => Ok(maybe_reason.map(Into::into)),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch a return reason by id: {}",
                err
            );
            Err(err.into())
        }
    }
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filters: &Filters,
) -> Result<Vec<ReturnReason>, Error> {
    let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM return_reason", COLUMNS));
    filters.push_where(&mut query);
    query.push(" ORDER BY created_at ASC, id ASC");

    match query.build_query_as::<DbReturnReason>().fetch_all(e).await {
        Ok(reasons) => Ok(reasons.into_iter().map(Into::into).collect()),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch return reasons: {}", err);
            Err(err.into())
        }
    }
}

pub async fn find_many_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    ids: &[String],
) -> Result<Vec<ReturnReason>, Error> {
    match sqlx::query_as::<_, DbReturnReason>(&format!(
        "SELECT {} FROM return_reason WHERE id = ANY($1) AND deleted_at IS NULL",
        COLUMNS
    ))
    .bind(ids)
    .fetch_all(e)
    .await
    {
        Ok(reasons) => Ok(reasons.into_iter().map(Into::into).collect()),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch return reasons by ids: {}",
                err
            );
            Err(err.into())
        }
    }
}

pub async fn find_children_of<'e, E: PgExecutor<'e>>(
    e: E,
    parent_ids: &[String],
) -> Result<Vec<ReturnReason>, Error> {
    match sqlx::query_as::<_, DbReturnReason>(&format!(
        "SELECT {} FROM return_reason \
         WHERE parent_return_reason_id = ANY($1) AND deleted_at IS NULL \
         ORDER BY created_at ASC, id ASC",
        COLUMNS
    ))
    .bind(parent_ids)
    .fetch_all(e)
    .await
    {
        Ok(reasons) => Ok(reasons.into_iter().map(Into::into).collect()),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch return reason children: {}",
                err
            );
            Err(err.into())
        }
    }
}
