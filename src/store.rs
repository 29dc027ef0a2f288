use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db;
use crate::models::{LostItemReport, NewLostItem};

pub type SharedReportStore = Arc<dyn ReportStore>;

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "database error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// The document-collection seam: one insert, one sorted read, nothing else.
/// Handlers only ever see this trait, so tests swap in an in-memory double.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Insert a report; the store assigns identity and stamps the timestamp.
    async fn insert(&self, item: &NewLostItem) -> Result<LostItemReport, StoreError>;

    /// All reports, newest first. Ties on timestamp keep insertion order,
    /// later insert first.
    async fn list_newest_first(&self) -> Result<Vec<LostItemReport>, StoreError>;
}

pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, item: &NewLostItem) -> Result<LostItemReport, StoreError> {
        Ok(db::lost_items::insert(&self.pool, item).await?)
    }

    async fn list_newest_first(&self) -> Result<Vec<LostItemReport>, StoreError> {
        Ok(db::lost_items::list_newest_first(&self.pool).await?)
    }
}
