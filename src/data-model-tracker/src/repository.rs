//! Persistence for job applications.
//!
//! Route handlers only see the [`ApplicationRepository`] trait. [`PgRepository`] is the
//! production implementation over a diesel-async connection pool.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use std::sync::Arc;

use crate::db::{DbPool, PoolError};
use crate::models::{JobApplication, JobApplicationFields, NewJobApplication};
use crate::schema::job_application;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// Failure reported by a non-SQL backend.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// CRUD primitives over job applications, keyed on the integer identity.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// All stored applications, ordered by id.
    async fn find_all(&self) -> Result<Vec<JobApplication>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, RepositoryError>;

    /// Persists a new row. The store assigns the id.
    async fn insert(&self, new: NewJobApplication) -> Result<JobApplication, RepositoryError>;

    /// Overwrites every writable column of an existing row.
    /// Returns `None` when no row has this id; `id` and `created_at` are never touched.
    async fn update(&self, id: i64, fields: JobApplicationFields) -> Result<Option<JobApplication>, RepositoryError>;

    /// Removes the row if present. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Handle shared across request handlers.
pub type SharedRepository = Arc<dyn ApplicationRepository>;

/// [`ApplicationRepository`] backed by the `job_application` Postgres table.
#[derive(Clone)]
pub struct PgRepository {
    pool: DbPool,
}

impl PgRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn into_shared(self) -> SharedRepository {
        Arc::new(self)
    }
}

#[async_trait]
impl ApplicationRepository for PgRepository {
    async fn find_all(&self) -> Result<Vec<JobApplication>, RepositoryError> {
        let mut conn = self.pool.get().await?;

        let records = job_application::table
            .order(job_application::id.asc())
            .select(JobApplication::as_select())
            .load::<JobApplication>(&mut conn)
            .await?;

        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, RepositoryError> {
        let mut conn = self.pool.get().await?;

        let record = job_application::table
            .find(id)
            .select(JobApplication::as_select())
            .first::<JobApplication>(&mut conn)
            .await
            .optional()?;

        Ok(record)
    }

    async fn insert(&self, new: NewJobApplication) -> Result<JobApplication, RepositoryError> {
        let mut conn = self.pool.get().await?;

        let record = diesel::insert_into(job_application::table)
            .values(&new)
            .returning(JobApplication::as_returning())
            .get_result::<JobApplication>(&mut conn)
            .await?;

        Ok(record)
    }

    async fn update(&self, id: i64, fields: JobApplicationFields) -> Result<Option<JobApplication>, RepositoryError> {
        let mut conn = self.pool.get().await?;

        // Lookup and overwrite in one statement: zero rows updated means the id is unknown.
        let record = diesel::update(job_application::table.find(id))
            .set(&fields)
            .returning(JobApplication::as_returning())
            .get_result::<JobApplication>(&mut conn)
            .await
            .optional()?;

        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await?;

        let deleted = diesel::delete(job_application::table.find(id))
            .execute(&mut conn)
            .await?;
        tracing::debug!("Deleted {} row(s) for job application {}", deleted, id);

        Ok(())
    }
}
