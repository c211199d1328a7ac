use std::env::VarError;
use std::num::{NonZeroUsize, ParseIntError};

use data_model_tracker::db::{ConnectionPoolError, DbPool, establish_connection_pool};

#[derive(Debug, thiserror::Error)]
pub enum DbEnvError {
    #[error("DATABASE_URL must be set in .env file or present as an env var: {0}")]
    MissingDatabaseUrl(#[from] VarError),
    #[error("DB_MAX_CONNECTIONS must be a positive integer: {0}")]
    InvalidMaxConnections(#[from] ParseIntError),
    #[error("Couldn't connect to the database: {0}")]
    Connection(#[from] ConnectionPoolError),
}

/// Uses the env var DATABASE_URL to establish a database connection pool using diesel.
/// The pool size comes from DB_MAX_CONNECTIONS when set.
pub async fn get_db_pool() -> Result<DbPool, DbEnvError> {
    let database_url = get_database_url()?;
    let max_size = get_max_connections()?.map(NonZeroUsize::get);
    let pool = establish_connection_pool(&database_url, max_size).await?;
    tracing::info!("Connected to database (max pool size: {})", pool.status().max_size);
    Ok(pool)
}

/// Retrieves the value for the env var DATABASE_URL.
pub fn get_database_url() -> Result<String, VarError> {
    std::env::var("DATABASE_URL")
}

/// Retrieves DB_MAX_CONNECTIONS. `None` when unset or blank; zero is rejected.
pub fn get_max_connections() -> Result<Option<NonZeroUsize>, ParseIntError> {
    match std::env::var("DB_MAX_CONNECTIONS") {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<NonZeroUsize>().map(Some),
        _ => Ok(None),
    }
}
