use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::deadpool::Pool;

pub type PoolError = deadpool::managed::PoolError<diesel_async::pooled_connection::PoolError>;

pub type DbPool = Pool<AsyncPgConnection>;

#[derive(Debug, thiserror::Error)]
pub enum ConnectionPoolError {
    #[error("Failed to build connection pool: {0}")]
    BuildError(#[from] deadpool::managed::BuildError),
    #[error("Failed to establish initial database connection: {0}")]
    ConnectionError(#[from] PoolError),
}

/// Builds a pool of async Postgres connections.
/// `max_size` overrides deadpool's default pool size (4 x CPU cores) when supplied.
pub async fn establish_connection_pool(
    database_url: &str,
    max_size: Option<usize>,
) -> Result<DbPool, ConnectionPoolError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let mut builder = Pool::builder(config);
    if let Some(max_size) = max_size {
        builder = builder.max_size(max_size);
    }
    let pool = builder.build()?;

    // Fail fast if the DB is unavailable
    let _conn = pool.get().await?;

    Ok(pool)
}
