use super::{get_connection, DbPool};
use crate::errors::StorageError;
use budgetbook_core::errors::{Error, Result};
use diesel::SqliteConnection;
use std::sync::Arc;

/// Runs write jobs against the pool.
///
/// Each job gets its own pooled connection on a blocking worker thread and
/// runs inside an `IMMEDIATE` transaction: either everything it did is
/// committed, or, when it returns an error, nothing is.
#[derive(Clone)]
pub struct WriteHandle {
    pool: Arc<DbPool>,
}

impl WriteHandle {
    pub fn new(pool: Arc<DbPool>) -> Self {
        WriteHandle { pool }
    }

    /// Executes a database job in a write transaction.
    ///
    /// # Arguments
    /// * `job`: A closure that takes a mutable reference to `SqliteConnection`
    ///   and performs database operations.
    ///
    /// # Returns
    /// A `Result<T>` containing the outcome of the job.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            conn.immediate_transaction::<_, StorageError, _>(|c| {
                job(c).map_err(StorageError::from)
            })
            .map_err(Error::from)
        })
        .await
        .map_err(|e| Error::Unexpected(format!("Database write task failed: {}", e)))?
    }
}
