use thiserror::Error;

/// Failures surfaced by the persistence ports.
///
/// The read path retries both variants indistinctly; the split exists for
/// logging and metrics, not for control flow.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::Tls(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::PoolTimedOut => {
                StoreError::Unavailable("connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => StoreError::Unavailable("connection pool closed".to_string()),
            sqlx::Error::Configuration(e) => StoreError::Unavailable(e.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Failures of a bounded resilient read. Under the default (unbounded)
/// configuration these are unreachable: the reader retries forever.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("gave up after {attempts} attempts: {source}")]
    RetriesExhausted { attempts: u32, source: StoreError },

    #[error("retry budget of {budget_secs}s exhausted: {source}")]
    DeadlineExceeded { budget_secs: u64, source: StoreError },
}
