use crate::domain::{AdRecord, StoreError};
use async_trait::async_trait;

/// Read access to the ads table.
///
/// `fetch_all` acquires a connection, runs the query, and materializes the
/// full result set before returning; callers never see a partial list.
/// No retry logic lives behind this seam; that is the reader's job.
#[async_trait]
pub trait AdsRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<AdRecord>, StoreError>;
}
