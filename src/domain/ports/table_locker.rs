use crate::domain::StoreError;
use async_trait::async_trait;

/// Exclusive write-lock access to the ads table.
///
/// `lock` must use a dedicated, non-pooled connection: pool-managed
/// transaction boundaries would silently end the lock.
#[async_trait]
pub trait TableLocker: Send + Sync {
    async fn lock(&self) -> Result<Box<dyn TableLockGuard>, StoreError>;
}

/// A held table lock. `unlock` releases the lock and closes the underlying
/// connection. Dropping the guard without calling `unlock` also closes the
/// connection, which makes the backend release the lock, so no exit path can
/// leave the table locked past the connection's lifetime.
#[async_trait]
pub trait TableLockGuard: Send {
    async fn unlock(self: Box<Self>) -> Result<(), StoreError>;
}
