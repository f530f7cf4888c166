use crate::domain::ports::{TableLockGuard, TableLocker};
use crate::domain::StoreError;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{AnyConnection, Connection};

/// Exclusive-lock statements for the backend behind the given URL. MySQL is
/// the production target; sqlite (dev/test) gets the closest equivalent, an
/// immediate transaction holding the write lock until commit.
fn lock_statements(sqlite: bool) -> (&'static str, &'static str) {
    if sqlite {
        ("BEGIN IMMEDIATE", "COMMIT")
    } else {
        ("LOCK TABLES ads WRITE", "UNLOCK TABLES")
    }
}

#[async_trait]
impl TableLocker for Database {
    async fn lock(&self) -> Result<Box<dyn TableLockGuard>, StoreError> {
        let mut conn = self.dedicated_connection().await?;
        let (lock_sql, unlock_sql) = lock_statements(self.is_sqlite());
        sqlx::query(lock_sql).execute(&mut conn).await?;
        Ok(Box::new(SqlTableLockGuard { conn, unlock_sql }))
    }
}

/// Holds the dedicated connection for the lifetime of the lock. If the guard
/// is dropped without `unlock`, the connection closes and the backend
/// releases the lock with it.
struct SqlTableLockGuard {
    conn: AnyConnection,
    unlock_sql: &'static str,
}

#[async_trait]
impl TableLockGuard for SqlTableLockGuard {
    async fn unlock(self: Box<Self>) -> Result<(), StoreError> {
        let mut this = *self;
        sqlx::query(this.unlock_sql).execute(&mut this.conn).await?;
        this.conn.close().await.map_err(StoreError::from)?;
        Ok(())
    }
}
