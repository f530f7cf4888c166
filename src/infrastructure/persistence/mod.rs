use log::LevelFilter;
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions},
    AnyConnection, AnyPool, ConnectOptions,
};
use std::str::FromStr;

mod ads;
mod table_lock;

/// Owner of backend connectivity.
///
/// Reads go through the pool; explicit LOCK/UNLOCK sequences go through
/// `dedicated_connection`, since pool-managed transaction boundaries would
/// silently end a held table lock. No retry logic lives here; callers that
/// need resilience wrap this seam.
pub struct Database {
    pub(crate) pool: AnyPool,
    url: String,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // Ensure drivers are installed for AnyPool
        sqlx::any::install_default_drivers();

        let connect_options = AnyConnectOptions::from_str(database_url)?
            .log_statements(LevelFilter::Info)
            .log_slow_statements(LevelFilter::Warn, std::time::Duration::from_secs(1));

        // Lazy connect: the process must come up (and stay up) even while
        // the backend is unreachable; the read path retries past it.
        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .connect_lazy_with(connect_options);

        // Enable optimizations for SQLite (dev/test backend)
        if database_url.starts_with("sqlite") {
            sqlx::query("PRAGMA journal_mode = WAL")
                .execute(&pool)
                .await?;
            sqlx::query("PRAGMA busy_timeout = 5000")
                .execute(&pool)
                .await?;
        }

        Ok(Self {
            pool,
            url: database_url.to_string(),
        })
    }

    /// Apply the dev schema. Production MySQL owns its schema externally;
    /// this only runs against the sqlite dev backend.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// A raw, non-pooled connection for explicit lock sequences. The caller
    /// owns its lifetime; closing (or dropping) it releases any lock held.
    pub async fn dedicated_connection(&self) -> Result<AnyConnection, sqlx::Error> {
        AnyConnectOptions::from_str(&self.url)?.connect().await
    }

    pub(crate) fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite")
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            url: self.url.clone(),
        }
    }
}
