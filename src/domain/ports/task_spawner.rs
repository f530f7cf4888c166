use futures::future::BoxFuture;

/// Configurable trait for spawning background tasks.
/// Abstracts the runtime (Tokio) for testing or other environments.
pub trait TaskSpawner: Send + Sync {
    /// Spawn a detached future, returning a handle it can be tracked by.
    fn spawn(&self, future: BoxFuture<'static, ()>) -> Box<dyn TaskHandle>;
}

/// Handle to a spawned background task.
pub trait TaskHandle: Send {
    fn abort(&self);
    fn is_finished(&self) -> bool;
}
