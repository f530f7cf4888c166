use crate::domain::ports::{TaskHandle, TaskSpawner, TimeService};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::time::Duration;

#[derive(Clone)]
pub struct TokioTaskSpawner;

impl TokioTaskSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioTaskSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSpawner for TokioTaskSpawner {
    fn spawn(&self, future: BoxFuture<'static, ()>) -> Box<dyn TaskHandle> {
        Box::new(TokioTaskHandle {
            inner: tokio::spawn(future),
        })
    }
}

struct TokioTaskHandle {
    inner: tokio::task::JoinHandle<()>,
}

impl TaskHandle for TokioTaskHandle {
    fn abort(&self) {
        self.inner.abort();
    }

    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

#[derive(Clone)]
pub struct TokioTimeService;

impl TokioTimeService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioTimeService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeService for TokioTimeService {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
