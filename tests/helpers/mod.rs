#![allow(dead_code)]

use adserve::application::services::{AdReader, LockSimulator, ReaderConfig};
use adserve::config::LockMode;
use adserve::domain::ports::{
    AdsRepository, NoopTracer, TableLockGuard, TableLocker, TimeService,
};
use adserve::domain::{AdRecord, StoreError};
use adserve::infrastructure::http::middleware::AppState;
use adserve::infrastructure::http::router::build_router;
use adserve::infrastructure::runtime::TokioTaskSpawner;
use async_trait::async_trait;
use axum::Router;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn ad(id: i64, title: &str) -> AdRecord {
    let mut record = AdRecord::new();
    record.insert("id".to_string(), serde_json::json!(id));
    record.insert("title".to_string(), serde_json::json!(title));
    record
}

/// Serves a fixed row set, failing the first `failures` fetches.
pub struct FakeAdsRepository {
    rows: Vec<AdRecord>,
    failures: u32,
    calls: AtomicU32,
}

impl FakeAdsRepository {
    pub fn new(rows: Vec<AdRecord>) -> Self {
        Self {
            rows,
            failures: 0,
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing_first(rows: Vec<AdRecord>, failures: u32) -> Self {
        Self {
            rows,
            failures,
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl AdsRepository for FakeAdsRepository {
    async fn fetch_all(&self) -> Result<Vec<AdRecord>, StoreError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(StoreError::Unavailable("connection refused".to_string()))
        } else {
            Ok(self.rows.clone())
        }
    }
}

/// Records lock/unlock events for assertion.
#[derive(Clone)]
pub struct RecordingLocker {
    pub events: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingLocker {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

struct RecordingGuard {
    events: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl TableLocker for RecordingLocker {
    async fn lock(&self) -> Result<Box<dyn TableLockGuard>, StoreError> {
        self.events.lock().unwrap().push("lock");
        Ok(Box::new(RecordingGuard {
            events: self.events.clone(),
        }))
    }
}

#[async_trait]
impl TableLockGuard for RecordingGuard {
    async fn unlock(self: Box<Self>) -> Result<(), StoreError> {
        self.events.lock().unwrap().push("unlock");
        Ok(())
    }
}

/// Sleeps return immediately; keeps retry loops and simulations fast.
pub struct InstantClock;

#[async_trait]
impl TimeService for InstantClock {
    async fn sleep(&self, _duration: Duration) {}
}

/// Sleeps park forever; freezes a simulation inside its first hold.
pub struct ParkedClock;

#[async_trait]
impl TimeService for ParkedClock {
    async fn sleep(&self, _duration: Duration) {
        std::future::pending::<()>().await;
    }
}

pub fn test_state(
    repo: Arc<dyn AdsRepository>,
    locker: Arc<dyn TableLocker>,
    time: Arc<dyn TimeService>,
    mode: LockMode,
) -> AppState {
    let reader = AdReader::new(
        repo,
        time.clone(),
        Arc::new(NoopTracer),
        ReaderConfig::default(),
    );
    let simulator = LockSimulator::new(locker, Arc::new(TokioTaskSpawner::new()), time, mode);
    AppState {
        reader: Arc::new(reader),
        simulator: Arc::new(simulator),
    }
}

pub fn test_app(rows: Vec<AdRecord>, mode: LockMode) -> Router {
    let state = test_state(
        Arc::new(FakeAdsRepository::new(rows)),
        Arc::new(RecordingLocker::new()),
        Arc::new(InstantClock),
        mode,
    );
    build_router(state)
}
