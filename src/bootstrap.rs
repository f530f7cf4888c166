use crate::application::services::{AdReader, LockSimulator, ReaderConfig};
use crate::config::Config;
use crate::domain::ports::{AdsRepository, NoopTracer, TableLocker, TaskSpawner, TimeService, Tracer};
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::observability::TracingTracer;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::runtime::{TokioTaskSpawner, TokioTimeService};
use std::sync::Arc;

pub fn build_app_state(db: Database, config: &Config) -> AppState {
    let time: Arc<dyn TimeService> = Arc::new(TokioTimeService::new());
    let spawner: Arc<dyn TaskSpawner> = Arc::new(TokioTaskSpawner::new());

    let tracer: Arc<dyn Tracer> = if config.tracing_enabled {
        Arc::new(TracingTracer::new(config.service_name.clone()))
    } else {
        Arc::new(NoopTracer)
    };
    tracing::info!(enabled = config.tracing_enabled, "instrumentation configured");

    let reader_config = ReaderConfig {
        backoff: config.read_backoff,
        max_attempts: config.read_max_attempts,
        max_wait: config.read_max_wait,
    };
    let reader = AdReader::new(
        Arc::new(db.clone()) as Arc<dyn AdsRepository>,
        time.clone(),
        tracer,
        reader_config,
    );
    tracing::info!("resilient reader initialized");

    let simulator = LockSimulator::new(
        Arc::new(db) as Arc<dyn TableLocker>,
        spawner,
        time,
        config.lock_mode,
    );
    tracing::info!(mode = ?config.lock_mode, "lock simulator initialized");

    AppState {
        reader: Arc::new(reader),
        simulator: Arc::new(simulator),
    }
}
