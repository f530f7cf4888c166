use crate::application::services::SimulationRegistry;
use crate::config::LockMode;
use crate::domain::ports::{TableLocker, TaskSpawner, TimeService};
use crate::domain::{LockSimulationRequest, StoreError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{error, info};

/// Delay before the periodic loop retries after a failed cycle.
const CYCLE_RECOVERY_DELAY: Duration = Duration::from_secs(5);

/// Outcome of a simulation start request. Always produced immediately; the
/// lock/unlock work itself happens in a background task.
#[derive(Debug, PartialEq, Eq)]
pub enum SimulationStart {
    Started { duration_secs: u64 },
    PeriodicStarted { duration_secs: u64, cooldown_secs: u64 },
    AlreadyRunning,
}

/// Injects table-level write contention on demand.
///
/// Single-shot mode spawns an independent lock/sleep/unlock task per request
/// and lets them overlap; the backend itself serializes actual table access.
/// Periodic mode runs at most one cycling task, guarded by a check-and-set
/// on `periodic_active`; the flag is set under its mutex and stays set for
/// as long as the cycling task lives, which is until `abort_all` kills it.
pub struct LockSimulator {
    locker: Arc<dyn TableLocker>,
    spawner: Arc<dyn TaskSpawner>,
    time: Arc<dyn TimeService>,
    mode: LockMode,
    registry: SimulationRegistry,
    periodic_active: Mutex<bool>,
}

impl LockSimulator {
    pub fn new(
        locker: Arc<dyn TableLocker>,
        spawner: Arc<dyn TaskSpawner>,
        time: Arc<dyn TimeService>,
        mode: LockMode,
    ) -> Self {
        Self {
            locker,
            spawner,
            time,
            mode,
            registry: SimulationRegistry::new(),
            periodic_active: Mutex::new(false),
        }
    }

    pub fn start(&self, request: LockSimulationRequest) -> SimulationStart {
        match self.mode {
            LockMode::SingleShot => self.start_one_shot(request),
            LockMode::Periodic => self.start_periodic(request),
        }
    }

    /// Spawn one lock/sleep/unlock task. Overlapping requests each get their
    /// own task and their own locking connection.
    pub fn start_one_shot(&self, request: LockSimulationRequest) -> SimulationStart {
        let locker = self.locker.clone();
        let time = self.time.clone();
        let duration = request.lock_duration;

        let handle = self.spawner.spawn(Box::pin(async move {
            if let Err(err) = run_lock_cycle(&locker, &time, duration).await {
                // Fatal to this task only; the serving process is unaffected.
                error!(error = %err, "lock simulation aborted");
            }
        }));
        self.registry.register(handle);

        metrics::counter!("lock_simulations_started_total").increment(1);
        SimulationStart::Started {
            duration_secs: request.lock_secs(),
        }
    }

    /// Spawn the cycling task unless one is already running.
    pub fn start_periodic(&self, request: LockSimulationRequest) -> SimulationStart {
        let mut active = self.periodic_active.lock().unwrap();
        if *active {
            info!("periodic lock simulation already in progress, rejecting start");
            return SimulationStart::AlreadyRunning;
        }
        *active = true;
        drop(active);

        let locker = self.locker.clone();
        let time = self.time.clone();
        let duration = request.lock_duration;
        let cooldown = request.cooldown;

        let handle = self.spawner.spawn(Box::pin(async move {
            loop {
                match run_lock_cycle(&locker, &time, duration).await {
                    Ok(()) => time.sleep(cooldown).await,
                    Err(err) => {
                        error!(error = %err, "lock cycle failed, retrying after recovery delay");
                        time.sleep(CYCLE_RECOVERY_DELAY).await;
                    }
                }
            }
        }));
        self.registry.register(handle);

        metrics::counter!("lock_simulations_started_total").increment(1);
        SimulationStart::PeriodicStarted {
            duration_secs: request.lock_secs(),
            cooldown_secs: request.cooldown_secs(),
        }
    }

    pub fn active_simulations(&self) -> usize {
        self.registry.active_count()
    }

    /// Abort every tracked simulation task. Held locks are released by the
    /// backend when the tasks' connections close. Killing the cycling task
    /// also clears the activity flag, so a fresh periodic start is accepted
    /// afterwards.
    pub fn abort_all(&self) {
        self.registry.abort_all();
        *self.periodic_active.lock().unwrap() = false;
    }
}

async fn run_lock_cycle(
    locker: &Arc<dyn TableLocker>,
    time: &Arc<dyn TimeService>,
    duration: Duration,
) -> Result<(), StoreError> {
    let guard = locker.lock().await?;
    info!(secs = duration.as_secs(), "ads table locked");
    time.sleep(duration).await;
    guard.unlock().await?;
    info!("ads table unlocked");
    metrics::counter!("lock_cycles_completed_total").increment(1);
    Ok(())
}
