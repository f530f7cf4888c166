use crate::domain::ports::{AdsRepository, TimeService, Tracer};
use crate::domain::{AdRecord, ReadError, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Retry policy for the resilient read path.
///
/// The defaults reproduce the reference behavior: a fixed 1-second backoff
/// and no bound on attempts or total wait, so a read blocks its caller until
/// the backend comes back. Bounds can be set where an operator prefers a
/// 503 over an indefinitely pending request.
#[derive(Clone, Copy, Debug)]
pub struct ReaderConfig {
    pub backoff: Duration,
    pub max_attempts: Option<u32>,
    /// Budget on the total time spent sleeping between attempts.
    pub max_wait: Option<Duration>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            backoff: Duration::from_secs(1),
            max_attempts: None,
            max_wait: None,
        }
    }
}

/// Fetches the full ads table, absorbing transient backend failures.
///
/// A call either returns the complete, order-preserved row set or keeps
/// retrying; callers observe latency, not errors, while the backend is
/// unreachable. The future is cancellable by dropping it, so callers can
/// impose their own deadline.
pub struct AdReader {
    repo: Arc<dyn AdsRepository>,
    time: Arc<dyn TimeService>,
    tracer: Arc<dyn Tracer>,
    config: ReaderConfig,
}

impl AdReader {
    pub fn new(
        repo: Arc<dyn AdsRepository>,
        time: Arc<dyn TimeService>,
        tracer: Arc<dyn Tracer>,
        config: ReaderConfig,
    ) -> Self {
        Self {
            repo,
            time,
            tracer,
            config,
        }
    }

    pub async fn fetch_all_ads(&self) -> Result<Vec<AdRecord>, ReadError> {
        let _span = self.tracer.start_span("fetch_all_ads");

        let mut attempt: u32 = 0;
        let mut waited = Duration::ZERO;
        loop {
            attempt += 1;
            metrics::counter!("ads_fetch_attempts_total").increment(1);

            match self.repo.fetch_all().await {
                Ok(ads) => {
                    info!(rows = ads.len(), attempt, "ads retrieved from the database");
                    return Ok(ads);
                }
                Err(err) => {
                    metrics::counter!("ads_fetch_retries_total").increment(1);
                    warn!(error = %err, attempt, "failed to retrieve ads, retrying after backoff");

                    self.check_bounds(attempt, waited, err)?;
                    self.time.sleep(self.config.backoff).await;
                    waited += self.config.backoff;
                }
            }
        }
    }

    /// Returns Err once a configured bound is exhausted. Under the default
    /// configuration both bounds are unset and this never fails.
    fn check_bounds(
        &self,
        attempt: u32,
        waited: Duration,
        source: StoreError,
    ) -> Result<(), ReadError> {
        if let Some(max) = self.config.max_attempts {
            if attempt >= max {
                return Err(ReadError::RetriesExhausted {
                    attempts: attempt,
                    source,
                });
            }
        }
        if let Some(budget) = self.config.max_wait {
            if waited + self.config.backoff > budget {
                return Err(ReadError::DeadlineExceeded {
                    budget_secs: budget.as_secs(),
                    source,
                });
            }
        }
        Ok(())
    }
}
