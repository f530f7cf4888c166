use std::time::Duration;

/// One row of the ads table, as a column-name to value mapping.
///
/// The service treats rows as opaque: whatever columns the backend returns
/// are passed through unchanged. Values the driver cannot decode into a JSON
/// scalar become null.
pub type AdRecord = serde_json::Map<String, serde_json::Value>;

/// Seconds applied when a caller omits or mangles a duration field.
pub const DEFAULT_LOCK_SECS: u64 = 10;

/// Parameters for one lock-simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockSimulationRequest {
    pub lock_duration: Duration,
    pub cooldown: Duration,
}

impl LockSimulationRequest {
    /// Parse the optional JSON request body, substituting the 10s default
    /// for anything missing, malformed, or negative. Validation failures
    /// are recovered here, never surfaced to the caller.
    pub fn from_body(body: &[u8]) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        let secs = |field: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(field))
                .and_then(|v| v.as_u64())
                .unwrap_or(DEFAULT_LOCK_SECS)
        };
        Self {
            lock_duration: Duration::from_secs(secs("lock_duration")),
            cooldown: Duration::from_secs(secs("cooldown")),
        }
    }

    pub fn lock_secs(&self) -> u64 {
        self.lock_duration.as_secs()
    }

    pub fn cooldown_secs(&self) -> u64 {
        self.cooldown.as_secs()
    }
}
