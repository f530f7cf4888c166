use crate::domain::ports::TaskHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Bookkeeping for background lock-simulation tasks.
///
/// Simulations used to be fire-and-forget; tracking the handles makes them
/// countable and abortable. Finished handles are reaped on every insert, so
/// the map only ever holds live or just-completed tasks.
#[derive(Default)]
pub struct SimulationRegistry {
    next_id: AtomicU64,
    tasks: Mutex<HashMap<u64, Box<dyn TaskHandle>>>,
}

impl SimulationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, handle: Box<dyn TaskHandle>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut tasks = self.tasks.lock().unwrap();
        tasks.retain(|_, h| !h.is_finished());
        tasks.insert(id, handle);
        id
    }

    pub fn active_count(&self) -> usize {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.retain(|_, h| !h.is_finished());
        tasks.len()
    }

    pub fn abort_all(&self) {
        let mut tasks = self.tasks.lock().unwrap();
        for handle in tasks.values() {
            handle.abort();
        }
        tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    struct StubHandle {
        finished: Arc<AtomicBool>,
        aborted: Arc<AtomicBool>,
    }

    impl TaskHandle for StubHandle {
        fn abort(&self) {
            self.aborted.store(true, Ordering::SeqCst);
        }

        fn is_finished(&self) -> bool {
            self.finished.load(Ordering::SeqCst)
        }
    }

    fn stub(finished: bool) -> (Box<dyn TaskHandle>, Arc<AtomicBool>) {
        let aborted = Arc::new(AtomicBool::new(false));
        let handle = StubHandle {
            finished: Arc::new(AtomicBool::new(finished)),
            aborted: aborted.clone(),
        };
        (Box::new(handle), aborted)
    }

    #[test]
    fn counts_live_tasks_and_reaps_finished_ones() {
        let registry = SimulationRegistry::new();
        let (live, _) = stub(false);
        let (done, _) = stub(true);
        registry.register(live);
        registry.register(done);

        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn abort_all_aborts_and_clears() {
        let registry = SimulationRegistry::new();
        let (live, aborted) = stub(false);
        registry.register(live);

        registry.abort_all();
        assert!(aborted.load(Ordering::SeqCst));
        assert_eq!(registry.active_count(), 0);
    }
}
