use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tracing::debug;

/// Widget state shared between a session and its scheduled tasks.
#[derive(Debug, Default)]
pub struct Shared<T>(Arc<Mutex<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        // a panicking task must not wedge the widget
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// Tasks owned by one widget. Everything still pending is aborted by
/// [`TaskSet::cancel_all`] or when the set is dropped, so no task outlives
/// the widget that scheduled it.
#[derive(Debug)]
pub struct TaskSet {
    label: &'static str,
    handles: Vec<JoinHandle<()>>,
}

impl TaskSet {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            handles: Vec::new(),
        }
    }

    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(task));
    }

    /// Runs `task` once `delay` has elapsed, unless cancelled first.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }

    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Aborts every task and returns how many were still pending.
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.pending();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        if pending > 0 {
            debug!("Cancelled {} pending {} task(s)", pending, self.label);
        }
        pending
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `base` plus a uniformly random extra below `jitter`.
pub fn jittered(rng: &mut StdRng, base_ms: u64, jitter_ms: u64) -> Duration {
    let extra = if jitter_ms == 0 { 0 } else { rng.gen_range(0..jitter_ms) };
    Duration::from_millis(base_ms + extra)
}
