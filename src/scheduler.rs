//! One-shot deferred actions
//!
//! The notifier defers exactly one thing, the post-login navigation. Deferred
//! tasks cannot be cancelled; if the runtime shuts down first, they never run.

use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Deferred work handed to a [`Scheduler`]
pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once after a delay
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: DeferredTask);
}

/// [`Scheduler`] backed by tokio timers
///
/// Must be used from within a tokio runtime. Spawned timers are tracked so a
/// short-lived process can wait for them with [`TokioScheduler::wait_idle`].
#[derive(Default)]
pub struct TokioScheduler {
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers spawned and not yet awaited through `wait_idle`
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
            .lock()
            .map(|pending| pending.iter().filter(|h| !h.is_finished()).count())
            .unwrap_or(0)
    }

    /// Wait until every task scheduled so far has run
    pub async fn wait_idle(&self) {
        let handles = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };
        for handle in handles {
            if let Err(e) = handle.await {
                log::error!("Deferred task failed: {e}");
            }
        }
    }
}

impl Scheduler for TokioScheduler {
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    fn schedule(&self, delay: Duration, task: DeferredTask) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        match self.pending.lock() {
            Ok(mut pending) => {
                pending.retain(|h| !h.is_finished());
                pending.push(handle);
            }
            Err(_) => log::warn!("Scheduler bookkeeping poisoned; timer left untracked"),
        }
    }
}
