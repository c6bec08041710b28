//! Blocking-Call Dispatcher
//!
//! Runs synchronous backend calls on tokio's blocking thread pool so the
//! async scheduler that awaits them is never stalled. The number of calls in
//! flight is bounded by a semaphore owned by the dispatcher, so several
//! providers sharing one dispatcher share one limit.
//!
//! There is no cancellation: a call that has been handed to a worker runs to
//! completion even if the awaiting future is dropped, and it keeps its permit
//! until then.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tracing::debug;

use mqo_domain::error::{Error, Result};

use crate::constants::DEFAULT_MAX_BLOCKING_WORKERS;

/// Bounded worker pool for blocking backend calls
///
/// ## Example
///
/// ```rust,no_run
/// use mqo_providers::BlockingDispatcher;
///
/// # async fn example() -> mqo_providers::Result<()> {
/// let dispatcher = BlockingDispatcher::new(4);
/// let sum = dispatcher.dispatch(|| Ok(2 + 2)).await?;
/// assert_eq!(sum, 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlockingDispatcher {
    permits: Arc<Semaphore>,
    max_workers: usize,
    runtime: Option<Handle>,
}

impl BlockingDispatcher {
    /// Create a dispatcher allowing at most `max_workers` concurrent calls.
    ///
    /// A limit of zero is raised to one.
    pub fn new(max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            permits: Arc::new(Semaphore::new(max_workers)),
            max_workers,
            runtime: None,
        }
    }

    /// Run blocking calls on the given runtime instead of the caller's
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Maximum number of calls in flight
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Number of calls that could start right now without waiting
    pub fn available_workers(&self) -> usize {
        self.permits.available_permits()
    }

    /// Run `task` on a blocking worker and wait for its result.
    ///
    /// Waits for a free permit first. A task that panics is reported as a
    /// backend error.
    pub async fn dispatch<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| Error::backend_with_source("Blocking dispatcher is closed", e))?;

        debug!(
            available = self.permits.available_permits(),
            max_workers = self.max_workers,
            "Dispatching blocking call"
        );

        let job = move || {
            let _permit = permit;
            task()
        };
        let handle = match &self.runtime {
            Some(runtime) => runtime.spawn_blocking(job),
            None => tokio::task::spawn_blocking(job),
        };

        handle
            .await
            .map_err(|e| Error::backend_with_source("Blocking worker failed", e))?
    }
}

impl Default for BlockingDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BLOCKING_WORKERS)
    }
}
