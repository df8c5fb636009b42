//! Execution contexts for loader callbacks.

use tokio::runtime::Handle;

/// A unit of work scheduled on a callback executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Where a loader runs its delegate callbacks.
///
/// The loader never calls its delegate directly; it hands a [`Job`] to the
/// executor chosen by the loader's owner.
pub trait CallbackExecutor: Send + Sync {
    fn execute(&self, job: Job);
}

/// Runs callbacks on the task that completed the load.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateExecutor;

impl CallbackExecutor for ImmediateExecutor {
    fn execute(&self, job: Job) {
        job();
    }
}

/// Runs each callback as its own task on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor for the runtime the caller is running on, if any.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl CallbackExecutor for TokioExecutor {
    fn execute(&self, job: Job) {
        let mut pending = PendingJob(Some(job));
        self.handle.spawn(async move { pending.run() });
    }
}

/// A spawned job that runs inline if its task is dropped before polling,
/// as happens while the runtime shuts down.
struct PendingJob(Option<Job>);

impl PendingJob {
    fn run(&mut self) {
        if let Some(job) = self.0.take() {
            job();
        }
    }
}

impl Drop for PendingJob {
    fn drop(&mut self) {
        if self.0.is_some() {
            tracing::debug!("Callback task dropped unpolled, running inline");
            self.run();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_immediate_executor_runs_inline() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        ImmediateExecutor.execute(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_tokio_executor_spawns() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let executor = TokioExecutor::current().expect("inside a runtime");
        executor.execute(Box::new(move || {
            let _ = tx.send(42);
        }));
        assert_eq!(rx.await.unwrap(), 42);
    }

    #[test]
    fn test_tokio_executor_runs_job_when_runtime_drops() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        TokioExecutor::new(runtime.handle().clone()).execute(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        drop(runtime);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tokio_executor_current_outside_runtime() {
        assert!(TokioExecutor::current().is_none());
    }
}
