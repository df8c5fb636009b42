//! A main-context dispatch queue.
//!
//! Loader completions may happen on any runtime worker. A [`DispatchQueue`]
//! lets an owner that runs its own loop (a UI thread, an event loop) receive
//! every delegate callback on that loop instead.
//!
//! ```ignore
//! let mut queue = DispatchQueue::new();
//! let loader = ViewModelLoader::builder(feature)
//!     .with_callback_executor(Arc::new(queue.handle()))
//!     .build()?;
//!
//! loop {
//!     queue.run_pending();
//!     // ... rest of the frame
//! }
//! ```

use tokio::sync::mpsc;

use super::executor::{CallbackExecutor, Job};

/// Receiving end of the queue; owned by the main context.
#[derive(Debug)]
pub struct DispatchQueue {
    sender: mpsc::UnboundedSender<Job>,
    receiver: mpsc::UnboundedReceiver<Job>,
}

/// Cloneable executor that enqueues jobs onto a [`DispatchQueue`].
#[derive(Debug, Clone)]
pub struct DispatchQueueHandle {
    sender: mpsc::UnboundedSender<Job>,
}

impl DispatchQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Executor handle to give to loaders.
    pub fn handle(&self) -> DispatchQueueHandle {
        DispatchQueueHandle {
            sender: self.sender.clone(),
        }
    }

    /// Run every job that is already queued. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait for the next job and run it.
    ///
    /// The queue keeps a sender of its own, so this waits until a job arrives.
    pub async fn run_next(&mut self) {
        if let Some(job) = self.receiver.recv().await {
            job();
        }
    }
}

impl Default for DispatchQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackExecutor for DispatchQueueHandle {
    fn execute(&self, job: Job) {
        if self.sender.send(job).is_err() {
            tracing::warn!("Dispatch queue closed, dropping callback");
        }
    }
}
