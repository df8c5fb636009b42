//! Recording loader delegate for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use tokio::sync::Notify;

use crate::error::LoadError;
use crate::loader::ViewModelLoader;
use crate::models::ViewModel;
use crate::traits::ViewModelLoaderDelegate;

/// A delegate callback as seen by [`RecordingDelegate`].
#[derive(Debug, Clone)]
pub enum DelegateEvent {
    Loaded(Arc<ViewModel>),
    Failed(LoadError),
}

impl DelegateEvent {
    pub fn view_model(&self) -> Option<&Arc<ViewModel>> {
        match self {
            DelegateEvent::Loaded(view_model) => Some(view_model),
            DelegateEvent::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            DelegateEvent::Loaded(_) => None,
            DelegateEvent::Failed(error) => Some(error),
        }
    }
}

/// Delegate that records every callback along with the calling thread.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    events: Mutex<Vec<(DelegateEvent, ThreadId)>>,
    notify: Notify,
    should_panic: AtomicBool,
    reloads_remaining: AtomicUsize,
}

impl RecordingDelegate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Configure whether callbacks panic after recording.
    pub fn set_should_panic(&self, should_panic: bool) {
        self.should_panic.store(should_panic, Ordering::SeqCst);
    }

    /// Start another load from inside the next `count` callbacks.
    pub fn reload_from_callback(&self, count: usize) {
        self.reloads_remaining.store(count, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(event, _)| event.clone())
            .collect()
    }

    /// Threads the callbacks ran on, in order.
    pub fn threads(&self) -> Vec<ThreadId> {
        self.events.lock().unwrap().iter().map(|(_, id)| *id).collect()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Wait until at least `count` callbacks have been recorded.
    pub async fn wait_for(&self, count: usize) -> Vec<DelegateEvent> {
        loop {
            let notified = self.notify.notified();
            if self.count() >= count {
                return self.events();
            }
            notified.await;
        }
    }

    fn record(&self, loader: &ViewModelLoader, event: DelegateEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event, thread::current().id()));
        self.notify.notify_waiters();

        let reload = self
            .reloads_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if reload {
            loader.load_view_model();
        }

        if self.should_panic.load(Ordering::SeqCst) {
            panic!("mock delegate panic");
        }
    }
}

impl ViewModelLoaderDelegate for RecordingDelegate {
    fn did_load_view_model(&self, loader: &ViewModelLoader, view_model: Arc<ViewModel>) {
        self.record(loader, DelegateEvent::Loaded(view_model));
    }

    fn did_fail_loading(&self, loader: &ViewModelLoader, error: &LoadError) {
        self.record(loader, DelegateEvent::Failed(error.clone()));
    }
}
