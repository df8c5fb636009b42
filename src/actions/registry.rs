//! Fan-out of "action performed" notifications to observing components.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::error::panic::panic_message;
use crate::models::ActionContext;
use crate::traits::ActionObserver;

/// Handle for removing a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Outcome of notifying observers about one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Observers whose callback returned normally
    pub notified: usize,
    /// Identifiers of observers that panicked
    pub failed: Vec<String>,
}

impl NotifyReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

struct Registration {
    id: ObserverId,
    observer: Weak<dyn ActionObserver>,
}

/// The action observers of one view, in registration order.
///
/// The action-dispatch mechanism calls
/// [`notify_action_performed`](Self::notify_action_performed) after it runs an
/// action. Every live observer is told once, whichever component triggered the
/// action. A panicking observer is logged and skipped; the rest are still
/// notified.
#[derive(Default)]
pub struct ActionObserverRegistry {
    observers: RwLock<Vec<Registration>>,
    next_id: AtomicU64,
}

impl ActionObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Only a weak reference is kept.
    pub fn register<O>(&self, observer: &Arc<O>) -> ObserverId
    where
        O: ActionObserver + 'static,
    {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let weak = Arc::downgrade(observer);
        let weak: Weak<dyn ActionObserver> = weak;
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Registration { id, observer: weak });
        tracing::debug!(observer = observer.identifier(), "Registered action observer");
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unregister(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|registration| registration.id != id);
        observers.len() != before
    }

    /// Number of registered observers that are still alive.
    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|registration| registration.observer.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tell every observer that an action was performed.
    pub fn notify_action_performed(&self, context: &ActionContext) -> NotifyReport {
        let (live, dead) = {
            let observers = self.observers.read().unwrap_or_else(PoisonError::into_inner);
            let live: Vec<Arc<dyn ActionObserver>> = observers
                .iter()
                .filter_map(|registration| registration.observer.upgrade())
                .collect();
            let dead = observers.len() - live.len();
            (live, dead)
        };

        if dead > 0 {
            self.observers
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|registration| registration.observer.strong_count() > 0);
        }

        let mut report = NotifyReport::default();
        for observer in live {
            let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
                observer.action_performed(context)
            }));
            match result {
                Ok(()) => report.notified += 1,
                Err(payload) => {
                    tracing::error!(
                        observer = observer.identifier(),
                        action = %context.action,
                        panic = %panic_message(payload.as_ref()),
                        "Action observer panicked"
                    );
                    report.failed.push(observer.identifier().to_string());
                }
            }
        }

        tracing::debug!(
            action = %context.action,
            view_uri = %context.view_uri,
            notified = report.notified,
            failed = report.failed.len(),
            "Notified action observers"
        );
        report
    }
}

impl std::fmt::Debug for ActionObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}
