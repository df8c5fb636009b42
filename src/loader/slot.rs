//! Weak delegate slot.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::traits::ViewModelLoaderDelegate;

/// Holds an optional, non-owning reference to a loader's delegate.
///
/// The owner attaches and detaches explicitly; a delegate that was dropped
/// without detaching simply stops receiving callbacks.
#[derive(Default)]
pub struct DelegateSlot {
    delegate: RwLock<Option<Weak<dyn ViewModelLoaderDelegate>>>,
}

impl DelegateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a delegate, replacing any previous one.
    pub fn attach<D>(&self, delegate: &Arc<D>)
    where
        D: ViewModelLoaderDelegate + 'static,
    {
        let weak = Arc::downgrade(delegate);
        let weak: Weak<dyn ViewModelLoaderDelegate> = weak;
        *self.delegate.write().unwrap_or_else(PoisonError::into_inner) = Some(weak);
    }

    /// Remove the delegate. Results that arrive afterwards are dropped.
    pub fn detach(&self) {
        *self.delegate.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// True when a live delegate is attached.
    pub fn is_attached(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Take a strong reference to the current delegate for one callback.
    pub fn snapshot(&self) -> Option<Arc<dyn ViewModelLoaderDelegate>> {
        self.delegate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }
}

impl std::fmt::Debug for DelegateSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegateSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}
