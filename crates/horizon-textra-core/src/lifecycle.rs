//! Application lifecycle hooks.
//!
//! Long-lived resource owners (the font registry, atlas caches) implement
//! [`LifecycleListener`] and register with the application's [`Lifecycle`].
//! When the application shuts down, [`Lifecycle::shutdown`] calls
//! [`LifecycleListener::dispose`] on every listener in reverse registration
//! order, so resources created later are released first.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_textra_core::{Lifecycle, LifecycleListener};
//!
//! struct Cache;
//!
//! impl LifecycleListener for Cache {
//!     fn name(&self) -> &str { "cache" }
//!     fn dispose(&self) {}
//! }
//!
//! let lifecycle = Lifecycle::new();
//! lifecycle.register(Arc::new(Cache)).unwrap();
//! lifecycle.shutdown();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::{CoreError, Result};
use crate::logging::{span_names, targets};

/// A participant in the application lifecycle.
///
/// Only [`dispose`](Self::dispose) is required; pause and resume default to
/// no-ops.
pub trait LifecycleListener: Send + Sync {
    /// A short name used in logs and for duplicate detection.
    fn name(&self) -> &str;

    /// Called when the application is paused (e.g. minimised on mobile).
    fn pause(&self) {}

    /// Called when the application resumes after a pause.
    fn resume(&self) {}

    /// Release every resource held by this listener.
    ///
    /// Must tolerate being called more than once.
    fn dispose(&self);
}

/// The set of lifecycle listeners for one application.
#[derive(Default)]
pub struct Lifecycle {
    listeners: Mutex<Vec<Arc<dyn LifecycleListener>>>,
    shut_down: AtomicBool,
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("listeners", &self.listener_count())
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}

impl Lifecycle {
    /// Create an empty lifecycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    ///
    /// # Errors
    ///
    /// Fails if [`shutdown`](Self::shutdown) already ran or a listener with the
    /// same name is registered.
    pub fn register(&self, listener: Arc<dyn LifecycleListener>) -> Result<()> {
        if self.is_shut_down() {
            return Err(CoreError::LifecycleShutDown);
        }
        let mut listeners = self.listeners.lock();
        if listeners.iter().any(|l| l.name() == listener.name()) {
            return Err(CoreError::DuplicateListener(listener.name().to_string()));
        }
        tracing::debug!(target: targets::LIFECYCLE, name = listener.name(), "listener registered");
        listeners.push(listener);
        Ok(())
    }

    /// Remove a listener by name without disposing it.
    pub fn unregister(&self, name: &str) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|l| l.name() != name);
        before != listeners.len()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Whether [`shutdown`](Self::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    /// Forward a pause notification to every listener.
    pub fn pause(&self) {
        for listener in self.snapshot() {
            listener.pause();
        }
    }

    /// Forward a resume notification to every listener.
    pub fn resume(&self) {
        for listener in self.snapshot() {
            listener.resume();
        }
    }

    /// Dispose every listener, newest first, and refuse further registration.
    ///
    /// Calling this more than once is harmless.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return;
        }
        let _span = tracing::info_span!(span_names::SHUTDOWN).entered();
        let listeners: Vec<_> = self.listeners.lock().drain(..).collect();
        tracing::info!(target: targets::LIFECYCLE, count = listeners.len(), "shutting down");
        for listener in listeners.iter().rev() {
            tracing::debug!(target: targets::LIFECYCLE, name = listener.name(), "disposing");
            listener.dispose();
        }
    }

    fn snapshot(&self) -> Vec<Arc<dyn LifecycleListener>> {
        self.listeners.lock().clone()
    }
}
