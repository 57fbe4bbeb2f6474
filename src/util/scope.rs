//! Page-scoped request lifetime: an alive flag plus an abort handle.
//!
//! A page creates one scope, hands clones to its async work, and cancels
//! it from `on_cleanup`. Work checks `is_alive` before writing page
//! signals; requests wired to the scope's signal are aborted outright.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use send_wrapper::SendWrapper;

/// Shared liveness handle for one page instance. Clones share state.
#[derive(Clone)]
pub struct RequestScope {
    alive: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    controller: Option<SendWrapper<web_sys::AbortController>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            #[cfg(feature = "hydrate")]
            controller: web_sys::AbortController::new().ok().map(SendWrapper::new),
        }
    }

    /// False once the owning page has been torn down.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the page gone and abort any request wired to the signal.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
        #[cfg(feature = "hydrate")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    /// Signal for requests that should die with the page.
    #[cfg(feature = "hydrate")]
    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}
