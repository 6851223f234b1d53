//! EventDispatcher — synchronous event dispatch, free when empty.

use std::sync::Arc;

use super::handler::CascadeEventHandler;
use super::types::*;

/// Synchronous dispatcher over a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn CascadeEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn CascadeEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit to every handler. A panicking handler is logged and skipped;
    /// the remaining handlers still receive the event.
    fn emit<F: Fn(&dyn CascadeEventHandler)>(&self, event_name: &str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "cascade event handler panicked");
            }
        }
    }

    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit("run_started", |h| h.on_run_started(event));
    }

    pub fn emit_round_completed(&self, event: &RoundCompletedEvent) {
        self.emit("round_completed", |h| h.on_round_completed(event));
    }

    pub fn emit_run_completed(&self, event: &RunCompletedEvent) {
        self.emit("run_completed", |h| h.on_run_completed(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
