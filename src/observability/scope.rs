//! ObservationScope for start/complete logging of startup phases
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` with elapsed time on `complete()`
//! - Logs `{name}_FAILED` on `fail()`
//! - Logs `{name}_INCOMPLETE` if dropped without either

use std::time::{Duration, Instant};

use tracing::{error, info, warn};

/// A scope that logs begin and end events for one phase
///
/// ```ignore
/// let scope = ObservationScope::new("CATALOG_LOAD");
/// // ... do work ...
/// scope.complete();
/// ```
pub struct ObservationScope {
    name: &'static str,
    started: Instant,
    finished: bool,
}

impl ObservationScope {
    /// Create a new observation scope
    pub fn new(name: &'static str) -> Self {
        info!(phase = name, "{}_BEGIN", name);
        Self {
            name,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Time since the scope was opened
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Mark the scope as successfully completed
    pub fn complete(mut self) {
        self.finished = true;
        info!(
            phase = self.name,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "{}_COMPLETE",
            self.name
        );
    }

    /// Mark the scope as failed with a reason
    pub fn fail(mut self, reason: &str) {
        self.finished = true;
        error!(
            phase = self.name,
            elapsed_ms = self.elapsed().as_millis() as u64,
            %reason,
            "{}_FAILED",
            self.name
        );
    }

    /// Check if the scope has been completed or failed
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            warn!(phase = self.name, "{}_INCOMPLETE", self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_complete() {
        let scope = ObservationScope::new("TEST");
        assert!(!scope.is_finished());
        scope.complete();
    }

    #[test]
    fn test_scope_fail() {
        let scope = ObservationScope::new("TEST");
        scope.fail("boom");
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let scope = ObservationScope::new("TEST");
        let first = scope.elapsed();
        let second = scope.elapsed();
        assert!(second >= first);
        scope.complete();
    }
}
