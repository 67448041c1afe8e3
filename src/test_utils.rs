// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and gesture fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use std::time::{Duration, Instant};

/// Monotonic clock for driving timestamped input in tests.
#[derive(Debug, Clone, Copy)]
pub struct TestClock {
    now: Instant,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward and returns the new instant.
    pub fn advance_ms(&mut self, millis: u64) -> Instant {
        self.now += Duration::from_millis(millis);
        self.now
    }
}
