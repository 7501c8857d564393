//! Cross-configuration total-time accumulator

use super::bench_runner::Direction;
use std::collections::HashMap;
use std::sync::Mutex;

/// Running per-codec total time, shared by concurrently running
/// configurations. Updates only ever add.
#[derive(Debug, Default)]
pub struct TotalTimes {
    inner: Mutex<HashMap<(Direction, String), f64>>,
}

impl TotalTimes {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta_ms` to the total of `codec`
    pub fn add(&self, direction: Direction, codec: &str, delta_ms: f64) {
        let mut totals = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *totals.entry((direction, codec.to_string())).or_insert(0.0) += delta_ms;
    }

    /// Current total of `codec`, if it has recorded anything
    pub fn get(&self, direction: Direction, codec: &str) -> Option<f64> {
        let totals = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        totals.get(&(direction, codec.to_string())).copied()
    }

    /// Check whether `codec` has recorded anything
    pub fn contains(&self, direction: Direction, codec: &str) -> bool {
        self.get(direction, codec).is_some()
    }
}
