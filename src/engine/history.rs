//! Cycle history — remembers the last few board fingerprints

use crate::grid::Grid;
use std::collections::VecDeque;

/// Fixed-depth ring of grid fingerprints
#[derive(Debug, Clone)]
pub struct CycleHistory {
    depth: usize,
    seen: VecDeque<String>,
}

impl CycleHistory {
    pub fn new(depth: usize) -> Self {
        Self {
            depth: depth.max(1),
            seen: VecDeque::with_capacity(depth.max(1)),
        }
    }

    /// Remember `grid`; true if the same board was already in the ring
    pub fn record(&mut self, grid: &Grid) -> bool {
        let fingerprint = grid.fingerprint();
        if self.seen.contains(&fingerprint) {
            return true;
        }
        if self.seen.len() == self.depth {
            self.seen.pop_front();
        }
        self.seen.push_back(fingerprint);
        false
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
