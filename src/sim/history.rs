use std::{collections::VecDeque, hash::Hasher};

use metrohash::MetroHash64;

use crate::{Cell, Grid};

pub const DEFAULT_CAPACITY: usize = 16;

/// hashes the dimensions and cell states of a grid.
pub fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = MetroHash64::new();
    hasher.write_usize(grid.width());
    hasher.write_usize(grid.height());
    for row in grid.rows() {
        for cell in row {
            hasher.write_u8(match cell {
                Cell::Alive => 1,
                Cell::Dead => 0,
            });
        }
    }
    hasher.finish()
}

/// Sliding window over the fingerprints of the latest generations.
#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    recent: VecDeque<u64>,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            capacity,
            recent: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a new generation and returns its period if it repeats one in the window.
    pub fn record(&mut self, fingerprint: u64) -> Option<usize> {
        let period = self
            .recent
            .iter()
            .rev()
            .position(|&seen| seen == fingerprint)
            .map(|index| index + 1);

        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(fingerprint);
        period
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
