// simulation/history.rs
// Bounded concentration history for the chart collaborator.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One time-stamped sample of the concentrations. Immutable after creation.
/// `time` is the integration frame the sample was taken on; consumers must
/// not assume a fixed interval beyond "every Nth frame".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub time: usize,
    pub n2: f32,
    pub h2: f32,
    pub nh3: f32,
}

/// Sliding window of the most recent samples, oldest first. Pushing beyond
/// capacity evicts from the front (FIFO).
#[derive(Clone, Debug)]
pub struct History {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, point: HistoryPoint) {
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Contiguous copy for publication to the chart collaborator.
    pub fn to_vec(&self) -> Vec<HistoryPoint> {
        self.points.iter().copied().collect()
    }
}
