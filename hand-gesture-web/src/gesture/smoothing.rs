//! Moving-average smoothing window
//!
//! Keeps the last N raw samples; the smoothed value is their mean.
//! Used for palm positions and pinch distances to kill per-frame detector jitter.

use std::collections::VecDeque;
use std::iter::Sum;
use std::ops::Div;

/// Fixed-capacity FIFO window with a running mean
pub struct SmoothingWindow<T> {
    /// Recent raw samples, oldest first
    samples: VecDeque<T>,
    /// Max samples kept (>= 1)
    capacity: usize,
}

impl<T> SmoothingWindow<T>
where
    T: Copy + Sum<T> + Div<f32, Output = T>,
{
    /// A capacity of 0 is treated as 1 (no smoothing)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evict the oldest past capacity, return the new mean
    pub fn push(&mut self, value: T) -> T {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        self.mean_of_samples()
    }

    /// Current mean, `None` while empty
    pub fn mean(&self) -> Option<T> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.mean_of_samples())
        }
    }

    fn mean_of_samples(&self) -> T {
        let sum: T = self.samples.iter().copied().sum();
        sum / self.samples.len() as f32
    }

    /// Drop all samples (role re-acquired, session reset)
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
