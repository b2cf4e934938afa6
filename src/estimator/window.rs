//! Bounded FIFO of recent displacement magnitudes

use std::collections::VecDeque;

/// Sliding window over the most recent pointer speed samples
///
/// Length never exceeds the cap passed to [`SampleWindow::push`]; the oldest
/// samples are evicted first when a new one arrives and the window is full.
#[derive(Debug, Clone, Default)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
}

impl SampleWindow {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(32),
        }
    }

    /// Append a sample, evicting the oldest entries past `cap`
    pub fn push(&mut self, magnitude: f64, cap: usize) {
        self.samples.push_back(magnitude);
        while self.samples.len() > cap {
            self.samples.pop_front();
        }
    }

    /// Mean of the current contents, or 0 when empty
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
