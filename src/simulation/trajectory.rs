//! Bounded per-body trajectory history
//!
//! Each body keeps a fixed-capacity ring of recently drawn positions, oldest
//! first. The recorder refreshes `draw_position` and appends it after every
//! completed integration step

use std::collections::VecDeque;

use super::states::{NVec3, SolarSystem};

/// Samples a body keeps when the scenario does not say otherwise
pub const DEFAULT_MAX_HISTORY: usize = 5000;

/// Fixed-capacity history of draw positions, oldest first
///
/// Capacity is reserved up front and `record` evicts the oldest sample
/// before pushing when full, so the backing storage never reallocates and
/// the length never exceeds `max_history`
#[derive(Debug, Clone)]
pub struct Trajectory {
    samples: VecDeque<NVec3>,
    max_history: usize,
}

impl Trajectory {
    pub fn with_capacity(max_history: usize) -> Trajectory {
        Trajectory {
            samples: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Append a sample, evicting the oldest first when at capacity.
    /// A zero-capacity trajectory records nothing.
    pub(crate) fn record(&mut self, sample: NVec3) {
        if self.max_history == 0 {
            return;
        }
        if self.samples.len() == self.max_history {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest first
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&NVec3> {
        self.samples.back()
    }
}

impl Default for Trajectory {
    fn default() -> Trajectory {
        Trajectory::with_capacity(DEFAULT_MAX_HISTORY)
    }
}

/// Refresh every body's `draw_position` from its position and the system's
/// presentation scale, then append it to the body's history
pub(crate) fn record(sys: &mut SolarSystem) {
    let scale = sys.position_scale;
    for body in sys.bodies.iter_mut() {
        body.draw_position = body.position * scale;
        body.trajectory.record(body.draw_position);
    }
}
