//! Pointer velocity estimation for swipe release decisions.
//!
//! Uses the impulse strategy from Jetpack Compose's `VelocityTracker1D`:
//! velocity is derived from the kinetic energy the pointer imparted across
//! the recent samples, which is robust against single noisy samples.

use crate::geometry::Point;
use web_time::Instant;

const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest one) are ignored.
const HORIZON_MS: i64 = 100;

/// A gap larger than this between samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// Single-axis velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    head: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            head: 0,
        }
    }

    /// Records a sample. Samples older than the newest one are dropped.
    pub fn add_data_point(&mut self, time_ms: i64, value: f32) {
        if let Some(newest) = self.samples[self.head] {
            if time_ms < newest.time_ms {
                log::debug!(
                    "dropping out-of-order velocity sample at {time_ms}ms (newest {}ms)",
                    newest.time_ms
                );
                return;
            }
        }
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.samples[self.head] = Some(Sample { time_ms, value });
    }

    /// Velocity in units per second, or 0.0 with fewer than two recent samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.head] else {
            return 0.0;
        };

        // Newest first; times are stored as negative ages.
        let mut values = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.head;

        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            if age > HORIZON_MS || age > ASSUME_STOPPED_MS {
                break;
            }
            values[count] = sample.value;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            cursor = (cursor + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&values[..count], &times[..count]) * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.head = 0;
    }
}

/// `values`/`times` are ordered newest first.
fn impulse_velocity(values: &[f32], times: &[f32]) -> f32 {
    let oldest = values.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let dt = times[i] - times[i - 1];
        if dt == 0.0 {
            continue;
        }
        let v_curr = (values[i] - values[i - 1]) / dt;
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// E = 0.5 * v^2 with unit mass.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Signed velocity on both axes, in pixels per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };
}

/// Two-axis tracker fed with pointer positions and event timestamps.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    origin: Option<Instant>,
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, timestamp: Instant, position: Point) {
        let origin = *self.origin.get_or_insert(timestamp);
        let time_ms = timestamp.saturating_duration_since(origin).as_millis() as i64;
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    pub fn velocity(&self) -> Velocity {
        Velocity {
            x: self.x.calculate_velocity(),
            y: self.y.calculate_velocity(),
        }
    }

    pub fn reset(&mut self) {
        self.origin = None;
        self.x.reset();
        self.y.reset();
    }
}
