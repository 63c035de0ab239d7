//! Frame timing.

use std::time::Instant;

/// Measures the time between frames and since start.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    delta: f32,
    total: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock whose start and last frame are `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self { start: now, last_frame: now, delta: 0.0, total: 0.0 }
    }

    /// Advance to the current instant. Returns the delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. An instant earlier than the last frame gives a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.delta = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.total = now.saturating_duration_since(self.start).as_secs_f32();
        self.last_frame = self.last_frame.max(now);
        self.delta
    }

    /// Seconds between the last two ticks.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds from start to the last tick.
    pub fn total(&self) -> f32 {
        self.total
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
