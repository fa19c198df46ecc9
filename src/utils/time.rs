use std::time::{Duration, Instant};

/// Timing handed to per-frame tasks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Number of frames ticked so far, including this one.
    pub frame: u64,
}

/// Timer for tracking frame timing and elapsed time.
///
/// Driven either by the wall clock ([`tick`](Self::tick)) or by fixed steps
/// ([`advance`](Self::advance)) for headless and deterministic runs.
pub struct Timer {
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Updates the timer from the wall clock.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed += self.delta;
        self.last_update = now;
        self.frame_count += 1;
    }

    /// Updates the timer by a fixed step, ignoring the wall clock.
    ///
    /// Negative steps are treated as zero.
    pub fn advance(&mut self, dt: f32) {
        self.delta = Duration::from_secs_f32(dt.max(0.0));
        self.elapsed += self.delta;
        self.last_update = Instant::now();
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            elapsed: self.elapsed.as_secs_f32(),
            delta: self.delta.as_secs_f32(),
            frame: self.frame_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_steps_accumulate() {
        let mut timer = Timer::new();
        timer.advance(0.5);
        timer.advance(0.25);
        let time = timer.frame_time();
        assert!((time.elapsed - 0.75).abs() < 1e-6);
        assert!((time.delta - 0.25).abs() < 1e-6);
        assert_eq!(time.frame, 2);
    }
}
