use glam::Vec3;

use crate::animation::values::Interpolatable;

/// A `(start, end, duration)` triple: the pure-data description of one
/// command before a factory turns it into something schedulable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEntry<T> {
    pub start: T,
    pub end: T,
    pub duration: f32,
}

impl<T> TimedEntry<T> {
    #[must_use]
    pub fn new(start: T, end: T, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }
}

/// Anything a [`Track`](crate::animation::Track) can sequence.
///
/// Host engines implement this for their own interval objects; the track only
/// needs to know how long each one runs.
pub trait TimedCommand {
    /// Length in seconds. Zero or negative lengths complete instantly.
    fn duration(&self) -> f32;
}

/// A command that can report its own value part-way through.
pub trait SampleCommand: TimedCommand {
    type Value;

    /// Value at `local_time` seconds after the command started.
    fn sample(&self, local_time: f32) -> Self::Value;
}

/// Creates the commands for a patrol.
///
/// This is the seam to the rendering engine: one constructor for position
/// motion and one for heading rotation.
pub trait CommandFactory {
    type Position: TimedCommand;
    type Rotation: TimedCommand;

    fn position(&mut self, duration: f32, start: Vec3, end: Vec3) -> Self::Position;

    fn rotation(&mut self, duration: f32, start: f32, end: f32) -> Self::Rotation;
}

/// Linear interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LerpCommand<T: Interpolatable> {
    pub start: T,
    pub end: T,
    pub duration: f32,
}

impl<T: Interpolatable> LerpCommand<T> {
    #[must_use]
    pub fn new(duration: f32, start: T, end: T) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }
}

impl<T: Interpolatable> TimedCommand for LerpCommand<T> {
    fn duration(&self) -> f32 {
        self.duration
    }
}

impl<T: Interpolatable> SampleCommand for LerpCommand<T> {
    type Value = T;

    fn sample(&self, local_time: f32) -> T {
        // Instantaneous commands sit at their end value.
        let t = if self.duration > 1e-6 {
            (local_time / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        T::interpolate_linear(self.start, self.end, t)
    }
}

/// Factory producing [`LerpCommand`]s, for hosts without their own interval
/// types and for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LerpFactory;

impl CommandFactory for LerpFactory {
    type Position = LerpCommand<Vec3>;
    type Rotation = LerpCommand<f32>;

    fn position(&mut self, duration: f32, start: Vec3, end: Vec3) -> Self::Position {
        LerpCommand::new(duration, start, end)
    }

    fn rotation(&mut self, duration: f32, start: f32, end: f32) -> Self::Rotation {
        LerpCommand::new(duration, start, end)
    }
}
