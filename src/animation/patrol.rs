use glam::Vec3;

use crate::animation::command::{CommandFactory, LerpCommand, SampleCommand, TimedCommand};
use crate::animation::track::Track;
use crate::errors::Result;
use crate::path::{DurationSpec, PatrolOptions, PatrolPlan};

/// Sampled state of a patrolling actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Facing in degrees, unbounded.
    pub heading: f32,
}

/// Animation state of one patrolling actor: a position track and a heading
/// track, looping independently.
///
/// The tracks are owned here and nowhere else. Dropping the animation (or
/// calling [`stop`](Self::stop)) releases them immediately.
#[derive(Debug)]
pub struct PatrolAnimation<P, R> {
    position: Track<P>,
    heading: Track<R>,
}

/// Patrol built from [`LerpCommand`]s, sampled without a host engine.
pub type Patrol = PatrolAnimation<LerpCommand<Vec3>, LerpCommand<f32>>;

impl<P: TimedCommand, R: TimedCommand> PatrolAnimation<P, R> {
    /// Builds both tracks from a plan using the host's command factory.
    pub fn from_plan<F>(plan: &PatrolPlan, factory: &mut F) -> Result<Self>
    where
        F: CommandFactory<Position = P, Rotation = R>,
    {
        let position = Track::from_entries(&plan.position, |d, s, e| factory.position(d, s, e))?;
        let heading = Track::from_entries(&plan.heading, |d, s, e| factory.rotation(d, s, e))?;

        log::debug!(
            "Patrol started: {} position commands, {} heading commands, {:.2}s loop",
            position.len(),
            heading.len(),
            position.loop_duration()
        );

        Ok(Self { position, heading })
    }

    /// Plans a waypoint loop and builds its tracks in one step.
    pub fn new<F>(
        waypoints: &[Vec3],
        durations: Option<DurationSpec>,
        options: &PatrolOptions,
        factory: &mut F,
    ) -> Result<Self>
    where
        F: CommandFactory<Position = P, Rotation = R>,
    {
        let plan = PatrolPlan::build(waypoints, durations, options)?;
        Self::from_plan(&plan, factory)
    }

    /// Advances both tracks by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.position.advance(dt);
        self.heading.advance(dt);
    }

    #[must_use]
    pub fn position_track(&self) -> &Track<P> {
        &self.position
    }

    #[must_use]
    pub fn heading_track(&self) -> &Track<R> {
        &self.heading
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.position.is_playing() && self.heading.is_playing()
    }

    pub fn pause(&mut self) {
        self.position.stop();
        self.heading.stop();
    }

    pub fn resume(&mut self) {
        self.position.resume();
        self.heading.resume();
    }

    /// Stops both tracks and releases them.
    pub fn stop(mut self) {
        self.pause();
    }
}

impl<P, R> PatrolAnimation<P, R>
where
    P: SampleCommand<Value = Vec3>,
    R: SampleCommand<Value = f32>,
{
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position.sample(),
            heading: self.heading.sample(),
        }
    }
}

impl<P, R> Drop for PatrolAnimation<P, R> {
    fn drop(&mut self) {
        log::debug!(
            "Patrol released: {} position commands, {} heading commands",
            self.position.len(),
            self.heading.len()
        );
    }
}
