//! Application Shell
//!
//! [`App`] ties the pieces together for a host frame loop: a [`Stage`], the
//! per-frame [`TaskManager`] that acts on it, and a frame clock. Patrols are
//! advanced by a continuous task registered at construction, so every
//! animated attribute moves through the same scheduler as user tasks.
//!
//! # Example
//!
//! ```rust,ignore
//! use patrol::{App, PatrolConfig, TaskMode};
//!
//! let mut app = App::default();
//! app.spawn_patrol(&PatrolConfig::new("panda", &[Vec3::NEG_Y, Vec3::Y]).with_durations(3.0))?;
//! app.add_task("dolly", TaskMode::Continuous, patrol::app::camera_dolly_task);
//!
//! loop {
//!     app.tick();
//!     // ... render app.stage() ...
//! }
//! ```

use glam::Vec3;

use crate::animation::{LerpFactory, Patrol};
use crate::config::{AppConfig, PatrolConfig, WindowConfig};
use crate::errors::Result;
use crate::stage::{ActorHandle, Stage};
use crate::tasks::{FrameScheduler, TaskHandle, TaskManager, TaskMode};
use crate::utils::time::{FrameTime, Timer};

/// Name of the built-in task that advances every patrol.
pub const PATROL_TASK: &str = "advance_patrols";

/// Moves the camera back along -Y and up over time.
pub fn camera_dolly_task(stage: &mut Stage, time: &FrameTime) {
    stage.camera.position = Vec3::new(0.0, -time.elapsed, 0.1 * time.elapsed);
}

fn advance_patrols_task(stage: &mut Stage, time: &FrameTime) {
    stage.update_patrols(time.delta);
}

pub struct App {
    window: WindowConfig,
    stage: Stage,
    tasks: TaskManager<Stage>,
    timer: Timer,
}

impl Default for App {
    fn default() -> Self {
        Self::new(WindowConfig::default())
    }
}

impl App {
    #[must_use]
    pub fn new(window: WindowConfig) -> Self {
        let mut tasks = TaskManager::new();
        tasks.add(PATROL_TASK, TaskMode::Continuous, advance_patrols_task);
        Self {
            window,
            stage: Stage::new(),
            tasks,
            timer: Timer::new(),
        }
    }

    /// Builds an app with every patrol in the config spawned.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut app = Self::new(config.window.to_window_config()?);
        for patrol in &config.patrols {
            app.spawn_patrol(patrol)?;
        }
        if config.camera_dolly {
            app.add_task("camera_dolly", TaskMode::Continuous, camera_dolly_task);
        }
        log::info!(
            "App '{}' ready: {} actor(s), {} task(s)",
            app.window.title,
            app.stage.len(),
            app.tasks.len()
        );
        Ok(app)
    }

    #[must_use]
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskManager<Stage> {
        &self.tasks
    }

    #[must_use]
    pub fn time(&self) -> FrameTime {
        self.timer.frame_time()
    }

    /// Adds a static actor to the stage.
    pub fn add_renderable(&mut self, name: impl Into<String>, position: Vec3) -> ActorHandle {
        self.stage.add_actor(name, position)
    }

    pub fn add_task<F>(&mut self, name: &str, mode: TaskMode, callback: F) -> TaskHandle
    where
        F: FnMut(&mut Stage, &FrameTime) + 'static,
    {
        self.tasks.add(name, mode, callback)
    }

    pub fn remove_task(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(handle)
    }

    /// Adds an actor that walks the configured loop.
    pub fn spawn_patrol(&mut self, config: &PatrolConfig) -> Result<ActorHandle> {
        let plan = config.build_plan()?;
        let patrol = Patrol::from_plan(&plan, &mut LerpFactory)?;
        let handle = self.stage.add_actor(config.name.clone(), Vec3::ZERO);
        self.stage.attach_patrol(handle, patrol);
        log::info!(
            "Spawned patrol '{}' over {} waypoint(s)",
            config.name,
            config.waypoints.len()
        );
        Ok(handle)
    }

    /// Runs one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.timer.advance(dt);
        self.run_tasks();
    }

    /// Runs one frame timed by the wall clock.
    pub fn tick(&mut self) {
        self.timer.tick();
        self.run_tasks();
    }

    pub fn run_frames(&mut self, frames: u64, dt: f32) {
        for _ in 0..frames {
            self.step(dt);
        }
    }

    fn run_tasks(&mut self) {
        let time = self.timer.frame_time();
        self.tasks.run_frame(&mut self.stage, &time);
    }
}
