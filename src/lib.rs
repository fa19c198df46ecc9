//! # Patrol
//!
//! Looping waypoint patrols for animated characters.
//!
//! A patrol moves an actor linearly around a closed loop of waypoints while a
//! second, independent track rotates its facing. At each waypoint the heading
//! track inserts a short turn so the actor never rotates while walking
//! straight.
//!
//! The rendering engine stays outside the crate. It supplies a
//! [`CommandFactory`](animation::CommandFactory) for position and rotation
//! commands and drives time through its frame loop; the crate supplies the
//! looping [`Track`](animation::Track)s.
//!
//! - [`path`]: waypoint loop, durations, headings, the [`PatrolPlan`]
//! - [`animation`]: commands, tracks, per-actor [`PatrolAnimation`]
//! - [`tasks`]: per-frame task driver
//! - [`stage`], [`app`]: a minimal headless host

pub mod animation;
pub mod app;
pub mod config;
pub mod errors;
pub mod path;
pub mod stage;
pub mod tasks;
pub mod utils;

pub use animation::{CommandFactory, LerpFactory, Patrol, PatrolAnimation, Pose, Track};
pub use app::App;
pub use config::{AppConfig, PatrolConfig, WindowConfig};
pub use errors::{PatrolError, Result};
pub use path::{DurationSpec, PatrolOptions, PatrolPlan, Validation};
pub use stage::{ActorHandle, Stage, Transform};
pub use tasks::{FrameScheduler, TaskHandle, TaskManager, TaskMode};
pub use utils::time::{FrameTime, Timer};
