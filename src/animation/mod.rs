//! Animation Module
//!
//! Turns a [`PatrolPlan`](crate::path::PatrolPlan) into looping tracks of
//! timed commands.
//!
//! - [`command`]: the command traits, the host factory seam and the built-in
//!   linear interpolation commands
//! - [`track`]: the looping command sequence with its cursor
//! - [`patrol`]: per-actor ownership of the position and heading tracks

pub mod command;
pub mod patrol;
pub mod track;
pub mod values;

pub use command::{CommandFactory, LerpCommand, LerpFactory, SampleCommand, TimedCommand, TimedEntry};
pub use patrol::{Patrol, PatrolAnimation, Pose};
pub use track::Track;
pub use values::Interpolatable;
