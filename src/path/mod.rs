//! Waypoint Path Module
//!
//! Pure computation that turns a closed loop of waypoints into the two
//! schedules a patrolling actor needs:
//!
//! - [`durations`]: normalizes a scalar or per-segment duration list
//! - [`waypoints`]: closes the waypoint list into cyclic segments
//! - [`heading`]: per-segment facing and whole-turn smoothing
//! - [`split`]: hold/turn split of each segment's duration
//! - [`plan`]: assembles the position and heading schedules
//!
//! Nothing here touches time or the scene; [`crate::animation`] turns a
//! [`PatrolPlan`] into looping tracks.

pub mod durations;
pub mod heading;
pub mod plan;
pub mod split;
pub mod waypoints;

pub use durations::{DurationSpec, Durations, normalize};
pub use heading::{DEFAULT_HEADING_OFFSET, raw_headings, segment_heading, smooth_headings};
pub use plan::{PatrolOptions, PatrolPlan, Validation};
pub use split::{DEFAULT_TURN_FRACTION, split_durations};
pub use waypoints::{Segment, build_loop, cyclic_pairs};
