use glam::Vec3;

use crate::animation::command::TimedEntry;
use crate::errors::{PatrolError, Result};
use crate::path::durations::{DurationSpec, Durations, normalize};
use crate::path::heading::{DEFAULT_HEADING_OFFSET, raw_headings, smooth_headings};
use crate::path::split::{DEFAULT_TURN_FRACTION, split_durations};
use crate::path::waypoints::{build_loop, cyclic_pairs, find_duplicate};

/// Segment duration used when none is supplied.
pub const DEFAULT_SEGMENT_DURATION: f32 = 1.0;

/// How strictly patrol input is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Degenerate segments and non-positive durations are accepted and
    /// produce deterministic, if odd, schedules.
    #[default]
    Lenient,
    /// Reject duplicate consecutive waypoints and non-positive durations.
    Strict,
}

/// Tuning knobs for turning a waypoint loop into a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolOptions {
    /// Fraction of each segment spent turning, in (0, 1).
    pub turn_fraction: f32,
    /// Asset-orientation offset added to every non-degenerate heading.
    pub heading_offset: f32,
    /// Duration applied to every segment when the caller gives none.
    pub default_duration: f32,
    pub validation: Validation,
}

impl Default for PatrolOptions {
    fn default() -> Self {
        Self {
            turn_fraction: DEFAULT_TURN_FRACTION,
            heading_offset: DEFAULT_HEADING_OFFSET,
            default_duration: DEFAULT_SEGMENT_DURATION,
            validation: Validation::Lenient,
        }
    }
}

/// Pure-data schedule for one patrolling actor: the position and heading
/// entries that a command factory turns into tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolPlan {
    pub position: Vec<TimedEntry<Vec3>>,
    pub heading: Vec<TimedEntry<f32>>,
}

impl PatrolPlan {
    /// Builds both schedules from a waypoint loop.
    ///
    /// The position schedule has one entry per segment lasting the segment's
    /// full duration. The heading schedule has two entries per segment: a hold
    /// facing the segment's direction, then a turn towards the next segment's
    /// direction that ends as the actor reaches the next waypoint.
    pub fn build(
        waypoints: &[Vec3],
        durations: Option<DurationSpec>,
        options: &PatrolOptions,
    ) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(PatrolError::EmptyPath);
        }
        let f = options.turn_fraction;
        if !(f > 0.0 && f < 1.0) {
            return Err(PatrolError::InvalidTurnFraction(f));
        }

        let durations = normalize(durations, options.default_duration);
        if options.validation == Validation::Strict {
            validate_strict(waypoints, &durations)?;
        }

        let segments = build_loop(waypoints);

        let position = segments
            .iter()
            .enumerate()
            .map(|(i, seg)| TimedEntry::new(seg.from, seg.to, durations.cyclic(i)))
            .collect();

        let headings = smooth_headings(&raw_headings(&segments, options.heading_offset));
        let splits = split_durations(&durations, segments.len(), f);
        let heading = cyclic_pairs(&headings)
            .into_iter()
            .zip(splits)
            .map(|((start, end), duration)| TimedEntry::new(start, end, duration))
            .collect();

        log::debug!(
            "Patrol plan built: {} segments, {} heading entries",
            segments.len(),
            headings.len()
        );

        Ok(Self { position, heading })
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.position.len()
    }

    /// Length of one loop in seconds.
    #[must_use]
    pub fn loop_duration(&self) -> f32 {
        self.position.iter().map(|e| e.duration).sum()
    }
}

fn validate_strict(waypoints: &[Vec3], durations: &Durations) -> Result<()> {
    if let Some(index) = find_duplicate(waypoints) {
        return Err(PatrolError::DuplicateWaypoint { index });
    }
    // Only the durations one loop actually consumes.
    let consumed = waypoints.len().min(durations.len());
    if let Some((index, &value)) = durations.as_slice()[..consumed]
        .iter()
        .enumerate()
        .find(|(_, d)| **d <= 0.0)
    {
        return Err(PatrolError::NonPositiveDuration { index, value });
    }
    Ok(())
}
