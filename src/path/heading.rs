//! Heading extraction and smoothing.
//!
//! Headings are degrees in the horizontal (x, y) plane. Raw headings from
//! `atan2` wrap at ±180°, so a patrol that reverses direction near the wrap
//! would spin the long way round. [`smooth_headings`] picks, for every entry,
//! the whole-turn offset closest to the previous entry.
//!
//! The smoothed sequence is finite and then replayed. Its first and last
//! entries are generally not whole turns apart, so the heading track spins
//! once at the loop seam unless the path's net turning lands on a compatible
//! angle (a back-and-forth path, for example).

use crate::path::waypoints::Segment;

/// Rotation from the `atan2` frame to the model's forward axis.
///
/// This is a property of the character asset: a model facing +Y at rest
/// needs -90°.
pub const DEFAULT_HEADING_OFFSET: f32 = -90.0;

/// Whole turns searched on either side of a raw heading while smoothing.
pub const TURN_SEARCH_WINDOW: i32 = 10;

/// Facing implied by a segment's horizontal direction, in degrees.
///
/// A segment with no horizontal extent has no direction; it gets the
/// zero-vector convention of 0° and the asset offset is not applied.
#[must_use]
pub fn segment_heading(segment: &Segment, offset: f32) -> f32 {
    let dir = segment.direction();
    if dir.x == 0.0 && dir.y == 0.0 {
        return 0.0;
    }
    dir.y.atan2(dir.x).to_degrees() + offset
}

/// Raw heading sequence for one loop body.
///
/// Each segment contributes its heading twice: once for the hold phase and
/// once as the target of the turn that precedes it.
#[must_use]
pub fn raw_headings(segments: &[Segment], offset: f32) -> Vec<f32> {
    segments
        .iter()
        .flat_map(|segment| {
            let heading = segment_heading(segment, offset);
            [heading, heading]
        })
        .collect()
}

/// Replaces each heading after the first with its congruent angle closest to
/// the previous output.
///
/// Candidates are `raw + 360 * k` for `k` in `-TURN_SEARCH_WINDOW..=TURN_SEARCH_WINDOW`,
/// searched in ascending order; on a tie the first candidate found wins.
#[must_use]
pub fn smooth_headings(raw: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(raw.len());
    let Some((&first, rest)) = raw.split_first() else {
        return out;
    };
    out.push(first);

    let mut previous = first;
    for &heading in rest {
        let mut best = heading;
        let mut best_diff = f32::INFINITY;
        for k in -TURN_SEARCH_WINDOW..=TURN_SEARCH_WINDOW {
            let candidate = heading + 360.0 * k as f32;
            let diff = (candidate - previous).abs();
            if diff < best_diff {
                best = candidate;
                best_diff = diff;
            }
        }
        out.push(best);
        previous = best;
    }
    out
}
