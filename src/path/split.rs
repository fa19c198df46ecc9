use crate::path::durations::Durations;

/// Share of each segment spent turning at the waypoint.
pub const DEFAULT_TURN_FRACTION: f32 = 0.2;

/// Splits every segment duration into a hold phase and a turn phase.
///
/// Segment `i` contributes `d_i * (1 - f)` followed by `d_i * f`, so the
/// output has `2 * segment_count` entries. Only the heading track uses this;
/// the position track runs each segment for its full duration.
#[must_use]
pub fn split_durations(durations: &Durations, segment_count: usize, turn_fraction: f32) -> Vec<f32> {
    (0..segment_count)
        .flat_map(|i| {
            let d = durations.cyclic(i);
            let turn = d * turn_fraction;
            [d - turn, turn]
        })
        .collect()
}
