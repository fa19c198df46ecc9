use glam::Vec3;

/// Directed edge between two consecutive waypoints of a closed loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec3,
    pub to: Vec3,
}

impl Segment {
    #[inline]
    #[must_use]
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.to - self.from
    }

    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

/// Pairs every element with its successor, the last one wrapping to the first.
///
/// A single element is paired with itself.
#[must_use]
pub fn cyclic_pairs<T: Copy>(items: &[T]) -> Vec<(T, T)> {
    let n = items.len();
    (0..n).map(|i| (items[i], items[(i + 1) % n])).collect()
}

/// Closes a waypoint list into a loop: segment `i` runs from waypoint `i` to
/// waypoint `(i + 1) mod N`.
#[must_use]
pub fn build_loop(waypoints: &[Vec3]) -> Vec<Segment> {
    cyclic_pairs(waypoints)
        .into_iter()
        .map(|(from, to)| Segment::new(from, to))
        .collect()
}

/// Index of the first waypoint that coincides with its successor in loop order.
///
/// Single-waypoint paths are stationary by construction and are not reported.
#[must_use]
pub fn find_duplicate(waypoints: &[Vec3]) -> Option<usize> {
    if waypoints.len() < 2 {
        return None;
    }
    build_loop(waypoints)
        .iter()
        .position(Segment::is_degenerate)
}
