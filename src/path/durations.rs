use serde::{Deserialize, Serialize};

/// A duration as supplied by the caller: one value for every segment, or an
/// explicit per-segment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationSpec {
    Single(f32),
    List(Vec<f32>),
}

impl From<f32> for DurationSpec {
    fn from(value: f32) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f32>> for DurationSpec {
    fn from(values: Vec<f32>) -> Self {
        Self::List(values)
    }
}

/// Non-empty list of segment durations in seconds, read cyclically.
#[derive(Debug, Clone, PartialEq)]
pub struct Durations {
    values: Vec<f32>,
}

impl Durations {
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Duration for segment `index`, wrapping around the list.
    #[must_use]
    pub fn cyclic(&self, index: usize) -> f32 {
        self.values[index % self.values.len()]
    }
}

/// Turns an optional [`DurationSpec`] into a cyclically indexable list.
///
/// `None` becomes `[default]`, a scalar becomes a one-element list and a list
/// passes through unchanged. Values are not checked for positivity here.
#[must_use]
pub fn normalize(spec: Option<DurationSpec>, default: f32) -> Durations {
    let values = match spec {
        None => vec![default],
        Some(DurationSpec::Single(value)) => vec![value],
        Some(DurationSpec::List(values)) if values.is_empty() => {
            log::warn!("Empty duration list, falling back to default of {default}s");
            vec![default]
        }
        Some(DurationSpec::List(values)) => values,
    };
    Durations { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_wraps_short_lists() {
        let durations = normalize(Some(vec![1.0_f32, 2.0].into()), 5.0);
        let picked: Vec<f32> = (0..5).map(|i| durations.cyclic(i)).collect();
        assert_eq!(picked, vec![1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn empty_list_uses_default() {
        let durations = normalize(Some(DurationSpec::List(Vec::new())), 4.0);
        assert_eq!(durations.as_slice(), &[4.0]);
    }
}
