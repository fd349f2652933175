//! Metric samples
//!
//! A [`Sample`] is the positive, finite part of one raw metric series. Zero,
//! negative and non-finite values mean "no activity" and are dropped on
//! construction, so every analyser downstream can assume strictly positive input.

/// Strictly positive, finite values of a single metric
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Build a sample from raw values, dropping anything that is not `> 0` and finite
    pub fn from_raw(raw: &[f64]) -> Self {
        Self {
            values: raw
                .iter()
                .copied()
                .filter(|v| v.is_finite() && *v > 0.0)
                .collect(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in ascending order
    pub fn sorted_ascending(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Values in descending order (largest first)
    pub fn sorted_descending(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        sorted
    }
}

impl From<Vec<f64>> for Sample {
    fn from(raw: Vec<f64>) -> Self {
        Self::from_raw(&raw)
    }
}
