use serde::{Deserialize, Serialize};

/// Inflection point of a descending-sorted sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElbowPoint {
    /// 0-based position in the full descending-sorted sample
    pub rank: usize,
    pub value: f64,
    /// `100 * (1 - rank / count)`
    pub percentile: f64,
}
