use crate::constants::{CityId, Weight};
use crate::search::step::Step;
use serde::{Deserialize, Serialize};

/// Outcome of one search run. "No path" is a normal value, not an error:
/// the path is empty and the distance is `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResult {
    /// City ids from start to end inclusive, empty when unreachable.
    pub path: Vec<CityId>,
    /// Total distance along `path`, `f64::INFINITY` when unreachable.
    pub distance: Weight,
    /// One snapshot per finalization event, in emission order.
    pub steps: Vec<Step>,
}

impl SearchResult {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}
