use crate::constants::{CityId, Weight};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of search progress, taken each time a city is
/// finalized. The maps are point-in-time copies; the live search state
/// keeps changing after the snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Step {
    /// Cities in finalization order, up to and including `current`.
    pub visited: Vec<CityId>,
    /// Best known distance from the start city, `f64::INFINITY` where no
    /// path has been seen yet.
    pub distances: FxHashMap<CityId, Weight>,
    /// Predecessor on the best known path, `None` where no path has been
    /// seen yet.
    pub previous: FxHashMap<CityId, Option<CityId>>,
    /// The city finalized by this step.
    pub current: CityId,
}
