/// Route weight type. Unreachable cities carry `f64::INFINITY`.
pub type Weight = f64;
/// City identifier used throughout the graph and the search trace.
pub type CityId = String;
