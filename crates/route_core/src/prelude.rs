//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::{CityId, Weight};
pub use crate::graph::{City, Graph, Position, Route};
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::result::SearchResult;
pub use crate::search::step::Step;

pub use crate::search;

pub use crate::util::format::format_distance;
pub use crate::util::test_graphs::india_graph;
