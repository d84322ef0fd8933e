//! Shortest-path engine over a small weighted city graph.
//!
//! The search emits one immutable [`Step`](search::step::Step) snapshot per
//! finalized city, so presentation consumers can replay the discovery at
//! their own pace; the engine itself is fully synchronous.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! let graph = india_graph();
//!
//! let mut dijkstra = Dijkstra::new(&graph);
//! let result = dijkstra.search("delhi", "chennai");
//!
//! assert_eq!(result.path, ["delhi", "jaipur", "hyderabad", "chennai"]);
//! assert_eq!(format_distance(result.distance), "710 km");
//! ```
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
