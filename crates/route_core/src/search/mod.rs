use rustc_hash::FxHashMap;

use crate::constants::{CityId, Weight};

pub mod dijkstra;
pub mod result;
pub mod step;

/// Walks the predecessor map backwards from `end` to build the final path.
///
/// A walk shorter than two cities means `end` was never reached and yields
/// the empty path. The zero-hop case is the exception: searching from a
/// city to itself reports a single-node path when the city exists in the
/// graph (its distance is finite), and the no-path value when it does not.
pub fn reconstruct_path(
    start: &str,
    end: &str,
    distances: &FxHashMap<CityId, Weight>,
    previous: &FxHashMap<CityId, Option<CityId>>,
) -> Vec<CityId> {
    if start == end {
        let reached = distances
            .get(end)
            .map(|d| d.is_finite())
            .unwrap_or(false);
        return if reached { vec![end.to_string()] } else { Vec::new() };
    }

    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(Some(prev)) = previous.get(current) {
        path.push(prev.clone());
        current = prev;
    }

    if path.len() < 2 {
        return Vec::new();
    }
    path.reverse();
    path
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_distance: Weight,
    actual: &result::SearchResult,
) {
    let expected: Vec<CityId> = expected_path.iter().map(|id| id.to_string()).collect();
    assert_eq!(expected, actual.path);
    assert_eq!(expected_distance, actual.distance);
}

#[cfg(test)]
pub(crate) fn assert_no_path(actual: &result::SearchResult) {
    assert!(actual.path.is_empty(), "expected no path: {:?}", actual.path);
    assert!(actual.distance.is_infinite());
}
