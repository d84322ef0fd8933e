use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::{CityId, Weight};
use crate::graph::Graph;
use crate::search::reconstruct_path;
use crate::search::result::SearchResult;
use crate::search::step::Step;
use crate::statistics::SearchStats;

/// Transient state owned by exactly one search run.
struct SearchState {
    distances: FxHashMap<CityId, Weight>,
    previous: FxHashMap<CityId, Option<CityId>>,
    /// Kept in graph declaration order so the minimum scan has a stable
    /// tie-break.
    unvisited: Vec<CityId>,
    visited: Vec<CityId>,
}

impl SearchState {
    fn new(graph: &Graph, start: &str) -> Self {
        let mut distances = FxHashMap::default();
        let mut previous = FxHashMap::default();
        let mut unvisited = Vec::with_capacity(graph.cities.len());

        for city in graph.cities() {
            let distance = if city.id == start { 0.0 } else { f64::INFINITY };
            distances.insert(city.id.clone(), distance);
            previous.insert(city.id.clone(), None);
            unvisited.push(city.id.clone());
        }

        Self {
            distances,
            previous,
            unvisited,
            visited: Vec::new(),
        }
    }

    fn distance(&self, id: &str) -> Weight {
        self.distances.get(id).copied().unwrap_or(f64::INFINITY)
    }

    /// Position of the unvisited city with the smallest finite distance,
    /// or `None` when only unreachable cities remain. Ties go to the city
    /// declared first in the graph.
    fn min_unvisited(&self) -> Option<usize> {
        let mut best: Option<(usize, Weight)> = None;
        for (pos, id) in self.unvisited.iter().enumerate() {
            let distance = self.distance(id);
            if distance.is_finite() && best.map_or(true, |(_, smallest)| distance < smallest) {
                best = Some((pos, distance));
            }
        }
        best.map(|(pos, _)| pos)
    }

    fn snapshot(&self, current: &str) -> Step {
        Step {
            visited: self.visited.clone(),
            distances: self.distances.clone(),
            previous: self.previous.clone(),
            current: current.to_string(),
        }
    }
}

/// Label-setting shortest-path search over a city graph.
///
/// Each finalization event produces an immutable [`Step`] snapshot; the
/// full trace is returned in the [`SearchResult`] and optionally streamed
/// to an observer as the search runs.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, start: &str, end: &str) -> SearchResult {
        self.search_with_observer(start, end, |_| {})
    }

    /// Runs the search to completion, invoking `on_step` synchronously and
    /// in order once per finalized city before returning. The engine never
    /// delays or schedules; all pacing belongs to the caller replaying the
    /// returned steps.
    pub fn search_with_observer<F>(&mut self, start: &str, end: &str, mut on_step: F) -> SearchResult
    where
        F: FnMut(&Step),
    {
        self.stats.init();

        let mut state = SearchState::new(self.g, start);
        let mut steps: Vec<Step> = Vec::new();

        while !state.unvisited.is_empty() {
            let Some(pos) = state.min_unvisited() else {
                // Only unreachable cities remain.
                break;
            };
            let current = state.unvisited.remove(pos);
            self.stats.nodes_settled += 1;

            if current == end {
                state.visited.push(current.clone());
                let step = state.snapshot(&current);
                on_step(&step);
                steps.push(step);
                break;
            }

            let current_distance = state.distance(&current);
            for (neighbor, route_distance) in self.g.neighbors(&current) {
                if state.visited.iter().any(|id| id == neighbor) {
                    continue;
                }
                // Routes naming a city that is not part of the graph are
                // skipped: such endpoints are never initialized and never
                // settled.
                if !state.distances.contains_key(neighbor) {
                    continue;
                }
                let tentative = current_distance + route_distance;
                if tentative < state.distance(neighbor) {
                    state.distances.insert(neighbor.to_string(), tentative);
                    state.previous.insert(neighbor.to_string(), Some(current.clone()));
                }
            }

            state.visited.push(current.clone());
            let step = state.snapshot(&current);
            on_step(&step);
            steps.push(step);
        }
        self.stats.finish();

        let path = reconstruct_path(start, end, &state.distances, &state.previous);
        let distance = state.distance(end);

        if path.is_empty() {
            info!("No path found: {}", self.stats);
        } else {
            debug!("Path found: {:?}", path);
            info!("Path found: {}", self.stats);
        }

        SearchResult {
            path,
            distance,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{generate_disconnected_graph, generate_simple_graph, india_graph};
    use crate::{city, route};

    #[test]
    fn simple_path() {
        // a - b
        // |   |
        // c - d
        let g = generate_simple_graph();

        let mut d = Dijkstra::new(&g);

        assert_path(vec!["a", "c", "d", "b"], 3.0, &d.search("a", "b"));
        assert_path(vec!["b", "d", "c", "a"], 3.0, &d.search("b", "a"));
        assert_path(vec!["c", "d"], 1.0, &d.search("c", "d"));
        assert_path(vec!["a"], 0.0, &d.search("a", "a"));
    }

    #[test]
    fn india_routes() {
        let g = india_graph();

        let mut d = Dijkstra::new(&g);

        assert_path(
            vec!["delhi", "jaipur", "hyderabad", "chennai"],
            710.0,
            &d.search("delhi", "chennai"),
        );
        assert_path(
            vec!["delhi", "jaipur", "hyderabad", "bengaluru"],
            660.0,
            &d.search("delhi", "bengaluru"),
        );
        assert_path(vec!["delhi"], 0.0, &d.search("delhi", "delhi"));
    }

    #[test]
    fn disconnected_graph() {
        // a - b   x - y
        let g = generate_disconnected_graph();

        let mut d = Dijkstra::new(&g);

        assert_no_path(&d.search("a", "x"));
        assert_no_path(&d.search("y", "b"));
        assert_path(vec!["a", "b"], 1.0, &d.search("a", "b"));
        assert_path(vec!["x", "y"], 2.0, &d.search("x", "y"));
    }

    #[test]
    fn unknown_ids_degrade_to_no_path() {
        let g = india_graph();

        let mut d = Dijkstra::new(&g);

        assert_no_path(&d.search("delhi", "atlantis"));
        assert_no_path(&d.search("atlantis", "delhi"));
        assert_no_path(&d.search("atlantis", "atlantis"));

        // Nothing reachable from an unknown start, so nothing settles.
        assert!(d.search("atlantis", "delhi").steps.is_empty());
    }

    #[test]
    fn routes_with_unknown_endpoints_are_never_followed() {
        let mut g = generate_simple_graph();
        g.add_route(route!("a", "ghost", 0.5));
        g.add_route(route!("ghost", "b", 0.5));

        let mut d = Dijkstra::new(&g);

        // The tempting shortcut through "ghost" does not exist.
        assert_path(vec!["a", "c", "d", "b"], 3.0, &d.search("a", "b"));
    }

    #[test]
    fn parallel_routes_smaller_wins() {
        let mut g = Graph::new();
        g.add_city(city!("a", "A", 0.0, 0.0));
        g.add_city(city!("b", "B", 1.0, 0.0));
        g.add_route(route!("a", "b", 5.0));
        g.add_route(route!("b", "a", 3.0));

        let mut d = Dijkstra::new(&g);

        assert_path(vec!["a", "b"], 3.0, &d.search("a", "b"));
    }

    #[test]
    fn self_loops_are_harmless() {
        let mut g = generate_simple_graph();
        g.add_route(route!("a", "a", 7.0));
        g.add_route(route!("c", "c", 0.0));

        let mut d = Dijkstra::new(&g);

        assert_path(vec!["a", "c", "d", "b"], 3.0, &d.search("a", "b"));
    }

    #[test]
    fn tie_break_settles_first_declared_city() {
        // b and c both sit at distance 1 from a; b is declared first.
        let mut g = Graph::new();
        g.add_city(city!("a", "A", 0.0, 0.0));
        g.add_city(city!("b", "B", 1.0, 0.0));
        g.add_city(city!("c", "C", 0.0, 1.0));
        g.add_city(city!("d", "D", 1.0, 1.0));
        g.add_route(route!("a", "b", 1.0));
        g.add_route(route!("a", "c", 1.0));
        g.add_route(route!("b", "d", 1.0));
        g.add_route(route!("c", "d", 1.0));

        let mut d = Dijkstra::new(&g);
        let result = d.search("a", "d");

        let settled: Vec<_> = result.steps.iter().map(|s| s.current.as_str()).collect();
        assert_eq!(settled, ["a", "b", "c", "d"]);
        assert_path(vec!["a", "b", "d"], 2.0, &result);
    }

    #[test]
    fn trace_matches_finalization_order() {
        let g = india_graph();

        let mut d = Dijkstra::new(&g);
        let result = d.search("delhi", "chennai");

        let settled: Vec<_> = result.steps.iter().map(|s| s.current.as_str()).collect();
        assert_eq!(
            settled,
            ["delhi", "jaipur", "hyderabad", "mumbai", "bengaluru", "chennai"]
        );
        assert_eq!(d.stats.nodes_settled, result.steps.len());

        // Each step extends the visited order by exactly its own city.
        for (i, step) in result.steps.iter().enumerate() {
            assert_eq!(step.visited.len(), i + 1);
            assert_eq!(step.visited.last(), Some(&step.current));
        }
        assert_eq!(result.steps.last().unwrap().current, "chennai");
    }

    #[test]
    fn steps_are_point_in_time_copies() {
        let g = india_graph();

        let mut d = Dijkstra::new(&g);
        let result = d.search("delhi", "chennai");

        let first = &result.steps[0];
        let last = result.steps.last().unwrap();

        // At the first finalization chennai is still unreached; the final
        // snapshot holds its settled distance.
        assert!(first.distances["chennai"].is_infinite());
        assert_eq!(first.previous["hyderabad"], None);
        assert_eq!(last.distances["chennai"], 710.0);
        assert_eq!(last.previous["chennai"], Some("hyderabad".to_string()));
    }

    #[test]
    fn observer_receives_each_step_in_order() {
        let g = india_graph();

        let mut d = Dijkstra::new(&g);
        let mut seen: Vec<Step> = Vec::new();
        let result = d.search_with_observer("delhi", "bengaluru", |step| seen.push(step.clone()));

        assert_eq!(seen, result.steps);
        assert_path(
            vec!["delhi", "jaipur", "hyderabad", "bengaluru"],
            660.0,
            &result,
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = india_graph();

        let mut d = Dijkstra::new(&g);
        let first = d.search("delhi", "chennai");
        let second = d.search("delhi", "chennai");

        // Tie-break is pinned, so even the step traces match exactly.
        assert_eq!(first, second);
    }

    #[test]
    fn all_pairs_on_india_graph() {
        let g = india_graph();
        let num_cities = g.cities.len();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..num_cities, 0..num_cities), |(a, b)| {
                let start = g.cities[a].id.clone();
                let end = g.cities[b].id.clone();

                let mut d = Dijkstra::new(&g);
                let result = d.search(&start, &end);

                assert!(result.is_reachable(), "india graph is connected");
                assert_eq!(result.path.first(), Some(&start));
                assert_eq!(result.path.last(), Some(&end));
                assert_eq!(result.steps.last().unwrap().current, end);

                let mut total = 0.0;
                for pair in result.path.windows(2) {
                    let route = g
                        .find_route(&pair[0], &pair[1])
                        .expect("path segment without a route");
                    total += route.distance;
                }
                assert_abs_diff_eq!(total, result.distance, epsilon = 1e-9);

                Ok(())
            })
            .unwrap();
    }
}
