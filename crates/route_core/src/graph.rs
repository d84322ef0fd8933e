use crate::constants::{CityId, Weight};
use anyhow::ensure;
use log::info;
use serde::{Deserialize, Serialize};

/// Layout coordinates for a city. Carried through for presentation
/// consumers, never read by the search.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub position: Position,
}

impl City {
    pub fn new(id: &str, name: &str, x: f64, y: f64) -> Self {
        City {
            id: id.to_string(),
            name: name.to_string(),
            position: Position { x, y },
        }
    }
}

/// Undirected weighted connection between two cities. The order of
/// `source` and `target` is not meaningful.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Route {
    pub source: CityId,
    pub target: CityId,
    pub distance: Weight,
}

impl Route {
    pub fn new(source: &str, target: &str, distance: Weight) -> Self {
        Route {
            source: source.to_string(),
            target: target.to_string(),
            distance,
        }
    }

    /// True if this route connects `a` and `b` in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// The endpoint opposite to `id`, or `None` if `id` is not an endpoint.
    /// A self-loop reports its single endpoint as its own neighbor.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// A city graph as a plain edge list. Neighbor lookup scans `routes`
/// matching either endpoint, so parallel routes between the same pair are
/// all considered and routes naming unknown cities are simply never
/// reached.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Graph {
    pub cities: Vec<City>,
    pub routes: Vec<Route>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            routes: Vec::new(),
        }
    }

    pub fn with_capacity(num_cities: usize, num_routes: usize) -> Self {
        Self {
            cities: Vec::with_capacity(num_cities),
            routes: Vec::with_capacity(num_routes),
        }
    }

    pub fn add_city(&mut self, city: City) {
        self.cities.push(city);
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn add_routes(&mut self, routes: Vec<Route>) {
        for route in routes {
            self.add_route(route);
        }
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// Returns an iterator over all cities of the graph
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Returns an iterator over all routes of the graph
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// All `(neighbor, distance)` pairs reachable from `id` over a single
    /// route, in route declaration order. Parallel routes yield one entry
    /// each.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'a str, Weight)> + 'a {
        self.routes
            .iter()
            .filter_map(move |route| route.other_endpoint(id).map(|other| (other, route.distance)))
    }

    /// First route connecting the two cities in either orientation.
    pub fn find_route(&self, a: &str, b: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.connects(a, b))
    }

    /// Checks that every route endpoint names a known city. The search
    /// itself never requires this; it is a boundary check for callers
    /// loading data from an external collaborator.
    pub fn validate(&self) -> anyhow::Result<()> {
        for route in &self.routes {
            ensure!(
                self.city(&route.source).is_some(),
                "Route {} -> {} names unknown city {}",
                route.source,
                route.target,
                route.source
            );
            ensure!(
                self.city(&route.target).is_some(),
                "Route {} -> {} names unknown city {}",
                route.source,
                route.target,
                route.target
            );
        }
        info!(
            "Graph valid: {} cities, {} routes",
            self.cities.len(),
            self.routes.len()
        );
        Ok(())
    }
}

/// Macro to create a route between two cities with a distance
///
/// route!("delhi", "jaipur", 250.0)
#[macro_export]
macro_rules! route {
    ($source:expr, $target:expr, $distance:expr) => {
        $crate::graph::Route::new($source, $target, $distance)
    };
}

/// Macro to create a city with a given id, display name, x, y
/// city!("delhi", "Delhi", 150.0, 100.0)
#[macro_export]
macro_rules! city {
    ($id:expr, $name:expr, $x:expr, $y:expr) => {
        $crate::graph::City::new($id, $name, $x, $y)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_city_graph() -> Graph {
        let mut g = Graph::new();
        g.add_city(city!("a", "A", 0.0, 0.0));
        g.add_city(city!("b", "B", 1.0, 0.0));
        g.add_route(route!("a", "b", 5.0));
        g
    }

    #[test]
    fn find_route_matches_both_orientations() {
        let g = two_city_graph();

        assert_eq!(g.find_route("a", "b").unwrap().distance, 5.0);
        assert_eq!(g.find_route("b", "a").unwrap().distance, 5.0);
        assert!(g.find_route("a", "c").is_none());
    }

    #[test]
    fn neighbors_include_parallel_routes() {
        let mut g = two_city_graph();
        g.add_route(route!("b", "a", 3.0));

        let from_a: Vec<_> = g.neighbors("a").collect();
        assert_eq!(from_a, vec![("b", 5.0), ("b", 3.0)]);
    }

    #[test]
    fn neighbors_of_unknown_city_are_empty() {
        let g = two_city_graph();
        assert_eq!(g.neighbors("nowhere").count(), 0);
    }

    #[test]
    fn validate_rejects_unknown_endpoint() {
        let mut g = two_city_graph();
        assert!(g.validate().is_ok());

        g.add_route(route!("a", "ghost", 1.0));
        assert!(g.validate().is_err());
    }
}
