use crate::graph::Graph;
use crate::{city, route};

/// The sample dataset: Indian cities with road distances in km. Layout
/// positions are for presentation consumers only.
pub fn india_graph() -> Graph {
    let mut g = Graph::with_capacity(8, 11);

    g.add_city(city!("delhi", "Delhi", 150.0, 100.0));
    g.add_city(city!("mumbai", "Mumbai", 120.0, 400.0));
    g.add_city(city!("kolkata", "Kolkata", 400.0, 250.0));
    g.add_city(city!("chennai", "Chennai", 300.0, 600.0));
    g.add_city(city!("bengaluru", "Bengaluru", 200.0, 550.0));
    g.add_city(city!("hyderabad", "Hyderabad", 200.0, 450.0));
    g.add_city(city!("jaipur", "Jaipur", 80.0, 200.0));
    g.add_city(city!("pune", "Pune", 180.0, 450.0));

    g.add_route(route!("delhi", "jaipur", 250.0));
    g.add_route(route!("delhi", "mumbai", 600.0));
    g.add_route(route!("delhi", "kolkata", 800.0));
    g.add_route(route!("jaipur", "mumbai", 600.0));
    g.add_route(route!("mumbai", "pune", 200.0));
    g.add_route(route!("mumbai", "hyderabad", 600.0));
    g.add_route(route!("kolkata", "chennai", 500.0));
    g.add_route(route!("hyderabad", "chennai", 350.0));
    g.add_route(route!("hyderabad", "bengaluru", 300.0));
    g.add_route(route!("bengaluru", "chennai", 350.0));
    g.add_route(route!("hyderabad", "jaipur", 110.0));

    g
}

/// a - b
/// |   |
/// c - d
///
/// The direct a-b route is expensive; the short way goes around.
pub fn generate_simple_graph() -> Graph {
    let mut g = Graph::new();

    g.add_city(city!("a", "A", 0.0, 0.0));
    g.add_city(city!("b", "B", 1.0, 0.0));
    g.add_city(city!("c", "C", 0.0, 1.0));
    g.add_city(city!("d", "D", 1.0, 1.0));

    g.add_route(route!("a", "b", 10.0));
    g.add_route(route!("a", "c", 1.0));
    g.add_route(route!("c", "d", 1.0));
    g.add_route(route!("d", "b", 1.0));

    g
}

/// a - b   x - y
pub fn generate_disconnected_graph() -> Graph {
    let mut g = Graph::new();

    g.add_city(city!("a", "A", 0.0, 0.0));
    g.add_city(city!("b", "B", 1.0, 0.0));
    g.add_city(city!("x", "X", 5.0, 0.0));
    g.add_city(city!("y", "Y", 6.0, 0.0));

    g.add_route(route!("a", "b", 1.0));
    g.add_route(route!("x", "y", 2.0));

    g
}
