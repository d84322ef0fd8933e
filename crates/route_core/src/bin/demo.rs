//! Minimal example
use route_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let graph = india_graph();
    graph.validate()?;

    let mut dijkstra = Dijkstra::new(&graph);
    let result = dijkstra.search_with_observer("delhi", "chennai", |step| {
        let settled = step
            .distances
            .get(&step.current)
            .copied()
            .unwrap_or(f64::INFINITY);
        println!(
            "settled {:<12} at {} ({} visited)",
            step.current,
            format_distance(settled),
            step.visited.len()
        );
    });

    println!();
    if result.is_reachable() {
        for pair in result.path.windows(2) {
            if let Some(route) = graph.find_route(&pair[0], &pair[1]) {
                println!(
                    "{} -> {}: {}",
                    pair[0],
                    pair[1],
                    format_distance(route.distance)
                );
            }
        }
    }
    println!("Total: {}", format_distance(result.distance));
    println!("{}", dijkstra.stats);

    Ok(())
}
