//! Interactive front end over the sample city graph.
use std::path::PathBuf;

use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::prelude::*;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} cities and {} routes",
        context.graph.cities.len(),
        context.graph.routes.len()
    )))
}

fn cities(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for city in context.graph.cities() {
        out.push_str(&format!("{:<12} {}\n", city.id, city.name));
    }
    Ok(Some(out))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = args.get_one::<String>("src").unwrap();
    let dst = args.get_one::<String>("dst").unwrap();

    let mut dijkstra = Dijkstra::new(&context.graph);
    let result = dijkstra.search(src, dst);

    if !result.is_reachable() {
        return Ok(Some("No path".to_string()));
    }

    let mut out = String::new();
    for pair in result.path.windows(2) {
        if let Some(route) = context.graph.find_route(&pair[0], &pair[1]) {
            out.push_str(&format!(
                "{} -> {}: {}\n",
                pair[0],
                pair[1],
                format_distance(route.distance)
            ));
        }
    }
    out.push_str(&format!("Total: {}\n", format_distance(result.distance)));
    out.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
    Ok(Some(out))
}

fn run_trace(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = args.get_one::<String>("src").unwrap();
    let dst = args.get_one::<String>("dst").unwrap();

    let mut dijkstra = Dijkstra::new(&context.graph);
    let result = dijkstra.search(src, dst);

    let mut out = String::new();
    for (i, step) in result.steps.iter().enumerate() {
        let settled = step
            .distances
            .get(&step.current)
            .copied()
            .unwrap_or(f64::INFINITY);
        out.push_str(&format!(
            "step {:>2}: settled {:<12} at {}\n",
            i + 1,
            step.current,
            format_distance(settled)
        ));
    }
    out.push_str(&format!("{}", dijkstra.stats));
    Ok(Some(out))
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    // Select random city pairs and time each query
    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let src = &context.graph.cities[rng.gen_range(0..context.graph.cities.len())].id;
        let dst = &context.graph.cities[rng.gen_range(0..context.graph.cities.len())].id;

        let mut dijkstra = Dijkstra::new(&context.graph);
        let result = dijkstra.search(src, dst);
        res.push_str(&format!(
            "{} -> {}: {} in {:?}\n",
            src,
            dst,
            format_distance(result.distance),
            dijkstra.stats.duration
        ));
    }

    Ok(Some(res))
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let graph = india_graph();
    graph.validate().expect("Sample graph is invalid");
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Routefinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query shortest routes between cities")
        .with_banner("Welcome to Routefinder")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("cities").about("List all cities"), cities)
        .with_command(
            Command::new("route")
                .arg(Arg::new("src").required(true).help("ID of start city"))
                .arg(Arg::new("dst").required(true).help("ID of destination city"))
                .about("Calculate the shortest route between two cities"),
            run_route,
        )
        .with_command(
            Command::new("trace")
                .arg(Arg::new("src").required(true).help("ID of start city"))
                .arg(Arg::new("dst").required(true).help("ID of destination city"))
                .about("Show every finalization step of a route calculation"),
            run_trace,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random route calculations"),
            measure,
        );

    repl.run()
}
