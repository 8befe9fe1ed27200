//! Interactive route finder.
//!
//! Prints every city as it is finalized, then asks for a destination (unless
//! `--to` was given) and prints the route back to the source one city per
//! line. Exit codes: 0 on success (including "no path exists"), 1 on a bad
//! graph or selection, 2 on bad arguments.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use city_sssp::config::{OutputFormat, RunConfig, USAGE};
use city_sssp::report::RunReport;
use city_sssp::error::ConfigError;
use city_sssp::{resolve_city, CityGraph, Dijkstra, Error, NodeId, ShortestPaths};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match RunConfig::from_env().and_then(|c| c.with_args(std::env::args().skip(1))) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if config.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<(), Error> {
    let graph = match &config.graph {
        Some(path) => CityGraph::from_json_file(path)?,
        None => CityGraph::northern_cities(),
    };
    let source = match &config.from {
        Some(name) => resolve_city(&graph, name)?,
        None => 0,
    };
    tracing::info!(cities = graph.len(), roads = graph.edge_count(), source = graph.name(source), "graph loaded");

    let engine = Dijkstra::new(&graph);
    let paths = match config.format {
        OutputFormat::Text => engine.run_with(source, |s| {
            println!("{}---{}", graph.name(s.node), s.distance);
        })?,
        OutputFormat::Json => engine.run(source)?,
    };

    let target = match (&config.to, config.format) {
        (Some(t), _) => Some(resolve_city(&graph, t)?),
        (None, OutputFormat::Text) => Some(prompt_target(&graph, source)?),
        (None, OutputFormat::Json) => None,
    };

    match config.format {
        OutputFormat::Json => {
            let mut report = RunReport::new(&graph, &paths);
            if let Some(t) = target {
                report = report.with_route(&graph, &paths, t);
            }
            println!("{}", report.to_json()?);
        }
        OutputFormat::Text => {
            if let Some(t) = target {
                print_route_back(&graph, &paths, t);
            }
        }
    }
    Ok(())
}

fn prompt_target(graph: &CityGraph, source: NodeId) -> Result<NodeId, Error> {
    println!(
        "Select a number for which city you want to travel to from {}",
        graph.name(source)
    );
    for node in graph.nodes() {
        println!("{}-{}", node, graph.name(node));
    }
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    if line.trim().is_empty() {
        return Err(ConfigError::MissingValue("destination").into());
    }
    resolve_city(graph, &line)
}

fn print_route_back(graph: &CityGraph, paths: &ShortestPaths, target: NodeId) {
    match paths.path_back(target) {
        Ok(hops) => {
            println!(
                "Route from {} to {} ({}):",
                graph.name(target),
                graph.name(paths.source()),
                paths.distance(target)
            );
            for node in hops {
                println!("{}", graph.name(node));
            }
        }
        Err(_) => println!(
            "No path exists from {} to {}",
            graph.name(paths.source()),
            graph.name(target)
        ),
    }
}
