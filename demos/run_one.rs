use std::time::Instant;

use city_sssp::{random_graph, Dijkstra};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("usage: run_one <n> <edge_probability> <seed> [max_weight]");
        std::process::exit(1);
    }
    let n: usize = args[1].parse().expect("n");
    let p: f64 = args[2].parse().expect("edge_probability");
    let seed: u64 = args[3].parse().expect("seed");
    let max_weight: u32 = args.get(4).map(|s| s.parse().expect("max_weight")).unwrap_or(100);

    let graph = random_graph(n, p, max_weight, seed);
    let t0 = Instant::now();
    let paths = match Dijkstra::new(&graph).run(0) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let stats = paths.stats();
    let reachable = graph.nodes().filter(|&v| paths.is_reachable(v)).count();
    let farthest = paths.distances().iter().filter_map(|d| d.get()).max();
    println!(
        "{}",
        serde_json::json!({
            "n": n,
            "m": graph.edge_count(),
            "seed": seed,
            "ms": elapsed_ms,
            "reachable": reachable,
            "farthest": farthest,
            "settled": stats.settled,
            "relax_attempts": stats.relax_attempts,
            "relaxations": stats.relaxations,
            "requeued": stats.requeued,
            "pushes": stats.queue.pushes,
            "pops": stats.queue.pops,
            "max_queue": stats.queue.max_size,
        })
    );
}
