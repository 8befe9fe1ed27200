use city_sssp::{shortest_paths, CityGraph};

fn main() {
    let g = CityGraph::northern_cities();
    let paths = shortest_paths(&g, "Liverpool").expect("built-in graph");
    for &node in paths.settle_order() {
        println!("{}---{}", g.name(node), paths.distance(node));
    }
    for node in g.nodes().skip(1) {
        match paths.route_to(node) {
            Ok(route) => println!("{} ({}): {}", g.name(node), route.distance, route.names(&g).join(" -> ")),
            Err(e) => println!("{}: {e}", g.name(node)),
        }
    }
}
