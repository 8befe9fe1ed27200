//! Single-source shortest paths over small undirected city graphs.
//!
//! Dijkstra's algorithm on top of a plain array-backed binary heap. The heap
//! has no decrease-key; relaxations drain it onto a stack until the target
//! record surfaces, update it in place, then push everything back.
//!
//! Layout:
//!  - [`queue`]: binary min-heap with a structural consistency check
//!  - [`record`]: distances with an infinity sentinel, relaxation records
//!  - [`graph`]: validated symmetric weight matrix with city names
//!  - [`dijkstra`]: the relaxation loop, producing [`ShortestPaths`]
//!  - [`path`]: predecessor walks and routes
//!  - [`report`], [`config`]: JSON output and settings for the `city_route` binary
//!  - [`ffi`]: C ABI (`city_sssp_run_matrix`)
//!
//! ```
//! use city_sssp::{shortest_paths, CityGraph};
//!
//! let g = CityGraph::northern_cities();
//! let paths = shortest_paths(&g, "Liverpool").unwrap();
//! let route = paths.route_to(g.node_index("Sheffield").unwrap()).unwrap();
//! assert_eq!(route.names(&g), ["Liverpool", "Manchester", "Sheffield"]);
//! assert_eq!(route.distance.get(), Some(73));
//! ```

pub mod config;
pub mod dijkstra;
pub mod error;
pub mod ffi;
pub mod graph;
pub mod path;
pub mod queue;
pub mod record;
pub mod report;

pub use dijkstra::{Dijkstra, RunStats, Settled, ShortestPaths};
pub use error::{EmptyQueueError, Error, InvalidGraphError, Result, UnreachablePathError};
pub use graph::{random_graph, CityGraph};
pub use path::{reconstruct, Route};
pub use queue::PriorityQueue;
pub use record::{Distance, NodeId, RelaxRecord, Weight};

/// Runs Dijkstra from the city called `source`.
pub fn shortest_paths(graph: &CityGraph, source: &str) -> Result<ShortestPaths> {
    let node = graph
        .node_index(source)
        .ok_or_else(|| Error::UnknownCity(source.to_string()))?;
    Dijkstra::new(graph).run(node)
}

/// Resolves a city by exact name, falling back to a numeric index.
pub fn resolve_city(graph: &CityGraph, name_or_index: &str) -> Result<NodeId> {
    let key = name_or_index.trim();
    if let Some(node) = graph.node_index(key) {
        return Ok(node);
    }
    match key.parse::<NodeId>() {
        Ok(node) if node < graph.len() => Ok(node),
        Ok(node) => Err(Error::NodeOutOfRange { node, nodes: graph.len() }),
        Err(_) => Err(Error::UnknownCity(key.to_string())),
    }
}
