//! Serializable summary of a run, for `--json` output and tooling.

use serde::Serialize;

use crate::dijkstra::{RunStats, ShortestPaths};
use crate::graph::CityGraph;
use crate::record::{Distance, NodeId};

#[derive(Debug, Clone, Serialize)]
pub struct SettledCity {
    pub city: String,
    pub distance: Distance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub to: String,
    pub reachable: bool,
    pub distance: Distance,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source: String,
    /// Cities in finalization order.
    pub settled: Vec<SettledCity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteReport>,
    pub stats: RunStats,
}

impl RunReport {
    pub fn new(graph: &CityGraph, paths: &ShortestPaths) -> Self {
        let settled = paths
            .settle_order()
            .iter()
            .map(|&node| SettledCity {
                city: graph.name(node).to_string(),
                distance: paths.distance(node),
                via: paths.predecessor(node).map(|p| graph.name(p).to_string()),
            })
            .collect();
        Self {
            source: graph.name(paths.source()).to_string(),
            settled,
            route: None,
            stats: paths.stats(),
        }
    }

    /// Attaches the route to `target`; an unreachable target is recorded
    /// with `reachable: false` and no cities.
    pub fn with_route(mut self, graph: &CityGraph, paths: &ShortestPaths, target: NodeId) -> Self {
        let to = match graph.names().get(target) {
            Some(name) => name.clone(),
            None => target.to_string(),
        };
        self.route = Some(match paths.route_to(target) {
            Ok(route) => RouteReport {
                to,
                reachable: true,
                distance: route.distance,
                cities: route.names(graph).into_iter().map(String::from).collect(),
            },
            Err(_) => RouteReport {
                to,
                reachable: false,
                distance: Distance::INFINITY,
                cities: Vec::new(),
            },
        });
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
