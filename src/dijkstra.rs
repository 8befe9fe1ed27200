//! Dijkstra over a [`CityGraph`] with a plain binary heap.
//!
//! The queue is seeded with one record per node (source at zero, everything
//! else at infinity) and drained once. Each extracted node is finalized, then
//! its unvisited neighbours are relaxed in ascending node order.
//!
//! The heap has no decrease-key, so a relaxation locates the neighbour's
//! record by extracting records onto a stack until the neighbour shows up,
//! lowers its distance in place if the candidate is strictly smaller, and
//! re-inserts the whole stack. That costs O(n) per relaxation attempt.
//!
//! ```
//! use city_sssp::dijkstra::Dijkstra;
//! use city_sssp::graph::CityGraph;
//!
//! let g = CityGraph::northern_cities();
//! let paths = Dijkstra::new(&g).run(0).unwrap();
//! let york = g.node_index("York").unwrap();
//! assert_eq!(paths.distance(york).get(), Some(98));
//! assert_eq!(paths.route_to(york).unwrap().hops, vec![0, 2, 4]);
//! ```

use tracing::{debug, debug_span, trace};

use crate::error::{EmptyQueueError, Error, Result, UnreachablePathError};
use crate::graph::CityGraph;
use crate::path::{reconstruct, Route};
use crate::queue::{PriorityQueue, QueueStats};
use crate::record::{Distance, NodeId, RelaxRecord};

/// A node leaving the queue with its final distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub node: NodeId,
    pub distance: Distance,
    /// Position in finalization order, starting at 0 for the source.
    pub order: usize,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunStats {
    pub settled: u32,
    /// Unvisited neighbours examined.
    pub relax_attempts: u64,
    /// Attempts that strictly lowered a distance.
    pub relaxations: u64,
    /// Records moved through the requeue stack.
    pub requeued: u64,
    pub queue: QueueStats,
}

/// Output of one run: finalized distances and the predecessor table.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
    settle_order: Vec<NodeId>,
    stats: RunStats,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Infinity for unreachable or out-of-range nodes.
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distances.get(node).copied().unwrap_or(Distance::INFINITY)
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    /// Nodes in the order they were finalized.
    pub fn settle_order(&self) -> &[NodeId] {
        &self.settle_order
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Target-to-source walk of the predecessor table.
    pub fn path_back(&self, target: NodeId) -> std::result::Result<Vec<NodeId>, UnreachablePathError> {
        reconstruct(&self.predecessors, self.source, target)
    }

    /// Source-to-target route with its total distance.
    pub fn route_to(&self, target: NodeId) -> std::result::Result<Route, UnreachablePathError> {
        let mut hops = self.path_back(target)?;
        hops.reverse();
        Ok(Route { hops, distance: self.distance(target) })
    }
}

pub struct Dijkstra<'g> {
    graph: &'g CityGraph,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g CityGraph) -> Self {
        Self { graph }
    }

    pub fn run(&self, source: NodeId) -> Result<ShortestPaths> {
        self.run_with(source, |_| {})
    }

    /// Runs from `source`, calling `on_settle` as each node is finalized.
    pub fn run_with<F>(&self, source: NodeId, mut on_settle: F) -> Result<ShortestPaths>
    where
        F: FnMut(&Settled),
    {
        let n = self.graph.len();
        if source >= n {
            return Err(Error::NodeOutOfRange { node: source, nodes: n });
        }
        let span = debug_span!("dijkstra", source = self.graph.name(source), nodes = n);
        let _enter = span.enter();

        let mut queue = PriorityQueue::with_capacity(n);
        for node in self.graph.nodes() {
            let seed = if node == source { Distance::ZERO } else { Distance::INFINITY };
            queue.insert(RelaxRecord::new(node, seed));
        }

        let mut visited = vec![false; n];
        let mut distances = vec![Distance::INFINITY; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        let mut settle_order = Vec::with_capacity(n);
        let mut stack = Vec::with_capacity(n);
        let mut stats = RunStats::default();

        while !queue.is_empty() {
            let u = queue.extract_min()?;
            debug_assert!(!visited[u.node], "node {} finalized twice", u.node);
            visited[u.node] = true;
            distances[u.node] = u.distance;
            let event = Settled { node: u.node, distance: u.distance, order: settle_order.len() };
            settle_order.push(u.node);
            stats.settled += 1;
            debug!(city = self.graph.name(u.node), distance = %u.distance, "settled");
            on_settle(&event);

            for (v, weight) in self.graph.neighbors(u.node) {
                if visited[v] {
                    continue;
                }
                stats.relax_attempts += 1;
                let candidate = u.distance.saturating_add(weight);
                if requeue_relax(&mut queue, &mut stack, v, candidate, &mut stats.requeued)? {
                    predecessors[v] = Some(u.node);
                    stats.relaxations += 1;
                    trace!(from = u.node, to = v, %candidate, "relaxed");
                }
            }
            queue.debug_validate_invariants();
        }

        stats.queue = queue.stats();
        debug!(
            settled = stats.settled,
            relaxations = stats.relaxations,
            requeued = stats.requeued,
            "run complete"
        );
        Ok(ShortestPaths { source, distances, predecessors, settle_order, stats })
    }
}

/// Decrease-key by draining: extract onto `stack` until `node` appears, lower
/// its distance to `candidate` if strictly smaller, then re-insert the stack.
///
/// Returns whether the distance changed. `EmptyQueueError` means `node` was
/// not queued at all.
fn requeue_relax(
    queue: &mut PriorityQueue<RelaxRecord>,
    stack: &mut Vec<RelaxRecord>,
    node: NodeId,
    candidate: Distance,
    requeued: &mut u64,
) -> std::result::Result<bool, EmptyQueueError> {
    debug_assert!(stack.is_empty());
    let mut updated = false;
    loop {
        let mut record = queue.extract_min()?;
        let found = record.node == node;
        if found && candidate < record.distance {
            record.distance = candidate;
            updated = true;
        }
        stack.push(record);
        if found {
            break;
        }
    }
    *requeued += stack.len() as u64;
    while let Some(record) = stack.pop() {
        queue.insert(record);
    }
    Ok(updated)
}
