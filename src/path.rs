//! Route reconstruction from a predecessor table.

use serde::Serialize;

use crate::error::UnreachablePathError;
use crate::graph::CityGraph;
use crate::record::{Distance, NodeId};

/// Walks `predecessors` from `target` back to `source`.
///
/// The result is in target-to-source order and always starts with `target`
/// and ends with `source`. A missing entry, an out-of-range node, or a walk
/// longer than the table (a cycle) yields [`UnreachablePathError`].
///
/// ```
/// use city_sssp::path::reconstruct;
///
/// let preds = [None, Some(0), Some(1)];
/// assert_eq!(reconstruct(&preds, 0, 2), Ok(vec![2, 1, 0]));
/// assert!(reconstruct(&[None, None], 0, 1).is_err());
/// ```
pub fn reconstruct(
    predecessors: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Result<Vec<NodeId>, UnreachablePathError> {
    let unreachable = UnreachablePathError { origin: source, target };
    let n = predecessors.len();
    if target >= n || source >= n {
        return Err(unreachable);
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        if path.len() > n {
            return Err(unreachable);
        }
        current = match predecessors.get(current).copied().flatten() {
            Some(prev) => prev,
            None => return Err(unreachable),
        };
        path.push(current);
    }
    Ok(path)
}

/// Source-to-target hops and the finalized length of the route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub hops: Vec<NodeId>,
    pub distance: Distance,
}

impl Route {
    pub fn names<'g>(&self, graph: &'g CityGraph) -> Vec<&'g str> {
        self.hops.iter().map(|&node| graph.name(node)).collect()
    }

    /// Number of roads travelled.
    pub fn legs(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_to_itself_is_a_single_hop() {
        assert_eq!(reconstruct(&[None, Some(0)], 0, 0), Ok(vec![0]));
    }

    #[test]
    fn walks_back_through_the_table() {
        // B:A, D:B, C:A, E:C
        let preds = [None, Some(0), Some(0), Some(1), Some(2)];
        assert_eq!(reconstruct(&preds, 0, 4), Ok(vec![4, 2, 0]));
        assert_eq!(reconstruct(&preds, 0, 3), Ok(vec![3, 1, 0]));
    }

    #[test]
    fn missing_entry_is_unreachable() {
        let preds = [None, Some(0), None];
        assert_eq!(
            reconstruct(&preds, 0, 2),
            Err(UnreachablePathError { origin: 0, target: 2 })
        );
    }

    #[test]
    fn garbled_cycle_is_cut_off() {
        let preds = [None, Some(2), Some(1)];
        assert!(reconstruct(&preds, 0, 1).is_err());
    }

    #[test]
    fn out_of_range_target_is_unreachable() {
        assert!(reconstruct(&[None], 0, 3).is_err());
    }

    #[test]
    fn route_maps_names_and_counts_legs() {
        let g = CityGraph::northern_cities();
        let route = Route { hops: vec![0, 2, 4], distance: Distance::new(98) };
        assert_eq!(route.names(&g), vec!["Liverpool", "Leeds", "York"]);
        assert_eq!(route.legs(), 2);
    }
}
