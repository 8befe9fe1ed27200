//! Undirected weighted city graph.
//!
//! Weights live in a dense row-major `n * n` matrix. `0` means "no edge", so
//! zero-cost roads cannot be expressed. Every constructor validates the input
//! (square, symmetric, empty diagonal, unique names, weights in `0..=u32::MAX`)
//! before a [`CityGraph`] exists, so the engine never sees a malformed graph.
//!
//! ```
//! use city_sssp::graph::CityGraph;
//!
//! let g = CityGraph::northern_cities();
//! let leeds = g.node_index("Leeds").unwrap();
//! assert_eq!(g.weight(leeds, g.node_index("York").unwrap()), 23);
//! ```

use std::collections::HashMap;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidGraphError, Result};
use crate::record::{NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    weights: Vec<Weight>,
}

/// One undirected road in an edge list, endpoints by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

/// On-disk JSON layout. Exactly one of `matrix` and `edges` must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub cities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<i64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeSpec>>,
}

impl CityGraph {
    /// Builds a graph from a square matrix of signed weights.
    pub fn from_matrix<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        rows: &[Vec<i64>],
    ) -> std::result::Result<Self, InvalidGraphError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = rows.len();
        if n == 0 {
            return Err(InvalidGraphError::Empty);
        }
        if names.len() != n {
            return Err(InvalidGraphError::NameCountMismatch { names: names.len(), nodes: n });
        }
        let mut weights = Vec::with_capacity(n * n);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(InvalidGraphError::NotSquare { row, len: entries.len(), expected: n });
            }
            for (col, &raw) in entries.iter().enumerate() {
                weights.push(checked_weight(row, col, raw)?);
            }
        }
        Self::from_parts(names, weights)
    }

    /// Builds a graph from an undirected edge list. Listing an edge in both
    /// directions is allowed as long as the weights agree.
    pub fn from_edges<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        edges: &[EdgeSpec],
    ) -> std::result::Result<Self, InvalidGraphError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = names.len();
        if n == 0 {
            return Err(InvalidGraphError::Empty);
        }
        let index = build_index(&names)?;
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| InvalidGraphError::UnknownCity(name.to_string()))
        };

        let mut weights = vec![0; n * n];
        for edge in edges {
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            let w = checked_weight(from, to, edge.weight)?;
            let existing = weights[from * n + to];
            if existing != 0 && existing != w {
                return Err(InvalidGraphError::ConflictingEdge { from, to, first: existing, second: w });
            }
            weights[from * n + to] = w;
            weights[to * n + from] = w;
        }
        Self::from_parts(names, weights)
    }

    /// Builds an unnamed graph from a row-major weight slice; node `i` is
    /// named after its index.
    pub fn from_row_major(n: usize, weights: &[Weight]) -> std::result::Result<Self, InvalidGraphError> {
        if n == 0 {
            return Err(InvalidGraphError::Empty);
        }
        if weights.len() != n * n {
            let row = weights.len() / n;
            return Err(InvalidGraphError::NotSquare { row, len: weights.len() % n, expected: n });
        }
        Self::from_parts((0..n).map(|i| i.to_string()).collect(), weights.to_vec())
    }

    pub fn from_file(file: GraphFile) -> std::result::Result<Self, InvalidGraphError> {
        match (file.matrix, file.edges) {
            (Some(rows), None) => Self::from_matrix(file.cities, &rows),
            (None, Some(edges)) => Self::from_edges(file.cities, &edges),
            _ => Err(InvalidGraphError::AmbiguousLayout),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: GraphFile = serde_json::from_str(text)?;
        Ok(Self::from_file(file)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Five northern English cities and the road distances between them.
    ///
    /// ```text
    ///               0   1   2   3   4
    /// 0 Liverpool   0  34  75  74   0
    /// 1 Manchester 34   0  45  39  69
    /// 2 Leeds      75  45   0  36  23
    /// 3 Sheffield  74  39  36   0  61
    /// 4 York        0  69  23  61   0
    /// ```
    pub fn northern_cities() -> Self {
        let names = ["Liverpool", "Manchester", "Leeds", "Sheffield", "York"];
        let weights: Vec<Weight> = vec![
            0, 34, 75, 74, 0, //
            34, 0, 45, 39, 69, //
            75, 45, 0, 36, 23, //
            74, 39, 36, 0, 61, //
            0, 69, 23, 61, 0, //
        ];
        let index = names.iter().enumerate().map(|(i, s)| (s.to_string(), i)).collect();
        Self {
            names: names.iter().map(|s| s.to_string()).collect(),
            index,
            weights,
        }
    }

    fn from_parts(names: Vec<String>, weights: Vec<Weight>) -> std::result::Result<Self, InvalidGraphError> {
        let n = names.len();
        let index = build_index(&names)?;
        for u in 0..n {
            let diag = weights[u * n + u];
            if diag != 0 {
                return Err(InvalidGraphError::SelfLoop { node: u, weight: diag });
            }
            for v in (u + 1)..n {
                let forward = weights[u * n + v];
                let backward = weights[v * n + u];
                if forward != backward {
                    return Err(InvalidGraphError::Asymmetric { from: u, to: v, forward, backward });
                }
            }
        }
        Ok(Self { names, index, weights })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.len()
    }

    /// Panics if `node` is out of range.
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Case-sensitive lookup.
    pub fn node_index(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// `0` when there is no edge.
    #[inline]
    pub fn weight(&self, u: NodeId, v: NodeId) -> Weight {
        self.weights[u * self.len() + v]
    }

    /// Neighbours of `u` with their edge weights, in ascending node order.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        let n = self.len();
        self.weights[u * n..(u + 1) * n]
            .iter()
            .enumerate()
            .filter(|(_, &w)| w != 0)
            .map(|(v, &w)| (v, w))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes().map(|u| self.neighbors(u).filter(|&(v, _)| v > u).count()).sum()
    }

    /// Row-major weight matrix.
    pub fn row_major(&self) -> &[Weight] {
        &self.weights
    }

    pub fn to_file(&self) -> GraphFile {
        let n = self.len();
        let matrix = self
            .weights
            .chunks(n.max(1))
            .map(|row| row.iter().map(|&w| i64::from(w)).collect())
            .collect();
        GraphFile { cities: self.names.clone(), matrix: Some(matrix), edges: None }
    }
}

/// Random symmetric graph for tests and benchmarks.
///
/// Each unordered pair gets an edge with probability `edge_probability` and a
/// weight drawn from `1..=max_weight`. Nodes are named `c0`, `c1`, ...
///
/// `n` is raised to 1, since a graph has at least one city. A NaN
/// probability is treated as 0.0 and anything outside `0.0..=1.0` is clamped.
pub fn random_graph(n: usize, edge_probability: f64, max_weight: Weight, seed: u64) -> CityGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n = n.max(1);
    let p = if edge_probability.is_nan() { 0.0 } else { edge_probability.clamp(0.0, 1.0) };
    let max_weight = max_weight.max(1);
    let mut weights = vec![0; n * n];
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                let w = rng.gen_range(1..=max_weight);
                weights[u * n + v] = w;
                weights[v * n + u] = w;
            }
        }
    }
    let names: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let index = names.iter().cloned().enumerate().map(|(i, s)| (s, i)).collect();
    CityGraph { names, index, weights }
}

fn build_index(names: &[String]) -> std::result::Result<HashMap<String, NodeId>, InvalidGraphError> {
    let mut index = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if index.insert(name.clone(), i).is_some() {
            return Err(InvalidGraphError::DuplicateName(name.clone()));
        }
    }
    Ok(index)
}

fn checked_weight(from: NodeId, to: NodeId, raw: i64) -> std::result::Result<Weight, InvalidGraphError> {
    if raw < 0 {
        return Err(InvalidGraphError::NegativeWeight { from, to, weight: raw });
    }
    Weight::try_from(raw).map_err(|_| InvalidGraphError::WeightTooLarge { from, to, weight: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn triangle() -> Vec<Vec<i64>> {
        vec![vec![0, 2, 5], vec![2, 0, 1], vec![5, 1, 0]]
    }

    #[test]
    fn matrix_round_trips_through_accessors() {
        let g = CityGraph::from_matrix(["a", "b", "c"], &triangle()).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.weight(0, 2), 5);
        assert_eq!(g.node_index("b"), Some(1));
        assert_eq!(g.node_index("B"), None);
        assert_eq!(g.name(2), "c");
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![(0, 2), (2, 1)]);
    }

    #[test]
    fn rejects_malformed_matrices() {
        assert_eq!(CityGraph::from_matrix(Vec::<String>::new(), &[]), Err(InvalidGraphError::Empty));

        let err = CityGraph::from_matrix(["a", "b"], &[vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(err, InvalidGraphError::NotSquare { row: 1, len: 1, expected: 2 });

        let err = CityGraph::from_matrix(["a"], &triangle()).unwrap_err();
        assert_eq!(err, InvalidGraphError::NameCountMismatch { names: 1, nodes: 3 });

        let err = CityGraph::from_matrix(["a", "b"], &[vec![0, -3], vec![-3, 0]]).unwrap_err();
        assert_eq!(err, InvalidGraphError::NegativeWeight { from: 0, to: 1, weight: -3 });

        let err = CityGraph::from_matrix(["a", "b"], &[vec![0, 4], vec![3, 0]]).unwrap_err();
        assert_eq!(err, InvalidGraphError::Asymmetric { from: 0, to: 1, forward: 4, backward: 3 });

        let err = CityGraph::from_matrix(["a", "b"], &[vec![7, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(err, InvalidGraphError::SelfLoop { node: 0, weight: 7 });

        let err = CityGraph::from_matrix(["a", "a"], &[vec![0, 1], vec![1, 0]]).unwrap_err();
        assert_eq!(err, InvalidGraphError::DuplicateName("a".into()));

        let big = i64::from(u32::MAX) + 1;
        let err = CityGraph::from_matrix(["a", "b"], &[vec![0, big], vec![big, 0]]).unwrap_err();
        assert!(matches!(err, InvalidGraphError::WeightTooLarge { .. }));
    }

    #[test]
    fn edge_list_mirrors_each_edge() {
        let edges = vec![
            EdgeSpec { from: "x".into(), to: "y".into(), weight: 3 },
            EdgeSpec { from: "y".into(), to: "x".into(), weight: 3 },
        ];
        let g = CityGraph::from_edges(["x", "y", "z"], &edges).unwrap();
        assert_eq!(g.weight(1, 0), 3);
        assert_eq!(g.neighbors(2).count(), 0);

        let conflicting = vec![
            EdgeSpec { from: "x".into(), to: "y".into(), weight: 3 },
            EdgeSpec { from: "y".into(), to: "x".into(), weight: 4 },
        ];
        let err = CityGraph::from_edges(["x", "y"], &conflicting).unwrap_err();
        assert_eq!(err, InvalidGraphError::ConflictingEdge { from: 1, to: 0, first: 3, second: 4 });

        let unknown = vec![EdgeSpec { from: "x".into(), to: "q".into(), weight: 1 }];
        let err = CityGraph::from_edges(["x"], &unknown).unwrap_err();
        assert_eq!(err, InvalidGraphError::UnknownCity("q".into()));
    }

    #[test]
    fn json_accepts_matrix_or_edges_but_not_both() {
        let g = CityGraph::from_json_str(r#"{"cities":["a","b"],"matrix":[[0,9],[9,0]]}"#).unwrap();
        assert_eq!(g.weight(0, 1), 9);

        let g = CityGraph::from_json_str(
            r#"{"cities":["a","b"],"edges":[{"from":"a","to":"b","weight":6}]}"#,
        )
        .unwrap();
        assert_eq!(g.weight(1, 0), 6);

        let err = CityGraph::from_json_str(r#"{"cities":["a"]}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(InvalidGraphError::AmbiguousLayout)));

        let err = CityGraph::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn file_layout_round_trips() {
        let g = CityGraph::northern_cities();
        let text = serde_json::to_string(&g.to_file()).unwrap();
        assert_eq!(CityGraph::from_json_str(&text).unwrap(), g);
    }

    #[test]
    fn row_major_graph_is_named_by_index() {
        let g = CityGraph::from_row_major(2, &[0, 1, 1, 0]).unwrap();
        assert_eq!(g.name(1), "1");
        assert!(CityGraph::from_row_major(2, &[0, 1, 1]).is_err());
        assert_eq!(CityGraph::from_row_major(0, &[]), Err(InvalidGraphError::Empty));
    }

    #[test]
    fn northern_cities_is_a_valid_graph() {
        let g = CityGraph::northern_cities();
        let rebuilt = CityGraph::from_row_major(g.len(), g.row_major()).unwrap();
        assert_eq!(rebuilt.row_major(), g.row_major());
        assert_eq!(g.weight(0, 4), 0);
        assert_eq!(g.edge_count(), 9);
    }

    #[test]
    fn random_graph_is_symmetric_and_reproducible() {
        let a = random_graph(30, 0.2, 9, 42);
        let b = random_graph(30, 0.2, 9, 42);
        assert_eq!(a, b);
        for u in a.nodes() {
            assert_eq!(a.weight(u, u), 0);
            for (v, w) in a.neighbors(u) {
                assert!((1..=9).contains(&w));
                assert_eq!(a.weight(v, u), w);
            }
        }
        assert_eq!(random_graph(5, 0.0, 9, 1).edge_count(), 0);
    }

    #[test]
    fn random_graph_tolerates_degenerate_arguments() {
        assert_eq!(random_graph(6, f64::NAN, 9, 3).edge_count(), 0);
        assert_eq!(random_graph(4, 2.5, 9, 3).edge_count(), 6);
        assert_eq!(random_graph(4, -1.0, 9, 3).edge_count(), 0);

        let single = random_graph(0, 0.5, 9, 3);
        assert_eq!(single.len(), 1);
        assert_eq!(single.name(0), "c0");
        assert_eq!(single.edge_count(), 0);
    }
}
