//! Error types for the crate.
//!
//! - [`EmptyQueueError`]: extraction or peek on an empty priority queue. Always
//!   a caller bug; the engine propagates it instead of recovering.
//! - [`UnreachablePathError`]: a route was requested to a node with no
//!   predecessor chain back to the source. Expected at runtime.
//! - [`InvalidGraphError`]: malformed graph input, rejected before any queue
//!   operation runs.
//! - [`ConfigError`]: bad environment variable or command-line flag.
//!
//! [`Error`] wraps all of them for callers that want a single type.

use crate::record::NodeId;

/// Returned by [`PriorityQueue::extract_min`](crate::queue::PriorityQueue::extract_min)
/// and [`PriorityQueue::peek`](crate::queue::PriorityQueue::peek) when the queue is empty.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("priority queue is empty")]
pub struct EmptyQueueError;

/// No predecessor chain leads from `target` back to `origin`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
// Not named `source`: thiserror reserves that field name for error chaining.
#[error("no path exists from node {origin} to node {target}")]
pub struct UnreachablePathError {
    pub origin: NodeId,
    pub target: NodeId,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphError {
    #[error("graph has no nodes")]
    Empty,

    #[error("{names} names given for {nodes} nodes")]
    NameCountMismatch { names: usize, nodes: usize },

    #[error("duplicate city name: {0}")]
    DuplicateName(String),

    #[error("unknown city in edge list: {0}")]
    UnknownCity(String),

    #[error("matrix row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("negative weight {weight} between {from} and {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: i64 },

    #[error("weight {weight} between {from} and {to} does not fit in 32 bits")]
    WeightTooLarge { from: NodeId, to: NodeId, weight: i64 },

    #[error("asymmetric weights: {from}->{to} is {forward}, {to}->{from} is {backward}")]
    Asymmetric {
        from: NodeId,
        to: NodeId,
        forward: u32,
        backward: u32,
    },

    #[error("self loop of weight {weight} on node {node}")]
    SelfLoop { node: NodeId, weight: u32 },

    #[error("edge {from}-{to} listed twice with weights {first} and {second}")]
    ConflictingEdge {
        from: NodeId,
        to: NodeId,
        first: u32,
        second: u32,
    },

    #[error("graph document must contain exactly one of `matrix` or `edges`")]
    AmbiguousLayout,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueueError),

    #[error(transparent)]
    Unreachable(#[from] UnreachablePathError),

    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("node {node} out of range for a graph of {nodes} nodes")]
    NodeOutOfRange { node: NodeId, nodes: usize },

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
