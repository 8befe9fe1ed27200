//! Distances, weights and the relaxation record stored in the priority queue.
//!
//! `Distance` carries an explicit infinity sentinel (`u64::MAX`). All path
//! arithmetic goes through [`Distance::saturating_add`], so relaxing an edge
//! out of an unreachable node keeps the candidate at infinity instead of
//! wrapping.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Dense node identity, `0..graph.len()`.
pub type NodeId = usize;

/// Edge weight. `0` is reserved for "no edge".
pub type Weight = u32;

/// Tentative or finalized path length from the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Distance = Distance(0);
    /// Sentinel for "not reached". Exceeds every real path sum.
    pub const INFINITY: Distance = Distance(u64::MAX);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Distance(value)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0 != u64::MAX
    }

    /// Finite value, or `None` for the sentinel.
    #[inline]
    pub fn get(self) -> Option<u64> {
        self.is_finite().then_some(self.0)
    }

    /// Raw value; `u64::MAX` for infinity.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Extends the distance by one edge. Infinity absorbs; finite sums clamp
    /// at infinity.
    #[inline]
    pub fn saturating_add(self, weight: Weight) -> Distance {
        if !self.is_finite() {
            return Distance::INFINITY;
        }
        Distance(self.0.saturating_add(u64::from(weight)))
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("inf"),
        }
    }
}

// Infinity serializes as `null`.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(v) => serializer.serialize_some(&v),
            None => serializer.serialize_none(),
        }
    }
}

/// Queue entry: a node and its tentative distance.
///
/// Ordered by `distance`, then by `node` so that equal-distance records leave
/// the queue in a deterministic order regardless of insertion history.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RelaxRecord {
    pub distance: Distance,
    pub node: NodeId,
}

impl RelaxRecord {
    #[inline]
    pub fn new(node: NodeId, distance: Distance) -> Self {
        Self { distance, node }
    }
}

impl Ord for RelaxRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for RelaxRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RelaxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.node, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_absorbs_edge_weights() {
        assert_eq!(Distance::INFINITY.saturating_add(1), Distance::INFINITY);
        assert_eq!(
            Distance::INFINITY.saturating_add(Weight::MAX),
            Distance::INFINITY
        );
        assert!(!Distance::INFINITY.is_finite());
    }

    #[test]
    fn finite_sum_clamps_instead_of_wrapping() {
        let near = Distance::new(u64::MAX - 3);
        assert_eq!(near.saturating_add(10), Distance::INFINITY);
        assert_eq!(Distance::new(34).saturating_add(39), Distance::new(73));
    }

    #[test]
    fn records_order_by_distance_first() {
        let near = RelaxRecord::new(4, Distance::new(3));
        let far = RelaxRecord::new(0, Distance::new(9));
        assert!(near < far);
        assert!(RelaxRecord::new(9, Distance::ZERO) < RelaxRecord::new(0, Distance::INFINITY));
    }

    #[test]
    fn equal_distances_tie_break_on_node() {
        let a = RelaxRecord::new(1, Distance::INFINITY);
        let b = RelaxRecord::new(2, Distance::INFINITY);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn display_and_serialize_use_inf_and_null() {
        assert_eq!(Distance::new(98).to_string(), "98");
        assert_eq!(Distance::INFINITY.to_string(), "inf");
        assert_eq!(serde_json::to_string(&Distance::new(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Distance::INFINITY).unwrap(), "null");
        assert_eq!(RelaxRecord::new(2, Distance::new(7)).to_string(), "(2, 7)");
    }
}
