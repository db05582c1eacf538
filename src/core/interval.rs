//! Inclusive value intervals and the ordered containment search used to
//! drill from an entry down to its units and items.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Anything spanning an inclusive value range `[min, max]`.
///
/// Implementors keep `min <= max`; constructors swap inverted bounds.
pub trait Interval {
    fn min(&self) -> f64;
    fn max(&self) -> f64;

    fn contains(&self, value: f64) -> bool {
        self.min() <= value && value <= self.max()
    }

    fn range(&self) -> f64 {
        self.max() - self.min()
    }
}

/// How a container looks for the child whose interval holds a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Binary search; assumes children sorted by `min` and non-overlapping.
    /// Overlapping input yields one of the containing children, or none.
    #[default]
    Binary,
    /// First child, in insertion order, whose interval contains the value.
    Linear,
    /// Binary when the children are sorted and disjoint, linear otherwise.
    Auto,
}

/// Finds the child containing `value` with the given strategy.
#[must_use]
pub fn find_containing<T: Interval>(
    nodes: &[T],
    value: f64,
    strategy: SearchStrategy,
) -> Option<usize> {
    match strategy {
        SearchStrategy::Binary => index_containing(nodes, value),
        SearchStrategy::Linear => index_containing_linear(nodes, value),
        SearchStrategy::Auto if is_sorted_disjoint(nodes) => index_containing(nodes, value),
        SearchStrategy::Auto => index_containing_linear(nodes, value),
    }
}

/// Binary search for the node containing `value`.
///
/// `nodes` must be sorted ascending by `min`. A value falling in the spacing
/// between two nodes is a miss, not an error.
#[must_use]
pub fn index_containing<T: Interval>(nodes: &[T], value: f64) -> Option<usize> {
    let (first, last) = match nodes {
        [] => return None,
        [only] => return only.contains(value).then_some(0),
        [first, .., last] => (first, last),
    };
    if value < first.min() || value > last.max() {
        return None;
    }

    let mut lo = 0;
    let mut hi = nodes.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let node = &nodes[mid];
        if node.contains(value) {
            return Some(mid);
        }
        if value < node.min() {
            hi = mid;
        } else if value > node.max() {
            lo = mid + 1;
        } else {
            // Only reachable for NaN.
            break;
        }
    }

    trace!(value, len = nodes.len(), "no node contains value");
    None
}

#[must_use]
pub fn index_containing_linear<T: Interval>(nodes: &[T], value: f64) -> Option<usize> {
    nodes.iter().position(|node| node.contains(value))
}

/// Returns `true` when nodes are ascending by `min` and no two overlap.
///
/// Touching endpoints (`a.max == b.min`) count as overlap since both nodes
/// contain the shared value.
#[must_use]
pub fn is_sorted_disjoint<T: Interval>(nodes: &[T]) -> bool {
    nodes.windows(2).all(|pair| pair[0].max() < pair[1].min())
}
