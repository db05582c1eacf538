//! Generic bounded container shared by units (holding items) and entries
//! (holding units).

use thiserror::Error;
use tracing::trace;

use crate::core::interval::{Interval, SearchStrategy, find_containing};
use crate::core::primitives::normalize_bounds;

/// A node that can live inside a [`StackContainer`].
pub trait StackChild: Interval {
    /// Category position of the child, or `None` when it has none yet
    /// (an empty unit).
    fn x(&self) -> Option<f64>;
}

/// Reason a container refuses a child, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AddRejection {
    #[error("child x {found} does not match existing x {expected}")]
    XMismatch { expected: f64, found: f64 },

    #[error("child max {child_max} exceeds container max {max}")]
    AboveMax { child_max: f64, max: f64 },

    #[error("child min {child_min} is below container min {min}")]
    BelowMin { child_min: f64, min: f64 },
}

/// Ordered children bounded by the container's own `[min, max]`.
///
/// Every child shares one x, and lies within the bounds. Children are
/// appended in caller order; the container never reorders them. A pinned
/// container fixes that x up front instead of taking it from its children.
#[derive(Debug, Clone, PartialEq)]
pub struct StackContainer<C> {
    min: f64,
    max: f64,
    pinned_x: Option<f64>,
    children: Vec<C>,
}

impl<C: StackChild> StackContainer<C> {
    /// Creates an empty container, swapping inverted bounds.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = normalize_bounds(min, max);
        Self {
            min,
            max,
            pinned_x: None,
            children: Vec::new(),
        }
    }

    /// Creates an empty container whose children must all sit at `x`.
    #[must_use]
    pub fn pinned(min: f64, max: f64, x: f64) -> Self {
        let mut container = Self::new(min, max);
        container.pinned_x = Some(x);
        container
    }

    /// Returns why `child` would be refused, or `None` if it fits.
    #[must_use]
    pub fn rejection(&self, child: &C) -> Option<AddRejection> {
        if let (Some(expected), Some(found)) = (self.expected_x(), child.x()) {
            if expected != found {
                return Some(AddRejection::XMismatch { expected, found });
            }
        }
        if child.max() > self.max {
            return Some(AddRejection::AboveMax {
                child_max: child.max(),
                max: self.max,
            });
        }
        if child.min() < self.min {
            return Some(AddRejection::BelowMin {
                child_min: child.min(),
                min: self.min,
            });
        }
        None
    }

    /// Appends `child` if it fits. The container is untouched on failure.
    pub fn add(&mut self, child: C) -> bool {
        match self.rejection(&child) {
            Some(reason) => {
                trace!(%reason, "rejected stack child");
                false
            }
            None => {
                self.children.push(child);
                true
            }
        }
    }

    /// Tries every child in order, without stopping at the first failure.
    ///
    /// Returns `true` only if all children were added.
    pub fn add_all<I>(&mut self, children: I) -> bool
    where
        I: IntoIterator<Item = C>,
    {
        children
            .into_iter()
            .fold(true, |all_added, child| self.add(child) && all_added)
    }

    /// The x shared by the children, taken from the first child that has one.
    #[must_use]
    pub fn children_x(&self) -> Option<f64> {
        self.children.iter().find_map(StackChild::x)
    }

    /// The x a new child has to match: the pinned x, else the children's.
    #[must_use]
    pub fn expected_x(&self) -> Option<f64> {
        self.pinned_x.or_else(|| self.children_x())
    }

    pub(crate) fn pin_x(&mut self, x: f64) {
        self.pinned_x = Some(x);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }
}

impl<C> Interval for StackContainer<C> {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}

/// Read API shared by every interval-bearing composite.
pub trait Stack: Interval {
    type Child: StackChild;

    fn container(&self) -> &StackContainer<Self::Child>;

    fn children(&self) -> &[Self::Child] {
        &self.container().children
    }

    /// Largest child max, or the container's own max when empty.
    fn highest(&self) -> f64 {
        self.children()
            .iter()
            .map(Interval::max)
            .reduce(f64::max)
            .unwrap_or_else(|| self.max())
    }

    /// Smallest child min, or the container's own min when empty.
    fn lowest(&self) -> f64 {
        self.children()
            .iter()
            .map(Interval::min)
            .reduce(f64::min)
            .unwrap_or_else(|| self.min())
    }

    fn middle(&self) -> f64 {
        (self.highest() + self.lowest()) / 2.0
    }

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    fn child(&self, index: usize) -> Option<&Self::Child> {
        self.children().get(index)
    }

    /// Linear lookup of the first child equal to `child`.
    fn index_of(&self, child: &Self::Child) -> Option<usize>
    where
        Self::Child: PartialEq,
    {
        self.children().iter().position(|candidate| candidate == child)
    }

    fn index_containing(&self, value: f64, strategy: SearchStrategy) -> Option<usize> {
        find_containing(self.children(), value, strategy)
    }
}

impl<C: StackChild> Stack for StackContainer<C> {
    type Child = C;

    fn container(&self) -> &StackContainer<C> {
        self
    }
}
