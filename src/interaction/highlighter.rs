use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    AxisDependency, Interval, SearchStrategy, Stack, StackData, StackDataSet, StackEntry,
};
use crate::error::ChartResult;

use super::{AxisEdge, StackHighlight, TouchMapper};

/// Picks the candidate entry of a data set for a query point.
///
/// This is the seam where a host plugs in its own notion of "closest entry"
/// (e.g. one computed in pixel space).
pub trait EntryLocator {
    fn locate(&self, set: &StackDataSet, x: f64, y: f64) -> Option<usize>;
}

/// Chooses the entry whose x is nearest to the query x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestXLocator;

impl EntryLocator for NearestXLocator {
    fn locate(&self, set: &StackDataSet, x: f64, _y: f64) -> Option<usize> {
        set.nearest_entry_index(x)
    }
}

/// Query point in value space plus the pixel it came from.
///
/// Pixel coordinates are carried through to the result untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightQuery {
    pub x: f64,
    pub y: f64,
    pub x_px: f64,
    pub y_px: f64,
}

impl HighlightQuery {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            x_px: 0.0,
            y_px: 0.0,
        }
    }

    #[must_use]
    pub fn with_pixels(mut self, x_px: f64, y_px: f64) -> Self {
        self.x_px = x_px;
        self.y_px = y_px;
        self
    }
}

/// Resolves a query point to the most specific entry, unit or item.
#[derive(Debug, Clone, Default)]
pub struct StackHighlighter<L = NearestXLocator> {
    locator: L,
    strategy: SearchStrategy,
}

impl StackHighlighter<NearestXLocator> {
    #[must_use]
    pub fn new(strategy: SearchStrategy) -> Self {
        Self::with_locator(NearestXLocator, strategy)
    }
}

impl<L: EntryLocator> StackHighlighter<L> {
    #[must_use]
    pub fn with_locator(locator: L, strategy: SearchStrategy) -> Self {
        Self { locator, strategy }
    }

    #[must_use]
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: SearchStrategy) {
        self.strategy = strategy;
    }

    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Resolves `(x, y)` across `sets` with no pixel information.
    #[must_use]
    pub fn resolve(&self, sets: &[StackDataSet], x: f64, y: f64) -> StackHighlight {
        self.resolve_query(sets, HighlightQuery::new(x, y))
    }

    /// Resolves one query across all sets.
    ///
    /// Each set yields at most one candidate; the candidate whose entry x is
    /// closest to the query x wins, earlier sets winning ties. Without any
    /// candidate the null highlight is returned.
    #[must_use]
    pub fn resolve_query(&self, sets: &[StackDataSet], query: HighlightQuery) -> StackHighlight {
        self.resolve_per_set(sets, |_| query)
    }

    /// Full touch pipeline: axis gutters first, then data drill-down with the
    /// value axis each set is bound to.
    pub fn highlight_touch(
        &self,
        data: &StackData,
        mapper: &TouchMapper,
        x_px: f64,
        y_px: f64,
    ) -> ChartResult<StackHighlight> {
        if let Some(edge) = mapper.axis_edge(x_px, y_px) {
            let axis = match edge {
                AxisEdge::Right => AxisDependency::Right,
                AxisEdge::X | AxisEdge::Left => AxisDependency::Left,
            };
            let (x, y) = mapper.to_values(x_px, y_px, axis)?;
            debug!(?edge, x, y, "touch landed on axis gutter");
            return Ok(StackHighlight::axis(edge, x, y).with_pixels(x_px, y_px));
        }

        let (x, left_y) = mapper.to_values(x_px, y_px, AxisDependency::Left)?;
        let (_, right_y) = mapper.to_values(x_px, y_px, AxisDependency::Right)?;
        Ok(self.resolve_per_set(data.sets(), |set| {
            let y = match set.axis_dependency {
                AxisDependency::Left => left_y,
                AxisDependency::Right => right_y,
            };
            HighlightQuery::new(x, y).with_pixels(x_px, y_px)
        }))
    }

    /// Drills from `entry` into its units and items at value `y`.
    ///
    /// Returns `(unit_index, item_index)`; the item is only searched when a
    /// unit was found.
    #[must_use]
    pub fn drill_down(&self, entry: &StackEntry, y: f64) -> (Option<usize>, Option<usize>) {
        let unit_index = entry.index_containing(y, self.strategy);
        let item_index = unit_index
            .and_then(|index| entry.unit(index))
            .and_then(|unit| unit.index_containing(y, self.strategy));
        (unit_index, item_index)
    }

    fn resolve_per_set<F>(&self, sets: &[StackDataSet], query_for: F) -> StackHighlight
    where
        F: Fn(&StackDataSet) -> HighlightQuery,
    {
        let mut candidates: SmallVec<[(OrderedFloat<f64>, StackHighlight); 4]> = SmallVec::new();
        for (set_index, set) in sets.iter().enumerate() {
            if let Some(candidate) = self.resolve_set(set_index, set, query_for(set)) {
                candidates.push(candidate);
            }
        }

        let best = candidates
            .into_iter()
            .min_by_key(|candidate| candidate.0)
            .map(|(_, highlight)| highlight);
        debug!(resolved = ?best, "resolved highlight");
        best.unwrap_or_else(StackHighlight::null)
    }

    fn resolve_set(
        &self,
        set_index: usize,
        set: &StackDataSet,
        query: HighlightQuery,
    ) -> Option<(OrderedFloat<f64>, StackHighlight)> {
        let entry_index = self.locator.locate(set, query.x, query.y)?;
        let entry = set.entry(entry_index)?;
        if !entry.contains(query.y) {
            debug!(
                set_index,
                entry_index,
                y = query.y,
                "query value outside closest entry"
            );
            return None;
        }

        let (unit_index, item_index) = self.drill_down(entry, query.y);
        debug!(
            set_index,
            entry_index,
            ?unit_index,
            ?item_index,
            "drilled into entry"
        );
        let highlight = StackHighlight::value(
            query.x,
            query.y,
            set_index,
            entry_index,
            unit_index,
            item_index,
            set.axis_dependency,
        )
        .with_pixels(query.x_px, query.y_px);
        Some((OrderedFloat((entry.x() - query.x).abs()), highlight))
    }
}
