use crate::core::{Interval, StackData, StackEntry, StackItem, StackUnit};

use super::{HighlightKind, HighlightLevel, StackHighlight};

/// The node a value highlight points at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighlightTarget<'a> {
    Entry(&'a StackEntry),
    Unit(&'a StackUnit),
    Item(&'a StackItem),
}

impl HighlightTarget<'_> {
    #[must_use]
    pub fn level(&self) -> HighlightLevel {
        match self {
            Self::Entry(_) => HighlightLevel::Entry,
            Self::Unit(_) => HighlightLevel::Unit,
            Self::Item(_) => HighlightLevel::Item,
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        match self {
            Self::Entry(entry) => entry.min(),
            Self::Unit(unit) => unit.min(),
            Self::Item(item) => item.min(),
        }
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        match self {
            Self::Entry(entry) => entry.max(),
            Self::Unit(unit) => unit.max(),
            Self::Item(item) => item.max(),
        }
    }
}

/// Value-space box a renderer outlines for a highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBounds {
    pub x: f64,
    pub min: f64,
    pub max: f64,
    pub level: HighlightLevel,
}

impl StackData {
    /// Entry a value highlight refers to, if its indices are still valid.
    #[must_use]
    pub fn entry_for_highlight(&self, highlight: &StackHighlight) -> Option<&StackEntry> {
        if highlight.kind() != HighlightKind::Value {
            return None;
        }
        self.set(highlight.data_set_index()?)?
            .entry(highlight.entry_index()?)
    }

    /// Most specific node a highlight selects.
    ///
    /// Returns `None` for null and axis highlights, for data sets with
    /// highlighting disabled, and when any index no longer resolves.
    #[must_use]
    pub fn target_for_highlight(&self, highlight: &StackHighlight) -> Option<HighlightTarget<'_>> {
        let set = self.set(highlight.data_set_index()?)?;
        if !set.style.highlight_enabled {
            return None;
        }
        let entry = self.entry_for_highlight(highlight)?;
        let Some(unit_index) = highlight.unit_index() else {
            return Some(HighlightTarget::Entry(entry));
        };
        let unit = entry.unit(unit_index)?;
        match highlight.item_index() {
            Some(item_index) => unit.item(item_index).map(HighlightTarget::Item),
            None => Some(HighlightTarget::Unit(unit)),
        }
    }

    #[must_use]
    pub fn highlight_bounds(&self, highlight: &StackHighlight) -> Option<HighlightBounds> {
        let entry = self.entry_for_highlight(highlight)?;
        let target = self.target_for_highlight(highlight)?;
        Some(HighlightBounds {
            x: entry.x(),
            min: target.min(),
            max: target.max(),
            level: target.level(),
        })
    }
}
