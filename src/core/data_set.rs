use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::entry::StackEntry;
use crate::core::interval::Interval;
use crate::core::item::StackItem;
use crate::core::primitives::{Color, normalize_bounds};
use crate::core::unit::StackUnit;

/// Value axis a data set is plotted against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetStyle {
    /// Horizontal spacing between neighbouring stacks, in category units.
    pub stack_space: f64,
    pub show_shadow: bool,
    pub shadow_width: f64,
    pub shadow_color: Color,
    pub highlight_enabled: bool,
    pub highlight_color: Color,
}

impl Default for DataSetStyle {
    fn default() -> Self {
        Self {
            stack_space: 0.1,
            show_shadow: true,
            shadow_width: 0.1,
            shadow_color: Color::DARK_GRAY,
            highlight_enabled: true,
            highlight_color: Color::from_rgb8(255, 187, 115),
        }
    }
}

/// Labeled series of entries sharing one category axis.
///
/// `min`/`max` is the chart-wide value range the set is drawn in; the
/// `x_*`/`y_*` extents are derived from the entries and widen on every add.
#[derive(Debug, Clone, PartialEq)]
pub struct StackDataSet {
    label: String,
    min: f64,
    max: f64,
    entries: Vec<StackEntry>,
    x_extent: Option<(f64, f64)>,
    y_extent: Option<(f64, f64)>,
    pub axis_dependency: AxisDependency,
    pub style: DataSetStyle,
}

impl StackDataSet {
    #[must_use]
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        let (min, max) = normalize_bounds(min, max);
        Self {
            label: label.into(),
            min,
            max,
            entries: Vec::new(),
            x_extent: None,
            y_extent: None,
            axis_dependency: AxisDependency::Left,
            style: DataSetStyle::default(),
        }
    }

    /// Builds a set from `entries`; entries repeating an earlier x are dropped.
    #[must_use]
    pub fn with_entries<I>(label: impl Into<String>, min: f64, max: f64, entries: I) -> Self
    where
        I: IntoIterator<Item = StackEntry>,
    {
        let mut set = Self::new(label, min, max);
        for entry in entries {
            set.add_entry(entry);
        }
        set
    }

    #[must_use]
    pub fn with_style(mut self, style: DataSetStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_axis_dependency(mut self, axis: AxisDependency) -> Self {
        self.axis_dependency = axis;
        self
    }

    /// Appends `entry` unless another entry already sits at the same x.
    pub fn add_entry(&mut self, entry: StackEntry) -> bool {
        if self.entries.iter().any(|existing| existing.x() == entry.x()) {
            warn!(
                label = %self.label,
                x = entry.x(),
                "dropping entry with duplicate x"
            );
            return false;
        }

        self.x_extent = Some(widen(self.x_extent, entry.x(), entry.x()));
        self.y_extent = Some(widen(self.y_extent, entry.min(), entry.max()));
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entry(&self, entry_index: usize) -> Option<&StackEntry> {
        self.entries.get(entry_index)
    }

    pub fn entry_mut(&mut self, entry_index: usize) -> Option<&mut StackEntry> {
        self.entries.get_mut(entry_index)
    }

    #[must_use]
    pub fn unit(&self, entry_index: usize, unit_index: usize) -> Option<&StackUnit> {
        self.entry(entry_index)?.unit(unit_index)
    }

    #[must_use]
    pub fn item(&self, entry_index: usize, unit_index: usize, item_index: usize) -> Option<&StackItem> {
        self.entry(entry_index)?.item(unit_index, item_index)
    }

    #[must_use]
    pub fn index_of(&self, entry: &StackEntry) -> Option<usize> {
        self.entries.iter().position(|candidate| candidate == entry)
    }

    /// Index of the entry whose x is nearest to `x`; the first one wins ties.
    #[must_use]
    pub fn nearest_entry_index(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| OrderedFloat((entry.x() - x).abs()))
            .map(|(index, _)| index)
    }

    /// Smallest entry x, or `None` for an empty set.
    #[must_use]
    pub fn x_min(&self) -> Option<f64> {
        self.x_extent.map(|(min, _)| min)
    }

    #[must_use]
    pub fn x_max(&self) -> Option<f64> {
        self.x_extent.map(|(_, max)| max)
    }

    /// Smallest entry min, or `None` for an empty set.
    #[must_use]
    pub fn y_min(&self) -> Option<f64> {
        self.y_extent.map(|(min, _)| min)
    }

    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.y_extent.map(|(_, max)| max)
    }
}

impl Interval for StackDataSet {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}

fn widen(extent: Option<(f64, f64)>, low: f64, high: f64) -> (f64, f64) {
    match extent {
        Some((min, max)) => (min.min(low), max.max(high)),
        None => (low, high),
    }
}

/// All data sets of one chart, in draw and tie-break order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackData {
    sets: Vec<StackDataSet>,
}

impl StackData {
    #[must_use]
    pub fn new(sets: Vec<StackDataSet>) -> Self {
        Self { sets }
    }

    pub fn add_set(&mut self, set: StackDataSet) {
        self.sets.push(set);
    }

    #[must_use]
    pub fn sets(&self) -> &[StackDataSet] {
        &self.sets
    }

    #[must_use]
    pub fn set(&self, index: usize) -> Option<&StackDataSet> {
        self.sets.get(index)
    }

    pub fn set_mut(&mut self, index: usize) -> Option<&mut StackDataSet> {
        self.sets.get_mut(index)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sets.iter().map(StackDataSet::len).sum()
    }
}
