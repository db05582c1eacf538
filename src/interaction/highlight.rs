use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::AxisDependency;

/// Chart edge a touch landed on instead of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    X,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightKind {
    /// Nothing was selected.
    Null,
    /// A data element was selected; see [`StackHighlight::level`].
    Value,
    /// An axis gutter was touched; no data indices are set.
    Axis(AxisEdge),
}

/// How deep a value highlight drilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HighlightLevel {
    None,
    Entry,
    Unit,
    Item,
}

/// Result of a hit test.
///
/// Holds indices, never references, so it is only meaningful while the data
/// it was resolved against keeps its structure. Indices are nested: an item
/// index implies a unit index, which implies entry and data set indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackHighlight {
    pub x: f64,
    pub y: f64,
    pub x_px: f64,
    pub y_px: f64,
    kind: HighlightKind,
    data_set_index: Option<usize>,
    entry_index: Option<usize>,
    unit_index: Option<usize>,
    item_index: Option<usize>,
    axis: AxisDependency,
}

impl StackHighlight {
    /// Highlight for a data element. `item_index` is dropped without a unit.
    #[must_use]
    pub fn value(
        x: f64,
        y: f64,
        data_set_index: usize,
        entry_index: usize,
        unit_index: Option<usize>,
        item_index: Option<usize>,
        axis: AxisDependency,
    ) -> Self {
        Self {
            x,
            y,
            x_px: 0.0,
            y_px: 0.0,
            kind: HighlightKind::Value,
            data_set_index: Some(data_set_index),
            entry_index: Some(entry_index),
            unit_index,
            item_index: unit_index.and(item_index),
            axis,
        }
    }

    #[must_use]
    pub fn axis(edge: AxisEdge, x: f64, y: f64) -> Self {
        Self {
            kind: HighlightKind::Axis(edge),
            x,
            y,
            axis: match edge {
                AxisEdge::Right => AxisDependency::Right,
                AxisEdge::X | AxisEdge::Left => AxisDependency::Left,
            },
            ..Self::null()
        }
    }

    /// The "nothing selected" highlight: zero coordinates, no indices.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_px: 0.0,
            y_px: 0.0,
            kind: HighlightKind::Null,
            data_set_index: None,
            entry_index: None,
            unit_index: None,
            item_index: None,
            axis: AxisDependency::Left,
        }
    }

    #[must_use]
    pub fn with_pixels(mut self, x_px: f64, y_px: f64) -> Self {
        self.x_px = x_px;
        self.y_px = y_px;
        self
    }

    #[must_use]
    pub fn kind(&self) -> HighlightKind {
        self.kind
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind == HighlightKind::Null
    }

    #[must_use]
    pub fn axis_dependency(&self) -> AxisDependency {
        self.axis
    }

    #[must_use]
    pub fn data_set_index(&self) -> Option<usize> {
        self.data_set_index
    }

    #[must_use]
    pub fn entry_index(&self) -> Option<usize> {
        self.entry_index
    }

    #[must_use]
    pub fn unit_index(&self) -> Option<usize> {
        self.unit_index
    }

    #[must_use]
    pub fn item_index(&self) -> Option<usize> {
        self.item_index
    }

    #[must_use]
    pub fn level(&self) -> HighlightLevel {
        match (self.entry_index, self.unit_index, self.item_index) {
            (Some(_), Some(_), Some(_)) => HighlightLevel::Item,
            (Some(_), Some(_), None) => HighlightLevel::Unit,
            (Some(_), None, _) => HighlightLevel::Entry,
            (None, ..) => HighlightLevel::None,
        }
    }

    /// Flat index form with `-1` for "not applicable".
    #[must_use]
    pub fn indices(&self) -> HighlightIndices {
        HighlightIndices {
            data_set: encode_index(self.data_set_index),
            entry: encode_index(self.entry_index),
            unit: encode_index(self.unit_index),
            item: encode_index(self.item_index),
        }
    }

    /// Re-establishes index nesting, e.g. after deserializing untrusted input.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.kind != HighlightKind::Value || self.data_set_index.is_none() {
            self.entry_index = None;
        }
        if self.entry_index.is_none() {
            self.unit_index = None;
        }
        if self.unit_index.is_none() {
            self.item_index = None;
        }
        if self.kind == HighlightKind::Value && self.entry_index.is_none() {
            self.kind = HighlightKind::Null;
        }
        if self.kind != HighlightKind::Value {
            self.data_set_index = None;
        }
        self
    }
}

impl Default for StackHighlight {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for StackHighlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices = self.indices();
        write!(
            f,
            "x: {:.1}, y: {:.1}, set: {}, entry: {}, unit: {}, item: {}",
            self.x, self.y, indices.data_set, indices.entry, indices.unit, indices.item
        )
    }
}

/// Sentinel-encoded highlight indices, `-1` meaning "not applicable".
///
/// Consumers must never use a negative value as an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightIndices {
    pub data_set: i64,
    pub entry: i64,
    pub unit: i64,
    pub item: i64,
}

impl HighlightIndices {
    pub const NONE: Self = Self {
        data_set: -1,
        entry: -1,
        unit: -1,
        item: -1,
    };

    /// Rebuilds a value highlight at `(x, y)`, or the null highlight when no
    /// data set and entry are encoded.
    #[must_use]
    pub fn to_highlight(self, x: f64, y: f64, axis: AxisDependency) -> StackHighlight {
        match (decode_index(self.data_set), decode_index(self.entry)) {
            (Some(data_set), Some(entry)) => StackHighlight::value(
                x,
                y,
                data_set,
                entry,
                decode_index(self.unit),
                decode_index(self.item),
                axis,
            ),
            _ => StackHighlight::null(),
        }
    }
}

fn encode_index(index: Option<usize>) -> i64 {
    index
        .and_then(|value| i64::try_from(value).ok())
        .unwrap_or(-1)
}

fn decode_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
