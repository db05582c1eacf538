use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;
use crate::core::item::{ItemStyle, StackItem};
use crate::core::primitives::Color;
use crate::core::stack::{AddRejection, Stack, StackChild, StackContainer};

/// Display intent for a unit's shadow line and caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStyle {
    pub icon: Option<String>,
    pub draw_icon: bool,
    pub shadow_color: Color,
    pub draw_shadows: bool,
    pub draw_shadow_caps: bool,
    pub cap_width: f64,
    pub draw_values: bool,
    pub value_color: Color,
}

impl Default for UnitStyle {
    fn default() -> Self {
        Self {
            icon: None,
            draw_icon: false,
            shadow_color: Color::GREEN,
            draw_shadows: true,
            draw_shadow_caps: true,
            cap_width: 0.25,
            draw_values: true,
            value_color: Color::BLUE,
        }
    }
}

/// Vertical column of items with gaps, bounded by `[min, max]`.
///
///```text
///      -----        <-- max
///        |
///  +-----------+    <-- highest
///  | StackItem |
///  +-----------+
///        |
///  +-----------+
///  | StackItem |
///  +-----------+    <-- lowest
///        |
///      -----        <-- min
///```
#[derive(Debug, Clone, PartialEq)]
pub struct StackUnit {
    stack: StackContainer<StackItem>,
    pub style: UnitStyle,
    pub data: Option<serde_json::Value>,
}

impl StackUnit {
    /// Builds an empty unit. Inverted bounds are swapped.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            stack: StackContainer::new(min, max),
            style: UnitStyle::default(),
            data: None,
        }
    }

    /// Builds a unit holding `item` if it fits the bounds.
    #[must_use]
    pub fn with_item(min: f64, max: f64, item: StackItem) -> Self {
        Self::with_items(min, max, [item])
    }

    /// Builds a unit from `items`; items that do not fit are dropped.
    #[must_use]
    pub fn with_items<I>(min: f64, max: f64, items: I) -> Self
    where
        I: IntoIterator<Item = StackItem>,
    {
        let mut unit = Self::new(min, max);
        unit.add_all(items);
        unit
    }

    #[must_use]
    pub fn with_style(mut self, style: UnitStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Why `item` would be refused by [`StackUnit::add`], if at all.
    #[must_use]
    pub fn rejection(&self, item: &StackItem) -> Option<AddRejection> {
        self.stack.rejection(item)
    }

    /// Adds `item` if its x matches the other items and it lies within bounds.
    ///
    /// Once the unit belongs to an entry, items must sit at the entry's x.
    pub fn add(&mut self, item: StackItem) -> bool {
        self.stack.add(item)
    }

    /// Tries every item; returns `true` only if all were added.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = StackItem>,
    {
        self.stack.add_all(items)
    }

    #[must_use]
    pub fn items(&self) -> &[StackItem] {
        self.children()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&StackItem> {
        self.child(index)
    }

    /// Display style of one item. Bounds and x stay read-only.
    pub fn item_style_mut(&mut self, index: usize) -> Option<&mut ItemStyle> {
        self.stack
            .children_mut()
            .get_mut(index)
            .map(|item| &mut item.style)
    }

    pub(crate) fn set_items_x(&mut self, x: f64) {
        for item in self.stack.children_mut() {
            item.set_x(x);
        }
    }

    pub(crate) fn pin_x(&mut self, x: f64) {
        self.stack.pin_x(x);
    }
}

impl Interval for StackUnit {
    fn min(&self) -> f64 {
        self.stack.min()
    }

    fn max(&self) -> f64 {
        self.stack.max()
    }
}

impl StackChild for StackUnit {
    fn x(&self) -> Option<f64> {
        self.stack.children_x()
    }
}

impl Stack for StackUnit {
    type Child = StackItem;

    fn container(&self) -> &StackContainer<StackItem> {
        &self.stack
    }
}
