use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;
use crate::core::item::{ItemStyle, StackItem};
use crate::core::primitives::Color;
use crate::core::stack::{AddRejection, Stack, StackContainer};
use crate::core::unit::{StackUnit, UnitStyle};

/// Display intent for an entry's shadow, caps and icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryStyle {
    pub icon: Option<String>,
    pub draw_icon: bool,
    pub draw_shadow: bool,
    pub shadow_color: Color,
    pub draw_shadow_caps: bool,
    pub cap_width: f64,
    pub draw_values: bool,
    pub value_color: Color,
}

impl Default for EntryStyle {
    fn default() -> Self {
        Self {
            icon: None,
            draw_icon: false,
            draw_shadow: true,
            shadow_color: Color::BLACK,
            draw_shadow_caps: true,
            cap_width: 0.5,
            draw_values: true,
            value_color: Color::BLACK,
        }
    }
}

/// Top-level stack placed at category `x`, holding units.
///
/// Units are ordered by caller; hit resolution expects them ascending by
/// `min` with spacing between them.
#[derive(Debug, Clone, PartialEq)]
pub struct StackEntry {
    x: f64,
    stack: StackContainer<StackUnit>,
    pub style: EntryStyle,
    pub data: Option<serde_json::Value>,
}

impl StackEntry {
    /// Builds an empty entry. Inverted bounds are swapped.
    #[must_use]
    pub fn new(x: f64, min: f64, max: f64) -> Self {
        Self {
            x,
            stack: StackContainer::pinned(min, max, x),
            style: EntryStyle::default(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_unit(x: f64, min: f64, max: f64, unit: StackUnit) -> Self {
        Self::with_units(x, min, max, [unit])
    }

    /// Builds an entry from `units`.
    ///
    /// Every item of every unit is moved to the entry's `x` first; units that
    /// then fall outside `[min, max]` are dropped.
    #[must_use]
    pub fn with_units<I>(x: f64, min: f64, max: f64, units: I) -> Self
    where
        I: IntoIterator<Item = StackUnit>,
    {
        let mut entry = Self::new(x, min, max);
        entry.add_all(units.into_iter().map(|mut unit| {
            unit.set_items_x(x);
            unit
        }));
        entry
    }

    #[must_use]
    pub fn with_style(mut self, style: EntryStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Why `unit` would be refused by [`StackEntry::add`], if at all.
    #[must_use]
    pub fn rejection(&self, unit: &StackUnit) -> Option<AddRejection> {
        self.stack.rejection(unit)
    }

    /// Adds `unit` if its items sit at the entry's x and it lies within bounds.
    ///
    /// An accepted unit stays pinned to the entry's x, so items added to it
    /// later must match too.
    pub fn add(&mut self, mut unit: StackUnit) -> bool {
        unit.pin_x(self.x);
        self.stack.add(unit)
    }

    /// Tries every unit; returns `true` only if all were added.
    pub fn add_all<I>(&mut self, units: I) -> bool
    where
        I: IntoIterator<Item = StackUnit>,
    {
        let x = self.x;
        self.stack.add_all(units.into_iter().map(|mut unit| {
            unit.pin_x(x);
            unit
        }))
    }

    #[must_use]
    pub fn units(&self) -> &[StackUnit] {
        self.children()
    }

    #[must_use]
    pub fn unit(&self, unit_index: usize) -> Option<&StackUnit> {
        self.child(unit_index)
    }

    #[must_use]
    pub fn item(&self, unit_index: usize, item_index: usize) -> Option<&StackItem> {
        self.unit(unit_index)?.item(item_index)
    }

    /// Edit handle on one unit; see [`UnitMut`].
    pub fn unit_mut(&mut self, unit_index: usize) -> Option<UnitMut<'_>> {
        self.stack
            .children_mut()
            .get_mut(unit_index)
            .map(|unit| UnitMut { unit })
    }

    pub fn item_style_mut(
        &mut self,
        unit_index: usize,
        item_index: usize,
    ) -> Option<&mut ItemStyle> {
        self.stack
            .children_mut()
            .get_mut(unit_index)?
            .item_style_mut(item_index)
    }
}

/// Mutable view of a unit owned by an entry.
///
/// Only checked adds and display state are writable; the unit itself cannot
/// be swapped out, so its bounds and x stay consistent with the entry.
#[derive(Debug)]
pub struct UnitMut<'a> {
    unit: &'a mut StackUnit,
}

impl UnitMut<'_> {
    pub fn add(&mut self, item: StackItem) -> bool {
        self.unit.add(item)
    }

    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = StackItem>,
    {
        self.unit.add_all(items)
    }

    pub fn style_mut(&mut self) -> &mut UnitStyle {
        &mut self.unit.style
    }

    pub fn data_mut(&mut self) -> &mut Option<serde_json::Value> {
        &mut self.unit.data
    }

    pub fn item_style_mut(&mut self, index: usize) -> Option<&mut ItemStyle> {
        self.unit.item_style_mut(index)
    }
}

impl Deref for UnitMut<'_> {
    type Target = StackUnit;

    fn deref(&self) -> &StackUnit {
        self.unit
    }
}

impl Interval for StackEntry {
    fn min(&self) -> f64 {
        self.stack.min()
    }

    fn max(&self) -> f64 {
        self.stack.max()
    }
}

impl Stack for StackEntry {
    type Child = StackUnit;

    fn container(&self) -> &StackContainer<StackUnit> {
        &self.stack
    }
}
