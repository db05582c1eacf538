use std::cmp::Ordering;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::interval::Interval;
use crate::core::primitives::{Color, decimal_to_f64, hours_since_midnight, normalize_bounds};
use crate::core::stack::StackChild;
use crate::error::ChartResult;

/// Display intent for a single item. Opaque to hit resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub color: Color,
    pub icon: Option<String>,
    pub draw_icon: bool,
    pub draw_border: bool,
    pub border_color: Color,
    pub draw_values: bool,
    pub value_color: Color,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(122, 242, 84),
            icon: None,
            draw_icon: false,
            draw_border: true,
            border_color: Color::BLACK,
            draw_values: true,
            value_color: Color::BLUE,
        }
    }
}

impl ItemStyle {
    /// Sets the icon key; enables icon drawing.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.draw_icon = true;
        self
    }
}

/// Leaf interval of a stack: the smallest selectable element.
///
///```text
///  +-----+  <-- max
///  |     |
///  |     |  <-- value
///  |     |
///  +-----+  <-- min
///```
#[derive(Debug, Clone, PartialEq)]
pub struct StackItem {
    x: f64,
    min: f64,
    max: f64,
    pub style: ItemStyle,
    pub data: Option<serde_json::Value>,
}

impl StackItem {
    /// Builds an item at category `x`. Inverted bounds are swapped.
    #[must_use]
    pub fn new(x: f64, min: f64, max: f64) -> Self {
        let (min, max) = normalize_bounds(min, max);
        Self {
            x,
            min,
            max,
            style: ItemStyle::default(),
            data: None,
        }
    }

    pub fn from_decimal(x: f64, min: Decimal, max: Decimal) -> ChartResult<Self> {
        Ok(Self::new(
            x,
            decimal_to_f64(min, "item min")?,
            decimal_to_f64(max, "item max")?,
        ))
    }

    /// Builds an item spanning a time-of-day window, in hours since midnight.
    #[must_use]
    pub fn from_time_of_day(x: f64, start: NaiveTime, end: NaiveTime) -> Self {
        Self::new(x, hours_since_midnight(start), hours_since_midnight(end))
    }

    #[must_use]
    pub fn with_style(mut self, style: ItemStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
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

    pub(crate) fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Midpoint of the item interval.
    #[must_use]
    pub fn value(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Orders by `min`, then by `max`.
    #[must_use]
    pub fn cmp_bounds(&self, other: &Self) -> Ordering {
        self.min
            .total_cmp(&other.min)
            .then_with(|| self.max.total_cmp(&other.max))
    }
}

impl Interval for StackItem {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }
}

impl StackChild for StackItem {
    fn x(&self) -> Option<f64> {
        Some(self.x)
    }
}
