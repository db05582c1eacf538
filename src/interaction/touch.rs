use serde::{Deserialize, Serialize};

use crate::core::{AxisDependency, LinearScale, PlotArea};
use crate::error::ChartResult;

use super::AxisEdge;

/// Which axes are drawn and therefore own a touch gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPresence {
    pub x_axis: bool,
    pub left_axis: bool,
    pub right_axis: bool,
}

impl Default for AxisPresence {
    fn default() -> Self {
        Self {
            x_axis: true,
            left_axis: true,
            right_axis: false,
        }
    }
}

/// Pixel-space view of the plot: gutters and pixel to value transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchMapper {
    plot_area: PlotArea,
    axes: AxisPresence,
    x_scale: LinearScale,
    y_scale: LinearScale,
    right_y_scale: Option<LinearScale>,
}

impl TouchMapper {
    #[must_use]
    pub fn new(
        plot_area: PlotArea,
        axes: AxisPresence,
        x_scale: LinearScale,
        y_scale: LinearScale,
    ) -> Self {
        Self {
            plot_area,
            axes,
            x_scale,
            y_scale,
            right_y_scale: None,
        }
    }

    /// Uses a separate value scale for right-axis data sets.
    #[must_use]
    pub fn with_right_y_scale(mut self, scale: LinearScale) -> Self {
        self.right_y_scale = Some(scale);
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    /// Gutter hit by the pixel, checked in x, left, right order.
    #[must_use]
    pub fn axis_edge(&self, x_px: f64, y_px: f64) -> Option<AxisEdge> {
        if self.axes.x_axis && y_px > self.plot_area.bottom {
            Some(AxisEdge::X)
        } else if self.axes.left_axis && x_px < self.plot_area.left {
            Some(AxisEdge::Left)
        } else if self.axes.right_axis && x_px > self.plot_area.right {
            Some(AxisEdge::Right)
        } else {
            None
        }
    }

    /// Maps a pixel to `(x, y)` values against the given value axis.
    pub fn to_values(&self, x_px: f64, y_px: f64, axis: AxisDependency) -> ChartResult<(f64, f64)> {
        let area = self.plot_area;
        let x = self.x_scale.pixel_to_domain(x_px, area.left, area.right)?;
        let y = self
            .value_scale(axis)
            .pixel_to_domain(y_px, area.bottom, area.top)?;
        Ok((x, y))
    }

    /// Inverse of [`TouchMapper::to_values`].
    pub fn to_pixels(&self, x: f64, y: f64, axis: AxisDependency) -> ChartResult<(f64, f64)> {
        let area = self.plot_area;
        let x_px = self.x_scale.domain_to_pixel(x, area.left, area.right)?;
        let y_px = self
            .value_scale(axis)
            .domain_to_pixel(y, area.bottom, area.top)?;
        Ok((x_px, y_px))
    }

    fn value_scale(&self, axis: AxisDependency) -> LinearScale {
        match (axis, self.right_y_scale) {
            (AxisDependency::Right, Some(scale)) => scale,
            _ => self.y_scale,
        }
    }
}
