use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea, SearchStrategy, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{AxisPresence, TouchMapper};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackChartConfig {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    #[serde(default)]
    pub right_y_range: Option<(f64, f64)>,
    #[serde(default)]
    pub axes: AxisPresence,
    #[serde(default)]
    pub search_strategy: SearchStrategy,
}

impl StackChartConfig {
    /// Creates a config whose plot area fills the viewport.
    #[must_use]
    pub fn new(viewport: Viewport, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            viewport,
            plot_area: viewport.full_plot_area(),
            x_range,
            y_range,
            right_y_range: None,
            axes: AxisPresence::default(),
            search_strategy: SearchStrategy::default(),
        }
    }

    /// Sets the content rect; touches outside it fall into axis gutters.
    #[must_use]
    pub fn with_plot_area(mut self, plot_area: PlotArea) -> Self {
        self.plot_area = plot_area;
        self
    }

    #[must_use]
    pub fn with_right_y_range(mut self, min: f64, max: f64) -> Self {
        self.right_y_range = Some((min, max));
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: AxisPresence) -> Self {
        self.axes = axes;
        self
    }

    #[must_use]
    pub fn with_search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.search_strategy = strategy;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.plot_area.is_valid() || !self.plot_area.fits_within(self.viewport) {
            return Err(ChartError::InvalidConfig(
                "plot area must be non-empty and inside the viewport".to_owned(),
            ));
        }
        validate_range(self.x_range, "x_range")?;
        validate_range(self.y_range, "y_range")?;
        if let Some(range) = self.right_y_range {
            validate_range(range, "right_y_range")?;
        }
        Ok(())
    }

    /// Builds the pixel mapper described by this config.
    pub fn touch_mapper(&self) -> ChartResult<TouchMapper> {
        self.validate()?;
        let mapper = TouchMapper::new(
            self.plot_area,
            self.axes,
            LinearScale::new(self.x_range.0, self.x_range.1)?,
            LinearScale::new(self.y_range.0, self.y_range.1)?,
        );
        match self.right_y_range {
            Some((min, max)) => Ok(mapper.with_right_y_scale(LinearScale::new(min, max)?)),
            None => Ok(mapper),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn validate_range((start, end): (f64, f64), name: &str) -> ChartResult<()> {
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite with start < end"
        )));
    }
    Ok(())
}
