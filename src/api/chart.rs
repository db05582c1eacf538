use tracing::debug;

use crate::core::{AxisDependency, StackData};
use crate::error::ChartResult;
use crate::extensions::{HighlightEvent, HighlightListener};
use crate::interaction::{HighlightTarget, StackHighlight, StackHighlighter, TouchMapper};

use super::StackChartConfig;

/// Main facade consumed by host views.
///
/// `StackChart` owns one immutable-by-convention data snapshot, the touch
/// mapper derived from its config, the highlighter and the listeners.
/// Structural edits happen on a [`StackChart::working_copy`] that is swapped
/// back in with [`StackChart::set_data`].
pub struct StackChart {
    pub(super) config: StackChartConfig,
    pub(super) mapper: TouchMapper,
    pub(super) highlighter: StackHighlighter,
    pub(super) data: StackData,
    pub(super) highlighted: Option<StackHighlight>,
    pub(super) listeners: Vec<Box<dyn HighlightListener>>,
}

impl std::fmt::Debug for StackChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackChart")
            .field("config", &self.config)
            .field("data", &self.data)
            .field("highlighted", &self.highlighted)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl StackChart {
    pub fn new(config: StackChartConfig, data: StackData) -> ChartResult<Self> {
        let mapper = config.touch_mapper()?;
        Ok(Self {
            config,
            mapper,
            highlighter: StackHighlighter::new(config.search_strategy),
            data,
            highlighted: None,
            listeners: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &StackChartConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &StackData {
        &self.data
    }

    /// Deep copy of the current data for UI-side edits.
    #[must_use]
    pub fn working_copy(&self) -> StackData {
        self.data.clone()
    }

    /// Replaces the whole data snapshot. Any highlight is cleared since its
    /// indices refer to the old structure.
    pub fn set_data(&mut self, data: StackData) {
        self.data = data;
        self.clear_highlight();
        let event = HighlightEvent::DataReplaced {
            sets_len: self.data.sets().len(),
            entries_len: self.data.entry_count(),
        };
        self.emit_highlight_event(event);
    }

    /// Resolves a touch in pixels, stores and announces the result.
    pub fn highlight_at(&mut self, x_px: f64, y_px: f64) -> ChartResult<StackHighlight> {
        let highlight = self
            .highlighter
            .highlight_touch(&self.data, &self.mapper, x_px, y_px)?;
        self.apply_highlight(highlight);
        Ok(highlight)
    }

    /// Resolves a point already in value space.
    pub fn highlight_values(&mut self, x: f64, y: f64) -> StackHighlight {
        let highlight = self.highlighter.resolve(self.data.sets(), x, y);
        self.apply_highlight(highlight);
        highlight
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<StackHighlight> {
        self.highlighted
    }

    #[must_use]
    pub fn highlighted_target(&self) -> Option<HighlightTarget<'_>> {
        self.data.target_for_highlight(self.highlighted.as_ref()?)
    }

    pub fn clear_highlight(&mut self) {
        if self.highlighted.take().is_some() {
            self.emit_highlight_event(HighlightEvent::Cleared);
        }
    }

    /// Maps values to pixels with the chart's scales.
    pub fn map_values_to_pixels(&self, x: f64, y: f64) -> ChartResult<(f64, f64)> {
        self.mapper.to_pixels(x, y, AxisDependency::Left)
    }

    fn apply_highlight(&mut self, highlight: StackHighlight) {
        if highlight.is_null() {
            debug!("touch selected nothing");
            self.clear_highlight();
            return;
        }
        self.highlighted = Some(highlight);
        self.emit_highlight_event(HighlightEvent::Highlighted(highlight));
    }
}
