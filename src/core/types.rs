use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Plot area covering the full viewport (no axis gutters).
    #[must_use]
    pub fn full_plot_area(self) -> PlotArea {
        PlotArea::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Content rectangle in pixel space where data is drawn.
///
/// Touches outside this rectangle land in axis gutters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Returns `true` when all edges are finite and the rect has positive area.
    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|edge| edge.is_finite())
            && self.left < self.right
            && self.top < self.bottom
    }

    #[must_use]
    pub fn fits_within(self, viewport: Viewport) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right <= f64::from(viewport.width)
            && self.bottom <= f64::from(viewport.height)
    }

    #[must_use]
    pub fn contains(self, x_px: f64, y_px: f64) -> bool {
        (self.left..=self.right).contains(&x_px) && (self.top..=self.bottom).contains(&y_px)
    }
}
