//! stack-chart: nested interval stacks with screen-independent hit resolution.
//!
//! Data is organised as data sets of entries, each entry holding a stack of
//! units and each unit a stack of items. A touch (or a value-space point) is
//! resolved to the deepest node containing it and reported as a
//! [`interaction::StackHighlight`] of indices.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{StackChart, StackChartConfig};
pub use error::{ChartError, ChartResult};
