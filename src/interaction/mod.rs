//! Hit resolution: mapping a touch or value-space point to the entry, unit
//! or item it selects.

pub mod highlight;
pub mod highlighter;
pub mod target;
pub mod touch;

pub use highlight::{AxisEdge, HighlightIndices, HighlightKind, HighlightLevel, StackHighlight};
pub use highlighter::{EntryLocator, HighlightQuery, NearestXLocator, StackHighlighter};
pub use target::{HighlightBounds, HighlightTarget};
pub use touch::{AxisPresence, TouchMapper};
