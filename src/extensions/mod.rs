//! Hooks for hosts that observe chart selection.

pub mod listeners;

pub use listeners::{HighlightEvent, HighlightListener, RecordingListener};
