use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::interaction::StackHighlight;

/// Event stream exposed to highlight listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HighlightEvent {
    Highlighted(StackHighlight),
    Cleared,
    DataReplaced { sets_len: usize, entries_len: usize },
}

/// Observer hook injected into a [`crate::api::StackChart`].
///
/// Listeners see every highlight change without touching chart internals.
/// This replaces process-wide debug toggles: a host that wants selection
/// logs registers a listener (or a `tracing` filter) for one chart.
pub trait HighlightListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: HighlightEvent);
}

/// Listener that records every event; handy for tests and diagnostics.
///
/// Clones share one event log, so a host can keep a handle after boxing a
/// clone into the chart.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    id: String,
    events: Rc<RefCell<Vec<HighlightEvent>>>,
}

impl RecordingListener {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            events: Rc::default(),
        }
    }

    #[must_use]
    pub fn events(&self) -> Vec<HighlightEvent> {
        self.events.borrow().clone()
    }
}

impl HighlightListener for RecordingListener {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: HighlightEvent) {
        self.events.borrow_mut().push(event);
    }
}
