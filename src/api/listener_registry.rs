use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::extensions::{HighlightEvent, HighlightListener};

use super::StackChart;

impl StackChart {
    /// Adds a listener. Ids are non-empty and unique per chart.
    pub fn register_listener(&mut self, listener: Box<dyn HighlightListener>) -> ChartResult<()> {
        match listener.id() {
            "" => Err(ChartError::InvalidData(
                "highlight listeners need a non-empty id".to_owned(),
            )),
            id if self.has_listener(id) => Err(ChartError::InvalidData(format!(
                "highlight listener `{id}` is registered twice"
            ))),
            _ => {
                self.listeners.push(listener);
                Ok(())
            }
        }
    }

    /// Detaches the listener with `listener_id` and hands it back.
    pub fn unregister_listener(
        &mut self,
        listener_id: &str,
    ) -> Option<Box<dyn HighlightListener>> {
        let position = self.listener_position(listener_id)?;
        Some(self.listeners.remove(position))
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listener_position(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn listener_position(&self, listener_id: &str) -> Option<usize> {
        self.listeners
            .iter()
            .position(|listener| listener.id() == listener_id)
    }

    pub(super) fn emit_highlight_event(&mut self, event: HighlightEvent) {
        trace!(?event, listeners = self.listeners.len(), "emitting highlight event");
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }
}
