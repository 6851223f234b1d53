//! Scrubbing over a recorded history.

use influence_core::models::{CascadeHistory, Step};

/// Cursor over the steps of a `CascadeHistory`.
///
/// Positions are clamped to the history, so scrubbing past either end
/// stays on the first or last step.
#[derive(Debug, Clone)]
pub struct HistoryCursor<'h> {
    history: &'h CascadeHistory,
    position: usize,
}

impl<'h> HistoryCursor<'h> {
    /// Cursor on the initial step.
    pub fn new(history: &'h CascadeHistory) -> Self {
        Self {
            history,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn current(&self) -> Option<&'h Step> {
        self.history.get(self.position)
    }

    fn last_index(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Move one step forward. Returns the new step, or `None` at the end.
    pub fn advance(&mut self) -> Option<&'h Step> {
        if self.is_at_end() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Move one step back. Returns the new step, or `None` at the start.
    pub fn rewind(&mut self) -> Option<&'h Step> {
        if self.is_at_start() {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    pub fn seek(&mut self, index: usize) -> Option<&'h Step> {
        self.position = index.min(self.last_index());
        self.current()
    }

    pub fn to_start(&mut self) -> Option<&'h Step> {
        self.seek(0)
    }

    pub fn to_end(&mut self) -> Option<&'h Step> {
        self.seek(self.last_index())
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.last_index()
    }
}
