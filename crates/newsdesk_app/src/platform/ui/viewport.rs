use std::collections::BTreeSet;
use std::ops::Range;

use newsdesk_engine::viewport::{CardHandle, VisibilityChange, VisibilityPort};

/// A scrollable window of `rows` lines over the stacked result cards.
#[derive(Debug, Clone)]
pub struct TerminalViewport {
    rows: usize,
    offset: usize,
    heights: Vec<usize>,
    subscribed: BTreeSet<CardHandle>,
}

impl TerminalViewport {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: rows.max(1),
            offset: 0,
            heights: Vec::new(),
            subscribed: BTreeSet::new(),
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line range of the card content currently on screen.
    pub fn visible_lines(&self) -> Range<usize> {
        self.offset..self.offset + self.rows
    }

    /// Replace card heights (in lines). Keeps the scroll position when possible.
    pub fn set_layout(&mut self, heights: Vec<usize>) {
        self.heights = heights;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Visible fraction of every subscribed card with a known layout.
    pub fn visibility(&self) -> Vec<VisibilityChange> {
        let window = self.visible_lines();
        let mut top = 0;
        let mut changes = Vec::new();
        for (handle, height) in self.heights.iter().copied().enumerate() {
            let bottom = top + height;
            if self.subscribed.contains(&handle) {
                let overlap = bottom.min(window.end).saturating_sub(top.max(window.start));
                let ratio = if height == 0 {
                    0.0
                } else {
                    overlap as f32 / height as f32
                };
                changes.push(VisibilityChange { handle, ratio });
            }
            top = bottom;
        }
        changes
    }

    fn max_offset(&self) -> usize {
        let total: usize = self.heights.iter().sum();
        total.saturating_sub(self.rows)
    }
}

impl VisibilityPort for TerminalViewport {
    fn subscribe(&mut self, handle: CardHandle) {
        self.subscribed.insert(handle);
    }

    fn disconnect(&mut self) {
        self.subscribed.clear();
    }
}
