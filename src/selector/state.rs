//! Search state for the model selector: the query and the highlighted row

use crate::catalog::ModelDescriptor;

/// Query text and cursor for one mounted selector.
///
/// The state outlives drawer visibility changes; dropping it and creating a
/// new one is the only way the query resets on its own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Current search text
    pub query: String,

    /// Index of the highlighted row in the flattened visible list
    pub cursor: usize,
}

impl SearchState {
    /// Create an empty search state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            cursor: 0,
        }
    }

    /// Clear the query and place the cursor on `active`, if it is visible
    pub fn start(&mut self, visible: &[&ModelDescriptor], active: Option<&ModelDescriptor>) {
        self.query.clear();
        self.cursor = active
            .and_then(|a| visible.iter().position(|m| std::ptr::eq(*m, a)))
            .unwrap_or(0);
    }

    /// Move the cursor down, wrapping to the top
    pub const fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    /// Move the cursor up, wrapping to the bottom
    pub const fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 || self.cursor > count {
            count - 1
        } else {
            self.cursor - 1
        };
    }

    /// Append a character to the query
    pub fn handle_char(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    /// Remove the last character of the query
    pub fn handle_backspace(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    /// Clear the query and the cursor
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Cursor clamped to a list of `count` rows
    #[must_use]
    pub fn cursor_in(&self, count: usize) -> Option<usize> {
        (count > 0).then(|| self.cursor.min(count - 1))
    }
}
