//! Card cursor - which card a select key would flip.

use crate::types::CardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Position within a grid of `len` cards laid out `columns` wide.
///
/// Moves clamp at the edges; the last row may be short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    columns: usize,
    len: usize,
}

impl CardCursor {
    pub fn new(columns: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
            len: 0,
        }
    }

    /// Adopt a new table size, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Card under the cursor, if the table is not empty.
    pub fn selected(&self) -> Option<CardId> {
        (self.index < self.len).then_some(CardId(self.index))
    }

    pub fn step(&mut self, direction: Direction) {
        if self.len == 0 {
            return;
        }
        let col = self.index % self.columns;
        let next = match direction {
            Direction::Left if col > 0 => Some(self.index - 1),
            Direction::Right if col + 1 < self.columns => Some(self.index + 1),
            Direction::Up => self.index.checked_sub(self.columns),
            Direction::Down => Some(self.index + self.columns),
            _ => None,
        };
        if let Some(next) = next.filter(|&n| n < self.len) {
            self.index = next;
        }
    }
}
