// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tree navigation layer.
//!
//! This module adapts the immutable [`ConfigurationNode`](crate::domain::ConfigurationNode)
//! tree to the positional iteration contract in [`ports::iterator`](crate::ports::iterator),
//! so a tree-query engine can step over attributes and children without knowing
//! which is which.

pub mod attributes;
pub mod children;
pub mod pointer;

// Re-export commonly used types
pub use attributes::AttributeIterator;
pub use children::ChildIterator;
pub use pointer::{AttributePointer, NodePointer};

/// Position of a forward-only iterator over `len` snapshotted items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    NotStarted,
    Positioned(usize),
    Exhausted,
}

#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    len: usize,
    state: CursorState,
}

impl Cursor {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            len,
            state: CursorState::NotStarted,
        }
    }

    pub(crate) fn advance(&mut self) -> bool {
        let next = match self.state {
            CursorState::NotStarted => 0,
            CursorState::Positioned(index) => index + 1,
            CursorState::Exhausted => return false,
        };
        if next < self.len {
            self.state = CursorState::Positioned(next);
            true
        } else {
            self.state = CursorState::Exhausted;
            false
        }
    }

    /// Zero-based index of the current item.
    pub(crate) fn index(&self) -> Option<usize> {
        match self.state {
            CursorState::Positioned(index) => Some(index),
            _ => None,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.index().map_or(0, |index| index + 1)
    }

    pub(crate) fn remaining(&self) -> usize {
        match self.state {
            CursorState::NotStarted => self.len,
            CursorState::Positioned(index) => self.len - index - 1,
            CursorState::Exhausted => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let mut cursor = Cursor::new(0);
        assert_eq!(cursor.remaining(), 0);
        assert!(!cursor.advance());
        assert_eq!(cursor.state, CursorState::Exhausted);
        assert!(!cursor.advance());
    }

    #[test]
    fn test_cursor_walk() {
        let mut cursor = Cursor::new(2);
        assert_eq!(cursor.state, CursorState::NotStarted);
        assert!(cursor.advance());
        assert_eq!(cursor.index(), Some(0));
        assert!(cursor.advance());
        assert_eq!(cursor.index(), Some(1));
        assert_eq!(cursor.remaining(), 0);
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 0);
    }
}
