//! Move records and the undo history.
//!
//! A `Move` is captured at the moment a ball is relocated and holds enough
//! to reverse it exactly. `UndoHistory` is a LIFO of moves backed by
//! `im::Vector`, so cloning a session's history is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// A single relocated ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Tube the ball was taken from.
    pub from: usize,
    /// Tube the ball was placed on.
    pub to: usize,
    /// The ball that moved.
    pub ball: Color,
}

impl Move {
    #[must_use]
    pub fn new(from: usize, to: usize, ball: Color) -> Self {
        Self { from, to, ball }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ball: self.ball,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.ball)
    }
}

/// Moves applied since the level was (re)loaded, oldest first.
///
/// ```
/// use ball_sort::core::{Color, Move, UndoHistory};
///
/// let mut history = UndoHistory::new();
/// history.push(Move::new(0, 1, Color(2)));
/// history.push(Move::new(1, 2, Color(2)));
///
/// assert_eq!(history.pop(), Some(Move::new(1, 2, Color(2))));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    moves: Vector<Move>,
}

impl UndoHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    /// Take the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_back()
    }

    /// The most recent move without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Moves in the order they were applied.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
