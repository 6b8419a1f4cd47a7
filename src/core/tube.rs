//! Bounded ball stacks.
//!
//! A `Tube` holds balls bottom to top and only ever changes at the top.
//! The capacity is fixed at construction and enforced by `push`, so no
//! caller can overfill a tube.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use crate::error::EngineError;

/// Inline storage covers the default capacity without heap allocation.
type Balls = SmallVec<[Color; 4]>;

/// A bounded stack of balls.
///
/// ```
/// use ball_sort::core::{Color, Tube};
///
/// let mut tube = Tube::new(4);
/// tube.push(Color(1)).unwrap();
/// tube.push(Color(2)).unwrap();
///
/// assert_eq!(tube.top(), Some(Color(2)));
/// assert_eq!(tube.pop(), Some(Color(2)));
/// assert_eq!(tube.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tube {
    balls: Balls,
    capacity: usize,
}

impl Tube {
    /// Create an empty tube.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            balls: SmallVec::new(),
            capacity,
        }
    }

    /// Create a tube from balls listed bottom to top.
    ///
    /// Fails with `TubeOverflow` if there are more balls than `capacity`.
    pub fn from_balls(capacity: usize, balls: &[Color]) -> Result<Self, EngineError> {
        if balls.len() > capacity {
            return Err(EngineError::TubeOverflow { capacity });
        }
        Ok(Self {
            balls: SmallVec::from_slice(balls),
            capacity,
        })
    }

    /// Build a tube from a deal chunk no longer than `capacity`.
    pub(crate) fn from_chunk(capacity: usize, balls: &[Color]) -> Self {
        debug_assert!(balls.len() <= capacity);
        Self {
            balls: SmallVec::from_slice(balls),
            capacity,
        }
    }

    /// Push a ball on top.
    pub fn push(&mut self, ball: Color) -> Result<(), EngineError> {
        if self.is_full() {
            return Err(EngineError::TubeOverflow {
                capacity: self.capacity,
            });
        }
        self.balls.push(ball);
        Ok(())
    }

    /// Remove and return the top ball.
    pub fn pop(&mut self) -> Option<Color> {
        self.balls.pop()
    }

    /// The top ball, if any.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.balls.last().copied()
    }

    /// Balls from bottom to top.
    #[must_use]
    pub fn balls(&self) -> &[Color] {
        &self.balls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left.
    #[must_use]
    pub fn spare(&self) -> usize {
        self.capacity.saturating_sub(self.balls.len())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.balls.len() >= self.capacity
    }

    /// Full and every ball the same color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.is_uniform()
    }

    /// All balls share one color. Vacuously true for an empty tube.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        match self.balls.first() {
            Some(&first) => self.balls.iter().all(|&b| b == first),
            None => true,
        }
    }
}

impl std::fmt::Display for Tube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, ball) in self.balls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", ball)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(ids: &[u8]) -> Vec<Color> {
        ids.iter().copied().map(Color).collect()
    }

    #[test]
    fn test_push_pop_order() {
        let mut tube = Tube::new(4);
        tube.push(Color(1)).unwrap();
        tube.push(Color(2)).unwrap();
        tube.push(Color(3)).unwrap();

        assert_eq!(tube.balls(), colors(&[1, 2, 3]).as_slice());
        assert_eq!(tube.pop(), Some(Color(3)));
        assert_eq!(tube.pop(), Some(Color(2)));
        assert_eq!(tube.top(), Some(Color(1)));
    }

    #[test]
    fn test_push_rejects_overflow() {
        let mut tube = Tube::from_balls(4, &colors(&[1, 1, 1, 1])).unwrap();

        assert_eq!(
            tube.push(Color(1)),
            Err(EngineError::TubeOverflow { capacity: 4 })
        );
        assert_eq!(tube.len(), 4);
    }

    #[test]
    fn test_from_balls_rejects_overflow() {
        let result = Tube::from_balls(2, &colors(&[1, 2, 3]));
        assert_eq!(result, Err(EngineError::TubeOverflow { capacity: 2 }));
    }

    #[test]
    fn test_pop_empty() {
        let mut tube = Tube::new(4);
        assert_eq!(tube.pop(), None);
        assert_eq!(tube.top(), None);
        assert!(tube.is_empty());
    }

    #[test]
    fn test_spare_and_full() {
        let tube = Tube::from_balls(4, &colors(&[2, 2, 1])).unwrap();
        assert_eq!(tube.spare(), 1);
        assert!(!tube.is_full());
    }

    #[test]
    fn test_is_complete() {
        assert!(Tube::from_balls(4, &colors(&[3, 3, 3, 3])).unwrap().is_complete());
        assert!(!Tube::from_balls(4, &colors(&[3, 3, 1, 3])).unwrap().is_complete());
        assert!(!Tube::from_balls(4, &colors(&[3, 3, 3])).unwrap().is_complete());
        assert!(!Tube::new(4).is_complete());
    }

    #[test]
    fn test_display() {
        let tube = Tube::from_balls(4, &colors(&[2, 1])).unwrap();
        assert_eq!(tube.to_string(), "[2 1]");
        assert_eq!(Tube::new(4).to_string(), "[]");
    }
}
