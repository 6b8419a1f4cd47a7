//! The board: an ordered row of tubes sharing one capacity.
//!
//! Tubes are addressed by index. The board only offers read access and
//! top-of-tube mutation; move legality lives in `rules::PuzzleEngine`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::tube::Tube;
use crate::error::EngineError;

/// Ordered collection of tubes.
///
/// ## Example
///
/// ```
/// use ball_sort::core::{Board, Color};
///
/// // Layouts list each tube bottom to top.
/// let board = Board::from_layout(4, &[&[1, 2, 1], &[2, 1, 2], &[]]).unwrap();
///
/// assert_eq!(board.tube_count(), 3);
/// assert_eq!(board.total_balls(), 6);
/// assert_eq!(board.tube(0).unwrap().top(), Some(Color(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tubes: Vec<Tube>,
    capacity: usize,
}

impl Board {
    /// Create a board of `tube_count` empty tubes.
    #[must_use]
    pub fn new(capacity: usize, tube_count: usize) -> Self {
        Self {
            tubes: (0..tube_count).map(|_| Tube::new(capacity)).collect(),
            capacity,
        }
    }

    /// Create a board from raw color ids, one slice per tube (bottom to top).
    pub fn from_layout(capacity: usize, layout: &[&[u8]]) -> Result<Self, EngineError> {
        let tubes = layout
            .iter()
            .map(|ids| {
                let balls: Vec<Color> = ids.iter().copied().map(Color).collect();
                Tube::from_balls(capacity, &balls)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tubes, capacity })
    }

    pub(crate) fn from_tubes(capacity: usize, tubes: Vec<Tube>) -> Self {
        Self { tubes, capacity }
    }

    /// Capacity shared by every tube.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    #[must_use]
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Get a tube by index.
    pub fn tube(&self, index: usize) -> Result<&Tube, EngineError> {
        self.tubes.get(index).ok_or(EngineError::TubeOutOfRange {
            index,
            tube_count: self.tubes.len(),
        })
    }

    pub(crate) fn tube_mut(&mut self, index: usize) -> Result<&mut Tube, EngineError> {
        let tube_count = self.tubes.len();
        self.tubes
            .get_mut(index)
            .ok_or(EngineError::TubeOutOfRange { index, tube_count })
    }

    /// Append an empty tube.
    pub fn push_empty_tube(&mut self) {
        self.tubes.push(Tube::new(self.capacity));
    }

    /// Total number of balls on the board.
    #[must_use]
    pub fn total_balls(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    /// Number of balls of each color.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for ball in self.tubes.iter().flat_map(|t| t.balls().iter().copied()) {
            *counts.entry(ball).or_insert(0) += 1;
        }
        counts
    }

    /// Number of full single-color tubes.
    #[must_use]
    pub fn completed_tubes(&self) -> usize {
        self.tubes.iter().filter(|t| t.is_complete()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tube) in self.tubes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tube)?;
        }
        Ok(())
    }
}
