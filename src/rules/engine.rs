//! The puzzle engine.
//!
//! `PuzzleEngine` owns the rules that combine tubes into a game:
//! - Dealing a level from the difficulty tiers
//! - Which moves are legal
//! - Applying and undoing moves
//! - When a level is won
//!
//! The engine holds configuration only. Boards and histories are passed in,
//! so callers decide where game state lives.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, EngineConfig, GameRng, Move, Tube, UndoHistory};
use crate::error::{EngineError, MoveRejection};

/// Progress of the level currently on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Moves and undos are accepted.
    #[default]
    InProgress,
    /// Every tube is empty or completed. Terminal for the level.
    Won,
}

/// A freshly dealt level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Level number the deal was generated for.
    pub number: u32,
    /// Number of colors in the deal.
    pub colors: u8,
    /// Board to play on.
    pub board: Board,
    /// Untouched copy of `board`, used by restart.
    pub initial: Board,
}

/// Rules of the ball-sort puzzle.
///
/// ## Example
///
/// ```
/// use ball_sort::core::{Board, UndoHistory};
/// use ball_sort::PuzzleEngine;
///
/// let engine = PuzzleEngine::default();
/// let mut board = Board::from_layout(4, &[&[2, 1, 1, 1], &[1, 1, 1], &[]]).unwrap();
/// let mut history = UndoHistory::new();
///
/// let mv = engine.apply_move(&mut board, 0, 1).unwrap();
/// history.push(mv);
/// assert!(board.tube(1).unwrap().is_complete());
///
/// engine.undo(&mut board, &mut history).unwrap();
/// assert_eq!(board.tube(1).unwrap().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PuzzleEngine {
    config: EngineConfig,
}

impl PuzzleEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Deal a level.
    ///
    /// A bag of `capacity` balls of each color is shuffled and dealt into
    /// `colors` full tubes, followed by the empty tubes. The deal is not
    /// checked for solvability.
    pub fn generate_level(&self, level: u32, rng: &mut GameRng) -> Level {
        let capacity = self.config.capacity;
        let colors = self.config.colors_for_level(level);
        let empty_tubes = self.config.empty_tubes_for(colors);

        let mut bag: Vec<Color> = Color::palette(colors)
            .flat_map(|color| std::iter::repeat(color).take(capacity))
            .collect();
        rng.shuffle(&mut bag);

        // A zero capacity leaves the bag empty, so any chunk size deals nothing.
        let mut tubes: Vec<Tube> = bag
            .chunks(capacity.max(1))
            .map(|chunk| Tube::from_chunk(capacity, chunk))
            .collect();
        tubes.extend((0..empty_tubes).map(|_| Tube::new(capacity)));

        let board = Board::from_tubes(capacity, tubes);
        debug!("dealt level {} ({} colors): {}", level, colors, board);

        Level {
            number: level.max(1),
            colors,
            initial: board.clone(),
            board,
        }
    }

    /// Why moving the top of `from` onto `to` is refused, if it is.
    pub fn check_move(&self, from: &Tube, to: &Tube) -> Result<(), MoveRejection> {
        let Some(ball) = from.top() else {
            return Err(MoveRejection::SourceEmpty);
        };
        if to.is_full() {
            return Err(MoveRejection::DestinationFull);
        }
        match to.top() {
            Some(top) if top != ball => Err(MoveRejection::ColorMismatch),
            _ => Ok(()),
        }
    }

    /// True iff `from` is non-empty, `to` has room, and `to` is empty or
    /// shows the same top color as `from`.
    #[must_use]
    pub fn is_legal_move(&self, from: &Tube, to: &Tube) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Move the top ball of tube `from` onto tube `to`.
    ///
    /// On error the board is untouched. The returned `Move` is what the
    /// caller records for undo.
    pub fn apply_move(&self, board: &mut Board, from: usize, to: usize) -> Result<Move, EngineError> {
        let rejected = |reason: MoveRejection| {
            trace!("rejected move {} -> {}: {}", from, to, reason);
            EngineError::IllegalMove { from, to, reason }
        };

        let source = board.tube(from)?;
        let destination = board.tube(to)?;
        if from == to {
            return Err(rejected(MoveRejection::SameTube));
        }
        self.check_move(source, destination).map_err(rejected)?;

        let ball = board
            .tube_mut(from)?
            .pop()
            .ok_or_else(|| rejected(MoveRejection::SourceEmpty))?;
        board.tube_mut(to)?.push(ball)?;

        let mv = Move::new(from, to, ball);
        debug!("move {}", mv);
        Ok(mv)
    }

    /// Reverse the most recent move in `history`.
    ///
    /// Fails with `EmptyHistory` when there is nothing to undo. Returns the
    /// reversed move (ball travelling back to its source).
    pub fn undo(&self, board: &mut Board, history: &mut UndoHistory) -> Result<Move, EngineError> {
        let last = *history.last().ok_or(EngineError::EmptyHistory)?;
        let back = last.reversed();

        // The history must agree with the board before anything is touched.
        let holder = board.tube(back.from)?;
        let source = board.tube(back.to)?;
        let mismatch = |reason: MoveRejection| EngineError::IllegalMove {
            from: back.from,
            to: back.to,
            reason,
        };
        match holder.top() {
            None => return Err(mismatch(MoveRejection::SourceEmpty)),
            Some(top) if top != last.ball => return Err(mismatch(MoveRejection::ColorMismatch)),
            Some(_) => {}
        }
        if source.is_full() {
            return Err(mismatch(MoveRejection::DestinationFull));
        }

        history.pop();
        if let Some(ball) = board.tube_mut(back.from)?.pop() {
            board.tube_mut(back.to)?.push(ball)?;
        }

        debug!("undo {}", last);
        Ok(back)
    }

    /// Whether the board is solved.
    ///
    /// Always false until the player has moved, so a deal that happens to
    /// come out sorted does not count. Otherwise every tube must be empty
    /// or completed, and the number of completed tubes must equal
    /// `total_balls / capacity`.
    #[must_use]
    pub fn is_won(&self, board: &Board, has_moved: bool) -> bool {
        if !has_moved || board.capacity() == 0 {
            return false;
        }

        let expected = board.total_balls() / board.capacity();
        let mut completed = 0;
        for tube in board.tubes() {
            if tube.is_empty() {
                continue;
            }
            if !tube.is_full() {
                return false;
            }
            if tube.is_uniform() {
                completed += 1;
            }
        }
        completed == expected
    }

    /// Append one empty tube. Pricing and limits are the caller's concern.
    pub fn add_extra_tube(&self, board: &mut Board) {
        board.push_empty_tube();
        debug!("added extra tube, board now has {} tubes", board.tube_count());
    }

    /// All legal `(from, to)` pairs, in index order.
    #[must_use]
    pub fn legal_moves(&self, board: &Board) -> Vec<(usize, usize)> {
        let tubes = board.tubes();
        let mut moves = Vec::new();
        for (i, from) in tubes.iter().enumerate() {
            for (j, to) in tubes.iter().enumerate() {
                if i != j && self.is_legal_move(from, to) {
                    moves.push((i, j));
                }
            }
        }
        moves
    }
}
