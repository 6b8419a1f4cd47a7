//! # ball-sort
//!
//! Puzzle engine for ball-sorting games: colored balls sit in tubes of fixed
//! capacity and the player moves the topmost ball between tubes until every
//! non-empty tube holds a full stack of one color.
//!
//! ## Design Principles
//!
//! 1. **No hidden state**: Counters (level, coins, undos) live in explicit
//!    session fields, never in globals.
//!
//! 2. **Invariants at the boundary**: Tubes refuse to overflow, moves are
//!    validated before anything is mutated, failed operations leave state
//!    untouched.
//!
//! 3. **Configuration Over Convention**: Capacity, difficulty tiers and the
//!    coin economy come from `EngineConfig`.
//!
//! ## Modules
//!
//! - `core`: Colors, tubes, boards, moves, RNG, configuration
//! - `rules`: `PuzzleEngine` (generation, legality, undo, win detection)
//! - `session`: `GameSession` game loop and persisted `Progress`
//! - `error`: Error types for engine, session and progress operations
//!
//! ## Example
//!
//! ```
//! use ball_sort::{GameSession, Progress, PuzzleEngine, TapOutcome};
//!
//! let mut session = GameSession::new(PuzzleEngine::default(), Progress::default(), 7);
//! assert_eq!(session.board().tube_count(), 3); // 2 colors + 1 empty tube
//!
//! // Select the first tube, then drop its top ball into the empty one.
//! assert_eq!(session.tap(0), TapOutcome::Selected(0));
//! assert!(matches!(session.tap(2), TapOutcome::Moved { .. }));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, DifficultyTier, EconomyConfig, EngineConfig, GameRng, Move, Tube, UndoHistory,
    DEFAULT_CAPACITY,
};

pub use crate::error::{EngineError, MoveRejection, ProgressError, SessionError};

pub use crate::rules::{Level, LevelStatus, PuzzleEngine};

pub use crate::session::{GameSession, MoveOutcome, Progress, TapOutcome, UndoOutcome};
