//! Player-facing game loop and persisted progress.
//!
//! `GameSession` wraps `PuzzleEngine` with selection, the coin economy and
//! level flow. `Progress` is the small set of counters a UI persists.

pub mod game;
pub mod progress;

pub use game::{GameSession, MoveOutcome, TapOutcome, UndoOutcome};
pub use progress::Progress;
