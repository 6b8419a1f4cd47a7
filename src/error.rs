//! Error types.
//!
//! Nothing here is fatal: every operation that returns an error leaves the
//! board, history and progress exactly as they were.

use thiserror::Error;

/// Why a move between two tubes was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// Source and destination are the same tube.
    SameTube,
    /// The source tube has no ball to move.
    SourceEmpty,
    /// The destination tube is at capacity.
    DestinationFull,
    /// Both tubes are non-empty and their top colors differ.
    ColorMismatch,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            MoveRejection::SameTube => "source and destination are the same tube",
            MoveRejection::SourceEmpty => "source tube is empty",
            MoveRejection::DestinationFull => "destination tube is full",
            MoveRejection::ColorMismatch => "top colors differ",
        };
        f.write_str(reason)
    }
}

/// Errors from board-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move from tube {from} to tube {to}: {reason}")]
    IllegalMove {
        from: usize,
        to: usize,
        reason: MoveRejection,
    },

    #[error("nothing to undo")]
    EmptyHistory,

    #[error("tube index {index} out of range (board has {tube_count} tubes)")]
    TubeOutOfRange { index: usize, tube_count: usize },

    #[error("tube is already at capacity {capacity}")]
    TubeOverflow { capacity: usize },
}

/// Errors from session-level operations (economy and level flow).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u32, available: u32 },

    #[error("level is already complete")]
    LevelComplete,

    #[error("level is not complete yet")]
    LevelNotWon,

    #[error("extra tube unlocks at level {min_level}")]
    ExtraTubeLocked { min_level: u32 },

    #[error("extra tube already bought for this level")]
    ExtraTubeAlreadyBought,
}

/// Errors from encoding or decoding persisted progress.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to encode progress: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode progress: {0}")]
    Decode(#[source] bincode::Error),
}
