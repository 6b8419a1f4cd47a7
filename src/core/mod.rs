//! Core puzzle types: colors, tubes, boards, moves, RNG, configuration.
//!
//! These are plain data with their own invariants (a tube never exceeds its
//! capacity). Game rules that combine them live in `rules`.

pub mod board;
pub mod color;
pub mod config;
pub mod moves;
pub mod rng;
pub mod tube;

pub use board::Board;
pub use color::Color;
pub use config::{DifficultyTier, EconomyConfig, EngineConfig, DEFAULT_CAPACITY};
pub use moves::{Move, UndoHistory};
pub use rng::GameRng;
pub use tube::Tube;
