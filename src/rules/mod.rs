//! Puzzle rules.
//!
//! `PuzzleEngine` defines:
//! - How levels are dealt
//! - Which moves are legal and how they apply and undo
//! - When a level is won
//!
//! Sessions call into the engine but never re-implement its rules.

pub mod engine;

pub use engine::{Level, LevelStatus, PuzzleEngine};
