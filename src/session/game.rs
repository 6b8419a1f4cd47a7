//! A player's game session.
//!
//! `GameSession` is what a UI drives: it owns the board being played, the
//! snapshot used by restart, the undo history and the player's `Progress`,
//! and layers the coin economy on top of `PuzzleEngine`:
//! - Undos are free up to `free_undos` per level, then cost coins
//! - One extra tube can be bought per level once it is unlocked
//! - Winning a level advances `Progress::level` and pays `win_reward`
//!
//! Every operation that fails leaves the session unchanged.

use log::{debug, info};

use super::progress::Progress;
use crate::core::{Board, GameRng, Move, UndoHistory};
use crate::error::{EngineError, SessionError};
use crate::rules::{LevelStatus, PuzzleEngine};

/// Result of tapping a tube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing happened (empty tube with no selection, bad index, level won).
    Ignored,
    /// The tube is now selected.
    Selected(usize),
    /// The selected tube was tapped again and released.
    Deselected,
    /// The selected tube's top ball moved onto the tapped tube.
    Moved { mv: Move, won: bool },
    /// The move was illegal; the selection was dropped.
    Cancelled,
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// The move completed the level.
    pub won: bool,
}

/// Result of a successful undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// Used a free undo; `free_left` remain this level.
    Free { undone: Move, free_left: u32 },
    /// Paid `cost` coins.
    Paid { undone: Move, cost: u32 },
}

impl UndoOutcome {
    /// The reversed move (ball travelling back to its source).
    #[must_use]
    pub fn undone(&self) -> Move {
        match *self {
            UndoOutcome::Free { undone, .. } | UndoOutcome::Paid { undone, .. } => undone,
        }
    }
}

/// Single-player session over a sequence of levels.
///
/// ## Usage
///
/// ```
/// use ball_sort::{GameSession, Progress, PuzzleEngine, SessionError};
/// use ball_sort::core::Board;
///
/// let board = Board::from_layout(4, &[&[1, 1, 1], &[1]]).unwrap();
/// let mut session = GameSession::with_board(PuzzleEngine::default(), Progress::default(), board);
///
/// let outcome = session.try_move(1, 0).unwrap();
/// assert!(outcome.won);
/// assert_eq!(session.progress().level, 2);
/// assert_eq!(session.progress().coins, 125);
///
/// // The level is over until the next one is loaded.
/// assert_eq!(session.undo(), Err(SessionError::LevelComplete));
/// session.next_level().unwrap();
/// assert_eq!(session.level(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: PuzzleEngine,
    rng: GameRng,
    progress: Progress,

    /// Level on the board (may trail `progress.level` once won).
    level: u32,
    board: Board,
    initial: Board,
    history: UndoHistory,
    has_moved: bool,
    status: LevelStatus,

    selected: Option<usize>,
    undos_left: u32,
    extra_tube_bought: bool,
}

impl GameSession {
    /// Start a session at `progress.level` with a deal from `seed`.
    #[must_use]
    pub fn new(engine: PuzzleEngine, progress: Progress, seed: u64) -> Self {
        let level = progress.level;
        let board = Board::new(engine.config().capacity, 0);
        let mut session = Self::blank(engine, progress, GameRng::new(seed), board);
        session.load_level(level);
        session
    }

    /// Start a session on a caller-supplied board (custom puzzles).
    #[must_use]
    pub fn with_board(engine: PuzzleEngine, progress: Progress, board: Board) -> Self {
        let rng = GameRng::from_entropy();
        Self::blank(engine, progress, rng, board)
    }

    fn blank(engine: PuzzleEngine, progress: Progress, rng: GameRng, board: Board) -> Self {
        let undos_left = engine.config().economy.free_undos;
        Self {
            level: progress.level,
            engine,
            rng,
            progress,
            initial: board.clone(),
            board,
            history: UndoHistory::new(),
            has_moved: false,
            status: LevelStatus::InProgress,
            selected: None,
            undos_left,
            extra_tube_bought: false,
        }
    }

    fn load_level(&mut self, level: u32) {
        let dealt = self.engine.generate_level(level, &mut self.rng);
        self.level = dealt.number;
        self.board = dealt.board;
        self.initial = dealt.initial;
        self.reset_level_state();
        info!("loaded level {} ({} colors)", self.level, dealt.colors);
    }

    fn reset_level_state(&mut self) {
        self.history.clear();
        self.has_moved = false;
        self.status = LevelStatus::InProgress;
        self.selected = None;
        self.undos_left = self.engine.config().economy.free_undos;
        self.extra_tube_bought = false;
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.status {
            LevelStatus::InProgress => Ok(()),
            LevelStatus::Won => Err(SessionError::LevelComplete),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as dealt, before any move or extra tube.
    #[must_use]
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    #[must_use]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Level currently on the board.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn status(&self) -> LevelStatus {
        self.status
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Free undos left this level.
    #[must_use]
    pub fn undos_left(&self) -> u32 {
        self.undos_left
    }

    #[must_use]
    pub fn extra_tube_bought(&self) -> bool {
        self.extra_tube_bought
    }

    /// Whether the extra-tube offer should be shown for this level.
    #[must_use]
    pub fn extra_tube_unlocked(&self) -> bool {
        self.level >= self.engine.config().economy.extra_tube_min_level
    }

    /// Legal `(from, to)` pairs on the current board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.engine.legal_moves(&self.board)
    }

    // === Play ===

    /// Tap-to-select, tap-to-move.
    ///
    /// The first tap selects a non-empty tube, the second either releases it
    /// (same tube) or attempts the move. The selection never survives the
    /// second tap.
    pub fn tap(&mut self, index: usize) -> TapOutcome {
        if self.status == LevelStatus::Won || index >= self.board.tube_count() {
            return TapOutcome::Ignored;
        }

        match self.selected.take() {
            None => {
                if self.board.tubes()[index].is_empty() {
                    TapOutcome::Ignored
                } else {
                    self.selected = Some(index);
                    TapOutcome::Selected(index)
                }
            }
            Some(from) if from == index => TapOutcome::Deselected,
            Some(from) => match self.try_move(from, index) {
                Ok(MoveOutcome { mv, won }) => TapOutcome::Moved { mv, won },
                Err(_) => TapOutcome::Cancelled,
            },
        }
    }

    /// Move the top ball of `from` onto `to`.
    ///
    /// A move that wins the level advances `progress.level` and pays the
    /// win reward.
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<MoveOutcome, SessionError> {
        self.ensure_in_progress()?;

        let mv = self.engine.apply_move(&mut self.board, from, to)?;
        self.history.push(mv);
        self.has_moved = true;
        self.selected = None;

        let won = self.engine.is_won(&self.board, self.has_moved);
        if won {
            let reward = self.engine.config().economy.win_reward;
            self.status = LevelStatus::Won;
            self.progress.level = self.level.saturating_add(1);
            self.progress.coins = self.progress.coins.saturating_add(reward);
            info!(
                "level {} cleared in {} moves, +{} coins",
                self.level,
                self.history.len(),
                reward
            );
        }

        Ok(MoveOutcome { mv, won })
    }

    /// Undo the last move, using a free undo if any are left, else paying.
    pub fn undo(&mut self) -> Result<UndoOutcome, SessionError> {
        self.ensure_in_progress()?;
        if self.history.is_empty() {
            return Err(EngineError::EmptyHistory.into());
        }

        let cost = self.engine.config().economy.undo_cost;
        let free = self.undos_left > 0;
        if !free && self.progress.coins < cost {
            return Err(SessionError::InsufficientCoins {
                needed: cost,
                available: self.progress.coins,
            });
        }

        let undone = self.engine.undo(&mut self.board, &mut self.history)?;
        self.selected = None;

        if free {
            self.undos_left -= 1;
            debug!("free undo, {} left", self.undos_left);
            Ok(UndoOutcome::Free {
                undone,
                free_left: self.undos_left,
            })
        } else {
            self.progress.spend(cost)?;
            debug!("paid undo, -{} coins", cost);
            Ok(UndoOutcome::Paid { undone, cost })
        }
    }

    /// Put the board back as dealt.
    ///
    /// Clears history and selection and restores the free undos and the
    /// extra-tube offer. Coins already spent stay spent.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        self.board = self.initial.clone();
        self.reset_level_state();
        debug!("restarted level {}", self.level);
        Ok(())
    }

    /// Buy one extra empty tube for this level.
    pub fn buy_extra_tube(&mut self) -> Result<(), SessionError> {
        self.ensure_in_progress()?;

        let economy = &self.engine.config().economy;
        if !self.extra_tube_unlocked() {
            return Err(SessionError::ExtraTubeLocked {
                min_level: economy.extra_tube_min_level,
            });
        }
        if self.extra_tube_bought {
            return Err(SessionError::ExtraTubeAlreadyBought);
        }

        let cost = economy.extra_tube_cost;
        self.progress.spend(cost)?;
        self.engine.add_extra_tube(&mut self.board);
        self.extra_tube_bought = true;
        info!("bought extra tube for {} coins", cost);
        Ok(())
    }

    /// Deal the level recorded in `progress` after a win.
    pub fn next_level(&mut self) -> Result<(), SessionError> {
        if self.status != LevelStatus::Won {
            return Err(SessionError::LevelNotWon);
        }
        self.load_level(self.progress.level);
        Ok(())
    }

    // === Progress ===

    /// Grant the daily reward unless it was already claimed on `today`.
    ///
    /// `today` is any stable per-day string chosen by the caller.
    pub fn claim_daily_reward(&mut self, today: &str) -> bool {
        if self.progress.last_daily_claim.as_deref() == Some(today) {
            return false;
        }

        let reward = self.engine.config().economy.daily_reward;
        self.progress.coins = self.progress.coins.saturating_add(reward);
        self.progress.last_daily_claim = Some(today.to_string());
        info!("daily reward claimed for {}: +{} coins", today, reward);
        true
    }

    /// Flip the sound flag and return the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.progress.sound_on = !self.progress.sound_on;
        self.progress.sound_on
    }

    /// Forget all progress and start over at level 1.
    pub fn reset_progress(&mut self) {
        self.progress = Progress::fresh(&self.engine.config().economy);
        info!("progress reset");
        self.load_level(1);
    }
}
