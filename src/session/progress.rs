//! Persisted player progress.
//!
//! A handful of scalars survive between runs: level, coins, the date the
//! daily reward was last claimed, and the sound flag. Where the bytes are
//! stored is up to the caller; this module only encodes and decodes them.

use serde::{Deserialize, Serialize};

use crate::core::EconomyConfig;
use crate::error::{ProgressError, SessionError};

/// Counters that persist across levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Level to play next (starts at 1).
    pub level: u32,

    /// Coin balance.
    pub coins: u32,

    /// Caller-supplied date of the last daily reward, `None` if never claimed.
    pub last_daily_claim: Option<String>,

    /// Whether the UI should play sounds.
    pub sound_on: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self::fresh(&EconomyConfig::default())
    }
}

impl Progress {
    /// Progress of a new player under `economy`.
    #[must_use]
    pub fn fresh(economy: &EconomyConfig) -> Self {
        Self {
            level: 1,
            coins: economy.starting_coins,
            last_daily_claim: None,
            sound_on: true,
        }
    }

    /// Encode for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProgressError> {
        bincode::serialize(self).map_err(ProgressError::Encode)
    }

    /// Decode from storage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProgressError> {
        bincode::deserialize(bytes).map_err(ProgressError::Decode)
    }

    /// Spend `amount` coins if the balance allows it.
    pub(crate) fn spend(&mut self, amount: u32) -> Result<(), SessionError> {
        if self.coins < amount {
            return Err(SessionError::InsufficientCoins {
                needed: amount,
                available: self.coins,
            });
        }
        self.coins -= amount;
        Ok(())
    }
}
