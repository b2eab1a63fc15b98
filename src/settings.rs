use serde::{Deserialize, Serialize};

use crate::error::{DastanError, Result};
use crate::offer::RandomizerKind;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GameSettings {
    pub rows: i32,
    pub columns: i32,
    pub pieces_per_player: i32,
    pub initial_score: i32,
    pub randomizer: RandomizerKind,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 6,
            pieces_per_player: 4,
            initial_score: 100,
            randomizer: RandomizerKind::default(),
        }
    }
}

impl GameSettings {
    /// Rejects boards the two-digit reference scheme or the opening layout
    /// cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(2..=9).contains(&self.columns) {
            return Err(DastanError::InvalidSettings(format!(
                "columns must be between 2 and 9, got {}",
                self.columns
            )));
        }
        if !(4..=99).contains(&self.rows) {
            return Err(DastanError::InvalidSettings(format!(
                "rows must be between 4 and 99, got {}",
                self.rows
            )));
        }
        if !(1..self.columns).contains(&self.pieces_per_player) {
            return Err(DastanError::InvalidSettings(format!(
                "pieces per player must be between 1 and {}, got {}",
                self.columns - 1,
                self.pieces_per_player
            )));
        }
        Ok(())
    }
}
