use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::moves::{MoveOption, MoveOptionQueue};

/// Stable identity of one of the two seats. Pieces and Kotlas refer to their
/// owner through this instead of holding the `Player` itself.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Sign applied to every displacement so "forward" means away from home.
    pub fn direction(self) -> i32 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => -1,
        }
    }

    pub fn default_name(self) -> &'static str {
        match self {
            PlayerId::One => "Player One",
            PlayerId::Two => "Player Two",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    direction: i32,
    score: i32,
    queue: MoveOptionQueue,
}

impl Player {
    pub fn new(id: PlayerId, initial_score: i32) -> Self {
        Self {
            id,
            name: id.default_name().to_string(),
            direction: id.direction(),
            score: initial_score,
            queue: MoveOptionQueue::starting(id),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn queue(&self) -> &MoveOptionQueue {
        &self.queue
    }

    /// Identity is the seat, not the object.
    pub fn same_as(&self, other: PlayerId) -> bool {
        self.id == other
    }

    pub fn change_score(&mut self, amount: i32) {
        self.score += amount;
    }

    /// `choice` is the 1-based queue position the move was made with.
    pub fn update_queue_after_move(&mut self, choice: usize) -> Result<()> {
        self.queue.rotate_to_back(choice.wrapping_sub(1))
    }

    /// `position` is 0-based.
    pub fn update_queue_with_offer(&mut self, position: usize, option: MoveOption) -> Result<()> {
        self.queue.replace(position, option)
    }

    /// Whether the option at 1-based `choice` has a displacement from `start` to `finish`.
    pub fn check_player_move(&self, choice: usize, start: i32, finish: i32) -> Result<bool> {
        let option = self.queue.get(choice.wrapping_sub(1))?;
        Ok(option.contains_move_to(start, finish))
    }

    pub fn state_as_string(&self) -> String {
        format!(
            "{}\nScore: {}\nMove option queue: {}\n",
            self.name,
            self.score,
            self.queue.as_display_string()
        )
    }
}
