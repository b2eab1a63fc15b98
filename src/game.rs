use serde::Serialize;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{DastanError, Result};
use crate::moves::{MoveOption, MoveOptionName, QUEUE_LENGTH};
use crate::offer::MoveOfferGenerator;
use crate::player::{Player, PlayerId};
use crate::settings::GameSettings;

/// Action value that buys the current offer instead of moving.
pub const OFFER_SENTINEL: i32 = 9;

/// Highest queue position a player may move with.
pub const MAX_MOVE_CHOICE: usize = 3;

/// Score charged for overwriting 1-based queue `position`: slot 1 costs 8, slot 5 is free.
pub fn replacement_cost(position: usize) -> i32 {
    10 - 2 * position as i32
}

/// Score charged for moving with 1-based queue `choice`: 1, 4, 7.
pub fn movement_cost(choice: usize) -> i32 {
    3 * choice as i32 - 2
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Draw,
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub struct FinalResult {
    pub scores: [i32; 2],
    pub outcome: Outcome,
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingOfferDecision,
    AwaitingReplacePosition,
    AwaitingStartSquare { choice: usize },
    AwaitingFinishSquare { choice: usize, start: i32 },
    GameOver(FinalResult),
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    pub player: PlayerId,
    pub choice: usize,
    pub start: i32,
    pub finish: i32,
    pub legal: bool,
    pub movement_cost: i32,
    pub capture_points: i32,
    pub occupancy_bonus: i32,
    pub score: i32,
}

/// What a single submitted value did to the game.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Event {
    /// Value rejected; the same prompt applies again.
    InvalidInput,
    OfferPending,
    OfferTaken {
        name: MoveOptionName,
        position: usize,
        cost: i32,
    },
    ActionChosen {
        choice: usize,
    },
    StartSelected {
        start: i32,
    },
    TurnEnded {
        report: TurnReport,
        game_over: Option<FinalResult>,
    },
}

#[derive(Serialize)]
pub struct SquareView {
    pub symbol: char,
    pub piece: Option<char>,
}

#[derive(Serialize)]
pub struct PlayerView {
    pub name: String,
    pub score: i32,
    pub queue: Vec<MoveOptionName>,
}

#[derive(Serialize)]
pub struct FrameView {
    pub rows: i32,
    pub columns: i32,
    pub squares: Vec<SquareView>,
    pub offer: MoveOptionName,
    pub players: Vec<PlayerView>,
    pub current: PlayerId,
    pub phase: Phase,
}

#[derive(Debug)]
pub struct Dastan {
    board: Board,
    players: [Player; 2],
    offer: MoveOfferGenerator,
    current: PlayerId,
    phase: Phase,
}

impl Dastan {
    pub fn new(settings: &GameSettings) -> Result<Self> {
        settings.validate()?;
        let board = Board::setup(settings.rows, settings.columns, settings.pieces_per_player)?;
        Ok(Self::with_board(board, settings))
    }

    /// Starts a game on an arbitrary board. Rows, columns and pieces in
    /// `settings` are ignored.
    pub fn with_board(board: Board, settings: &GameSettings) -> Self {
        Self {
            board,
            players: [
                Player::new(PlayerId::One, settings.initial_score),
                Player::new(PlayerId::Two, settings.initial_score),
            ],
            offer: MoveOfferGenerator::new(&settings.randomizer),
            current: PlayerId::One,
            phase: Phase::AwaitingOfferDecision,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn offer(&self) -> &MoveOfferGenerator {
        &self.offer
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Text to show the input collaborator for the current phase.
    pub fn prompt(&self) -> &'static str {
        match self.phase {
            Phase::AwaitingOfferDecision => {
                "Choose move option to use from queue (1 to 3) or 9 to take the offer: "
            }
            Phase::AwaitingReplacePosition => {
                "Choose the move option from your queue to replace (1 to 5): "
            }
            Phase::AwaitingStartSquare { .. } => {
                "Enter the square containing the piece to move (row number followed by column number): "
            }
            Phase::AwaitingFinishSquare { .. } => {
                "Enter the square to move to (row number followed by column number): "
            }
            Phase::GameOver(_) => "",
        }
    }

    /// Feeds one integer from the player into the turn state machine.
    pub fn submit(&mut self, value: i32) -> Result<Event> {
        match self.phase {
            Phase::GameOver(_) => Err(DastanError::GameOver),
            Phase::AwaitingOfferDecision => {
                if value == OFFER_SENTINEL {
                    self.phase = Phase::AwaitingReplacePosition;
                    return Ok(Event::OfferPending);
                }
                if !(1..=MAX_MOVE_CHOICE as i32).contains(&value) {
                    return Ok(Event::InvalidInput);
                }
                let choice = value as usize;
                self.phase = Phase::AwaitingStartSquare { choice };
                Ok(Event::ActionChosen { choice })
            }
            Phase::AwaitingReplacePosition => {
                if !(1..=QUEUE_LENGTH as i32).contains(&value) {
                    return Ok(Event::InvalidInput);
                }
                let position = value as usize;
                let name = self.offer.current();
                let cost = self.take_offer(position)?;
                self.phase = Phase::AwaitingOfferDecision;
                Ok(Event::OfferTaken {
                    name,
                    position,
                    cost,
                })
            }
            Phase::AwaitingStartSquare { choice } => {
                if !self.board.is_valid_selection(value, true, self.current) {
                    return Ok(Event::InvalidInput);
                }
                self.phase = Phase::AwaitingFinishSquare {
                    choice,
                    start: value,
                };
                Ok(Event::StartSelected { start: value })
            }
            Phase::AwaitingFinishSquare { choice, start } => {
                if !self.board.is_valid_selection(value, false, self.current) {
                    return Ok(Event::InvalidInput);
                }
                let report = self.resolve_move(choice, start, value)?;
                let game_over = self.end_turn();
                Ok(Event::TurnEnded { report, game_over })
            }
        }
    }

    /// Buys the current offer into 1-based queue `position` for the player
    /// on turn. Returns the score charged.
    pub fn take_offer(&mut self, position: usize) -> Result<i32> {
        let name = self.offer.current();
        let player = &mut self.players[self.current.index()];
        player.update_queue_with_offer(
            position.wrapping_sub(1),
            MoveOption::new(name, player.direction()),
        )?;
        let cost = replacement_cost(position);
        player.change_score(-cost);
        debug!(
            player = player.name(),
            offer = %name,
            position,
            cost,
            "offer taken"
        );
        self.offer.reroll();
        Ok(cost)
    }

    /// Applies a move for the player on turn without ending the turn. An
    /// illegal displacement leaves everything untouched.
    fn resolve_move(&mut self, choice: usize, start: i32, finish: i32) -> Result<TurnReport> {
        let scored = self.current;
        let idx = scored.index();
        let legal = self.players[idx].check_player_move(choice, start, finish)?;
        let mut report = TurnReport {
            player: scored,
            choice,
            start,
            finish,
            legal,
            movement_cost: 0,
            capture_points: 0,
            occupancy_bonus: 0,
            score: self.players[idx].score(),
        };
        if !legal {
            debug!(player = ?scored, choice, start, finish, "move rejected");
            return Ok(report);
        }
        if self.board.square_at(start)?.piece().is_none() {
            return Err(DastanError::EmptySquare { reference: start });
        }

        report.capture_points = self.board.capture_points(finish)?;
        report.movement_cost = movement_cost(choice);
        let player = &mut self.players[idx];
        player.update_queue_after_move(choice)?;
        self.board.relocate(start, finish)?;
        report.occupancy_bonus = self.board.occupancy_points(scored);
        player.change_score(report.occupancy_bonus + report.capture_points - report.movement_cost);
        report.score = player.score();
        debug!(
            player = ?scored,
            choice,
            start,
            finish,
            capture = report.capture_points,
            occupancy = report.occupancy_bonus,
            score = report.score,
            "move applied"
        );
        Ok(report)
    }

    fn end_turn(&mut self) -> Option<FinalResult> {
        self.current = self.current.opponent();
        if self.board.is_game_over() {
            let result = self.final_result();
            info!(scores = ?result.scores, outcome = ?result.outcome, "game over");
            self.phase = Phase::GameOver(result);
            Some(result)
        } else {
            self.phase = Phase::AwaitingOfferDecision;
            None
        }
    }

    /// Ranking purely by score; equal scores draw.
    pub fn final_result(&self) -> FinalResult {
        let scores = [self.players[0].score(), self.players[1].score()];
        let outcome = match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::One),
            std::cmp::Ordering::Less => Outcome::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => Outcome::Draw,
        };
        FinalResult { scores, outcome }
    }

    pub fn snapshot(&self) -> FrameView {
        let squares = self
            .board
            .squares()
            .iter()
            .map(|s| SquareView {
                symbol: s.symbol(),
                piece: s.piece().map(|p| p.symbol()),
            })
            .collect();
        let players = self
            .players
            .iter()
            .map(|p| PlayerView {
                name: p.name().to_string(),
                score: p.score(),
                queue: p.queue().names(),
            })
            .collect();
        FrameView {
            rows: self.board.rows(),
            columns: self.board.columns(),
            squares,
            offer: self.offer.current(),
            players,
            current: self.current,
            phase: self.phase,
        }
    }
}
