//! Rules engine for Dastan, a two-player strategy game.
//!
//! Each player moves pieces using a rotating queue of five move options and
//! may buy a randomly offered option into that queue at a score cost. A game
//! ends when a mirza is captured or lands on the enemy Kotla; the higher
//! score wins.
//!
//! The engine is driven one integer at a time through [`Dastan::submit`],
//! so the same state machine serves the console binary, the browser client
//! below, and scripted tests.
//!
//! ```
//! use dastan::{Dastan, Event, GameSettings};
//!
//! let mut game = Dastan::new(&GameSettings::default()).unwrap();
//! game.submit(1).unwrap(); // move with queue slot 1 (ryott)
//! game.submit(23).unwrap(); // piece on row 2, column 3
//! let event = game.submit(33).unwrap(); // one row forward
//! assert!(matches!(event, Event::TurnEnded { .. }));
//! ```

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod offer;
pub mod piece;
pub mod player;
pub mod render;
pub mod settings;

pub use board::{Board, Square, SquareKind};
pub use error::DastanError;
pub use game::{Dastan, Event, FinalResult, FrameView, Outcome, Phase, TurnReport};
pub use moves::{Move, MoveOption, MoveOptionName, MoveOptionQueue};
pub use offer::{MoveOfferGenerator, RandomizerKind};
pub use piece::{Piece, PieceKind};
pub use player::{Player, PlayerId};
pub use settings::GameSettings;

#[wasm_bindgen(start)]
pub fn bootstrap() {
    console_error_panic_hook::set_once();
}

/// Browser handle around a [`Dastan`] game.
#[wasm_bindgen]
pub struct GameClient {
    game: Dastan,
}

#[wasm_bindgen]
impl GameClient {
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<GameClient, JsValue> {
        let settings: GameSettings = from_value(settings).unwrap_or_default();
        let game = Dastan::new(&settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { game })
    }

    #[wasm_bindgen(js_name = submit)]
    pub fn submit(&mut self, value: i32) -> Result<JsValue, JsValue> {
        let event = self
            .game
            .submit(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_value(&event).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_value(&self.game.snapshot()).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = prompt)]
    pub fn prompt(&self) -> String {
        self.game.prompt().to_string()
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
