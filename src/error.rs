/// Errors raised by the rules engine.
///
/// Bad user input never shows up here; the engine re-prompts for it. These
/// variants mark a caller breaking a precondition, or a bad configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DastanError {
    #[error("square {reference} is off the board")]
    SquareOutOfBounds { reference: i32 },

    #[error("queue position {position} is outside 0..5")]
    QueuePositionOutOfRange { position: usize },

    #[error("square {reference} holds no piece")]
    EmptySquare { reference: i32 },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("the game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, DastanError>;
