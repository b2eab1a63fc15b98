use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Piece,
    Mirza,
}

impl PieceKind {
    pub fn points_if_captured(self) -> i32 {
        match self {
            PieceKind::Piece => 1,
            PieceKind::Mirza => 5,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    belongs_to: PlayerId,
    points_if_captured: i32,
    symbol: char,
}

impl Piece {
    pub fn new(kind: PieceKind, belongs_to: PlayerId) -> Self {
        let symbol = match (kind, belongs_to) {
            (PieceKind::Piece, PlayerId::One) => '!',
            (PieceKind::Mirza, PlayerId::One) => '1',
            (PieceKind::Piece, PlayerId::Two) => '"',
            (PieceKind::Mirza, PlayerId::Two) => '2',
        };
        Self {
            kind,
            belongs_to,
            points_if_captured: kind.points_if_captured(),
            symbol,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn belongs_to(&self) -> PlayerId {
        self.belongs_to
    }

    pub fn points_if_captured(&self) -> i32 {
        self.points_if_captured
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn is_mirza(&self) -> bool {
        self.kind == PieceKind::Mirza
    }
}
