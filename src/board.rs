use serde::Serialize;

use crate::error::{DastanError, Result};
use crate::piece::{Piece, PieceKind};
use crate::player::PlayerId;

/// Splits a two-digit reference into (row, column).
pub fn decompose(reference: i32) -> (i32, i32) {
    (reference / 10, reference % 10)
}

pub fn compose(row: i32, column: i32) -> i32 {
    row * 10 + column
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum SquareKind {
    Plain,
    Kotla { owner: PlayerId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    kind: SquareKind,
    piece: Option<Piece>,
}

impl Square {
    fn plain() -> Self {
        Self {
            kind: SquareKind::Plain,
            piece: None,
        }
    }

    fn kotla(owner: PlayerId) -> Self {
        Self {
            kind: SquareKind::Kotla { owner },
            piece: None,
        }
    }

    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn belongs_to(&self) -> Option<PlayerId> {
        match self.kind {
            SquareKind::Plain => None,
            SquareKind::Kotla { owner } => Some(owner),
        }
    }

    pub fn is_kotla(&self) -> bool {
        matches!(self.kind, SquareKind::Kotla { .. })
    }

    pub fn symbol(&self) -> char {
        match self.kind {
            SquareKind::Plain => ' ',
            SquareKind::Kotla {
                owner: PlayerId::One,
            } => 'K',
            SquareKind::Kotla {
                owner: PlayerId::Two,
            } => 'k',
        }
    }

    /// Occupancy points this square is worth to `scored` right now.
    pub fn points_for_occupancy(&self, scored: PlayerId) -> i32 {
        let owner = match self.kind {
            SquareKind::Plain => return 0,
            SquareKind::Kotla { owner } => owner,
        };
        let occupied_by_scored = self.piece.is_some_and(|p| {
            p.belongs_to() == scored && matches!(p.kind(), PieceKind::Piece | PieceKind::Mirza)
        });
        match (owner == scored, occupied_by_scored) {
            (true, true) => 5,
            (false, true) => 1,
            (_, false) => 0,
        }
    }

    fn set_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }

    fn remove_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    rows: i32,
    columns: i32,
    squares: Vec<Square>,
}

impl Board {
    /// Board with both Kotlas laid out and no pieces.
    pub fn empty(rows: i32, columns: i32) -> Self {
        let mut squares = Vec::with_capacity((rows * columns).max(0) as usize);
        for row in 1..=rows {
            for column in 1..=columns {
                let square = if row == 1 && column == columns / 2 {
                    Square::kotla(PlayerId::One)
                } else if row == rows && column == columns / 2 + 1 {
                    Square::kotla(PlayerId::Two)
                } else {
                    Square::plain()
                };
                squares.push(square);
            }
        }
        Self {
            rows,
            columns,
            squares,
        }
    }

    /// Opening position: each mirza on its own Kotla, pieces one row in front.
    pub fn setup(rows: i32, columns: i32, pieces_per_player: i32) -> Result<Self> {
        let mut board = Self::empty(rows, columns);
        for count in 1..=pieces_per_player {
            board.place(compose(2, count + 1), Piece::new(PieceKind::Piece, PlayerId::One))?;
        }
        board.place(
            board.kotla_reference(PlayerId::One),
            Piece::new(PieceKind::Mirza, PlayerId::One),
        )?;
        for count in 1..=pieces_per_player {
            board.place(
                compose(rows - 1, count + 1),
                Piece::new(PieceKind::Piece, PlayerId::Two),
            )?;
        }
        board.place(
            board.kotla_reference(PlayerId::Two),
            Piece::new(PieceKind::Mirza, PlayerId::Two),
        )?;
        Ok(board)
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn kotla_reference(&self, owner: PlayerId) -> i32 {
        match owner {
            PlayerId::One => compose(1, self.columns / 2),
            PlayerId::Two => compose(self.rows, self.columns / 2 + 1),
        }
    }

    pub fn is_in_bounds(&self, reference: i32) -> bool {
        let (row, column) = decompose(reference);
        (1..=self.rows).contains(&row) && (1..=self.columns).contains(&column)
    }

    fn index_of(&self, reference: i32) -> Result<usize> {
        if !self.is_in_bounds(reference) {
            return Err(DastanError::SquareOutOfBounds { reference });
        }
        let (row, column) = decompose(reference);
        Ok(((row - 1) * self.columns + (column - 1)) as usize)
    }

    pub fn square_at(&self, reference: i32) -> Result<&Square> {
        let idx = self.index_of(reference)?;
        Ok(&self.squares[idx])
    }

    /// Puts `piece` on `reference`, returning whatever was there.
    pub fn place(&mut self, reference: i32, piece: Piece) -> Result<Option<Piece>> {
        let idx = self.index_of(reference)?;
        Ok(self.squares[idx].set_piece(piece))
    }

    /// A start square must hold one of `current`'s pieces; a finish square
    /// must not.
    pub fn is_valid_selection(&self, reference: i32, is_start: bool, current: PlayerId) -> bool {
        let Ok(square) = self.square_at(reference) else {
            return false;
        };
        match square.piece() {
            None => !is_start,
            Some(p) if p.belongs_to() == current => is_start,
            Some(_) => !is_start,
        }
    }

    pub fn capture_points(&self, finish: i32) -> Result<i32> {
        Ok(self
            .square_at(finish)?
            .piece()
            .map_or(0, |p| p.points_if_captured()))
    }

    /// Moves the piece on `start` to `finish`, returning any captured piece.
    pub fn relocate(&mut self, start: i32, finish: i32) -> Result<Option<Piece>> {
        let from = self.index_of(start)?;
        let to = self.index_of(finish)?;
        let piece = self.squares[from]
            .remove_piece()
            .ok_or(DastanError::EmptySquare { reference: start })?;
        Ok(self.squares[to].set_piece(piece))
    }

    pub fn occupancy_points(&self, scored: PlayerId) -> i32 {
        self.squares
            .iter()
            .map(|s| s.points_for_occupancy(scored))
            .sum()
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.piece.is_some()).count()
    }

    /// True once a mirza sits on the enemy Kotla or either mirza is gone.
    pub fn is_game_over(&self) -> bool {
        let mut has_mirza = [false; 2];
        for square in &self.squares {
            let Some(piece) = square.piece() else {
                continue;
            };
            if !piece.is_mirza() {
                continue;
            }
            if let Some(owner) = square.belongs_to() {
                if owner != piece.belongs_to() {
                    return true;
                }
            }
            has_mirza[piece.belongs_to().index()] = true;
        }
        !(has_mirza[0] && has_mirza[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(owner: PlayerId) -> Piece {
        Piece::new(PieceKind::Piece, owner)
    }

    fn mirza(owner: PlayerId) -> Piece {
        Piece::new(PieceKind::Mirza, owner)
    }

    #[test]
    fn in_bounds_matches_row_and_column_ranges() {
        let board = Board::empty(6, 7);
        for reference in -20..120 {
            let (row, col) = decompose(reference);
            let expected = (1..=6).contains(&row) && (1..=7).contains(&col);
            assert_eq!(board.is_in_bounds(reference), expected, "{reference}");
        }
        assert!(board.square_at(70).is_err());
        assert!(board.square_at(18).is_err());
        assert!(board.square_at(67).is_ok());
    }

    #[test]
    fn setup_places_pieces_and_kotlas() {
        let board = Board::setup(6, 6, 4).unwrap();
        assert_eq!(board.piece_count(), 10);
        assert_eq!(board.kotla_reference(PlayerId::One), 13);
        assert_eq!(board.kotla_reference(PlayerId::Two), 64);

        let home = board.square_at(13).unwrap();
        assert_eq!(home.symbol(), 'K');
        assert_eq!(home.piece().map(|p| p.symbol()), Some('1'));
        let away = board.square_at(64).unwrap();
        assert_eq!(away.symbol(), 'k');
        assert_eq!(away.piece().map(|p| p.symbol()), Some('2'));

        for col in 2..=5 {
            assert_eq!(
                board.square_at(compose(2, col)).unwrap().piece(),
                Some(&piece(PlayerId::One))
            );
            assert_eq!(
                board.square_at(compose(5, col)).unwrap().piece(),
                Some(&piece(PlayerId::Two))
            );
        }
        assert!(!board.is_game_over());
    }

    #[test]
    fn selection_rules() {
        let board = Board::setup(6, 6, 4).unwrap();
        let me = PlayerId::One;
        // own piece
        assert!(board.is_valid_selection(23, true, me));
        assert!(!board.is_valid_selection(23, false, me));
        // empty
        assert!(!board.is_valid_selection(33, true, me));
        assert!(board.is_valid_selection(33, false, me));
        // opponent piece
        assert!(!board.is_valid_selection(53, true, me));
        assert!(board.is_valid_selection(53, false, me));
        // off the board
        assert!(!board.is_valid_selection(77, true, me));
        assert!(!board.is_valid_selection(77, false, me));
        assert!(!board.is_valid_selection(10, false, me));
    }

    #[test]
    fn relocate_conserves_or_captures() {
        let mut board = Board::setup(6, 6, 4).unwrap();
        let before = board.piece_count();
        assert_eq!(board.relocate(23, 33), Ok(None));
        assert_eq!(board.piece_count(), before);
        assert!(board.square_at(23).unwrap().piece().is_none());

        assert_eq!(board.capture_points(53), Ok(1));
        assert_eq!(board.relocate(33, 53), Ok(Some(piece(PlayerId::Two))));
        assert_eq!(board.piece_count(), before - 1);
        assert_eq!(board.capture_points(64), Ok(5));

        assert_eq!(
            board.relocate(33, 43),
            Err(DastanError::EmptySquare { reference: 33 })
        );
    }

    #[test]
    fn kotla_occupancy_table() {
        for kind in [PieceKind::Piece, PieceKind::Mirza] {
            let mut board = Board::empty(6, 6);
            // scored player's own piece on their own kotla
            board.place(13, Piece::new(kind, PlayerId::One)).unwrap();
            assert_eq!(board.occupancy_points(PlayerId::One), 5);
            assert_eq!(board.occupancy_points(PlayerId::Two), 0);

            // scored player's piece on the opponent's kotla
            let mut board = Board::empty(6, 6);
            board.place(64, Piece::new(kind, PlayerId::One)).unwrap();
            assert_eq!(board.occupancy_points(PlayerId::One), 1);
            assert_eq!(board.occupancy_points(PlayerId::Two), 0);
        }
        let board = Board::empty(6, 6);
        assert_eq!(board.occupancy_points(PlayerId::One), 0);

        let mut board = Board::empty(6, 6);
        board.place(33, mirza(PlayerId::One)).unwrap();
        assert_eq!(board.square_at(33).unwrap().points_for_occupancy(PlayerId::One), 0);
    }

    #[test]
    fn invading_mirza_ends_game() {
        let mut board = Board::empty(6, 6);
        board.place(64, mirza(PlayerId::One)).unwrap();
        board.place(35, mirza(PlayerId::Two)).unwrap();
        assert!(board.is_game_over());
    }

    #[test]
    fn both_mirzas_away_from_enemy_kotla_continue() {
        let mut board = Board::empty(6, 6);
        board.place(13, mirza(PlayerId::One)).unwrap();
        board.place(35, mirza(PlayerId::Two)).unwrap();
        assert!(!board.is_game_over());
    }

    #[test]
    fn captured_mirza_ends_game() {
        let mut board = Board::empty(6, 6);
        board.place(13, mirza(PlayerId::One)).unwrap();
        board.place(35, piece(PlayerId::Two)).unwrap();
        assert!(board.is_game_over());
    }
}
