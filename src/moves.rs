use serde::{Deserialize, Serialize};

use crate::board::decompose;
use crate::error::{DastanError, Result};
use crate::player::PlayerId;

pub const QUEUE_LENGTH: usize = 5;

/// A displacement, already scaled by the owning player's direction.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Move {
    pub row_change: i32,
    pub column_change: i32,
}

impl Move {
    pub fn new(row_change: i32, column_change: i32) -> Self {
        Self {
            row_change,
            column_change,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MoveOptionName {
    Ryott,
    Faujdar,
    Jazair,
    Cuirassier,
    Chowkidar,
}

impl MoveOptionName {
    pub fn all() -> [MoveOptionName; 5] {
        [
            MoveOptionName::Ryott,
            MoveOptionName::Faujdar,
            MoveOptionName::Jazair,
            MoveOptionName::Cuirassier,
            MoveOptionName::Chowkidar,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveOptionName::Ryott => "ryott",
            MoveOptionName::Faujdar => "faujdar",
            MoveOptionName::Jazair => "jazair",
            MoveOptionName::Cuirassier => "cuirassier",
            MoveOptionName::Chowkidar => "chowkidar",
        }
    }

    /// Displacements as (row, column) before direction scaling.
    pub fn displacements(self) -> &'static [(i32, i32)] {
        const RYOTT: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        const FAUJDAR: [(i32, i32); 4] = [(0, -1), (0, 1), (0, 2), (0, -2)];
        const JAZAIR: [(i32, i32); 7] = [
            (2, 0),
            (2, -2),
            (2, 2),
            (0, 2),
            (0, -2),
            (-1, -1),
            (-1, 1),
        ];
        const CUIRASSIER: [(i32, i32); 4] = [(1, 0), (2, 0), (1, -2), (1, 2)];
        const CHOWKIDAR: [(i32, i32); 6] = [(1, 1), (1, -1), (-1, 1), (-1, -1), (0, 2), (0, -2)];
        match self {
            MoveOptionName::Ryott => &RYOTT,
            MoveOptionName::Faujdar => &FAUJDAR,
            MoveOptionName::Jazair => &JAZAIR,
            MoveOptionName::Cuirassier => &CUIRASSIER,
            MoveOptionName::Chowkidar => &CHOWKIDAR,
        }
    }
}

impl std::fmt::Display for MoveOptionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOption {
    name: MoveOptionName,
    possible_moves: Vec<Move>,
}

impl MoveOption {
    /// Builds the catalog entry for `name` with every delta multiplied by `direction`.
    pub fn new(name: MoveOptionName, direction: i32) -> Self {
        let possible_moves = name
            .displacements()
            .iter()
            .map(|&(dr, dc)| Move::new(dr * direction, dc * direction))
            .collect();
        Self {
            name,
            possible_moves,
        }
    }

    pub fn name(&self) -> MoveOptionName {
        self.name
    }

    pub fn possible_moves(&self) -> &[Move] {
        &self.possible_moves
    }

    /// No bounds checking: both references were validated on selection.
    pub fn contains_move_to(&self, start: i32, finish: i32) -> bool {
        let (start_row, start_col) = decompose(start);
        let (finish_row, finish_col) = decompose(finish);
        self.possible_moves.iter().any(|m| {
            start_row + m.row_change == finish_row && start_col + m.column_change == finish_col
        })
    }
}

/// Five move options; earlier slots are cheaper to use and dearer to replace.
#[derive(Clone, Debug)]
pub struct MoveOptionQueue {
    queue: Vec<MoveOption>,
}

impl MoveOptionQueue {
    pub fn new(options: [MoveOption; QUEUE_LENGTH]) -> Self {
        Self {
            queue: options.to_vec(),
        }
    }

    /// Opening queue for each seat.
    pub fn starting(player: PlayerId) -> Self {
        let names = match player {
            PlayerId::One => [
                MoveOptionName::Ryott,
                MoveOptionName::Chowkidar,
                MoveOptionName::Cuirassier,
                MoveOptionName::Faujdar,
                MoveOptionName::Jazair,
            ],
            PlayerId::Two => [
                MoveOptionName::Ryott,
                MoveOptionName::Chowkidar,
                MoveOptionName::Jazair,
                MoveOptionName::Faujdar,
                MoveOptionName::Cuirassier,
            ],
        };
        Self::new(names.map(|n| MoveOption::new(n, player.direction())))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn check(&self, position: usize) -> Result<()> {
        if position >= self.queue.len() {
            return Err(DastanError::QueuePositionOutOfRange { position });
        }
        Ok(())
    }

    pub fn get(&self, position: usize) -> Result<&MoveOption> {
        self.check(position)?;
        Ok(&self.queue[position])
    }

    pub fn replace(&mut self, position: usize, option: MoveOption) -> Result<()> {
        self.check(position)?;
        self.queue[position] = option;
        Ok(())
    }

    pub fn rotate_to_back(&mut self, position: usize) -> Result<()> {
        self.check(position)?;
        let used = self.queue.remove(position);
        self.queue.push(used);
        Ok(())
    }

    pub fn names(&self) -> Vec<MoveOptionName> {
        self.queue.iter().map(MoveOption::name).collect()
    }

    pub fn as_display_string(&self) -> String {
        self.queue
            .iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {}   ", i + 1, m.name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(row: i32, col: i32) -> i32 {
        row * 10 + col
    }

    #[test]
    fn every_option_matches_exactly_its_scaled_displacements() {
        let start = (5, 5);
        for name in MoveOptionName::all() {
            for direction in [1, -1] {
                let option = MoveOption::new(name, direction);
                let scaled: Vec<(i32, i32)> = name
                    .displacements()
                    .iter()
                    .map(|&(r, c)| (r * direction, c * direction))
                    .collect();
                for dr in -3..=3 {
                    for dc in -3..=3 {
                        let finish = reference(start.0 + dr, start.1 + dc);
                        assert_eq!(
                            option.contains_move_to(reference(start.0, start.1), finish),
                            scaled.contains(&(dr, dc)),
                            "{name} direction {direction} delta ({dr}, {dc})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn cuirassier_forward_depends_on_direction() {
        let one = MoveOption::new(MoveOptionName::Cuirassier, 1);
        let two = MoveOption::new(MoveOptionName::Cuirassier, -1);
        assert!(one.contains_move_to(23, 43));
        assert!(!one.contains_move_to(43, 23));
        assert!(two.contains_move_to(53, 33));
        assert!(!two.contains_move_to(33, 53));
    }

    #[test]
    fn jazair_keeps_insertion_order() {
        let option = MoveOption::new(MoveOptionName::Jazair, -1);
        assert_eq!(option.possible_moves()[0], Move::new(-2, 0));
        assert_eq!(option.possible_moves()[6], Move::new(1, -1));
        assert_eq!(option.possible_moves().len(), 7);
    }

    #[test]
    fn rotate_to_back_moves_used_item_last() {
        for p in 0..QUEUE_LENGTH {
            let mut queue = MoveOptionQueue::starting(PlayerId::One);
            let before = queue.names();
            queue.rotate_to_back(p).unwrap();
            let after = queue.names();
            assert_eq!(after.len(), QUEUE_LENGTH);
            assert_eq!(after[QUEUE_LENGTH - 1], before[p]);
            let mut rest = before.clone();
            rest.remove(p);
            assert_eq!(&after[..QUEUE_LENGTH - 1], rest.as_slice());
        }
    }

    #[test]
    fn out_of_range_positions_fail() {
        let mut queue = MoveOptionQueue::starting(PlayerId::Two);
        assert_eq!(
            queue.get(5).unwrap_err(),
            DastanError::QueuePositionOutOfRange { position: 5 }
        );
        assert!(queue.rotate_to_back(7).is_err());
        assert!(
            queue
                .replace(5, MoveOption::new(MoveOptionName::Ryott, -1))
                .is_err()
        );
        assert_eq!(queue.len(), QUEUE_LENGTH);
    }

    #[test]
    fn replace_keeps_order_of_other_slots() {
        let mut queue = MoveOptionQueue::starting(PlayerId::One);
        queue
            .replace(1, MoveOption::new(MoveOptionName::Jazair, 1))
            .unwrap();
        assert_eq!(
            queue.names(),
            vec![
                MoveOptionName::Ryott,
                MoveOptionName::Jazair,
                MoveOptionName::Cuirassier,
                MoveOptionName::Faujdar,
                MoveOptionName::Jazair,
            ]
        );
    }

    #[test]
    fn display_string_is_numbered() {
        let queue = MoveOptionQueue::starting(PlayerId::One);
        assert_eq!(
            queue.as_display_string(),
            "1. ryott   2. chowkidar   3. cuirassier   4. faujdar   5. jazair   "
        );
    }
}
