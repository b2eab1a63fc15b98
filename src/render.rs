//! Plain-text rendering of a [`FrameView`] for terminal frontends.

use std::fmt::Write;

use crate::game::{FinalResult, FrameView, Outcome};

pub fn board_to_string(view: &FrameView) -> String {
    let mut out = String::from("\n   ");
    for column in 1..=view.columns {
        let _ = write!(out, "{column}  ");
    }
    out.push_str("\n  ");
    for _ in 0..view.columns {
        out.push_str("---");
    }
    out.push_str("-\n");
    for row in 1..=view.rows {
        let _ = write!(out, "{row} ");
        for column in 1..=view.columns {
            let square = &view.squares[((row - 1) * view.columns + (column - 1)) as usize];
            out.push('|');
            out.push(square.symbol);
            out.push(square.piece.unwrap_or(' '));
        }
        out.push_str("|\n");
    }
    out.push_str("  -");
    for _ in 0..view.columns {
        out.push_str("---");
    }
    out.push_str("\n\n");
    out
}

/// Board, current offer and the state of the player on turn.
pub fn state_to_string(view: &FrameView) -> String {
    let mut out = board_to_string(view);
    let player = &view.players[view.current.index()];
    let _ = writeln!(out, "Move option offer: {}", view.offer);
    out.push('\n');
    let _ = writeln!(out, "{}", player.name);
    let _ = writeln!(out, "Score: {}", player.score);
    out.push_str("Move option queue: ");
    for (i, name) in player.queue.iter().enumerate() {
        let _ = write!(out, "{}. {}   ", i + 1, name);
    }
    out.push_str("\n\n");
    let _ = writeln!(out, "Turn: {}", player.name);
    out
}

pub fn final_result_to_string(view: &FrameView, result: &FinalResult) -> String {
    match result.outcome {
        Outcome::Draw => "Draw!".to_string(),
        Outcome::Winner(id) => format!("{} is the winner!", view.players[id.index()].name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Dastan;
    use crate::player::PlayerId;
    use crate::settings::GameSettings;

    #[test]
    fn renders_opening_board() {
        let game = Dastan::new(&GameSettings::default()).unwrap();
        let text = board_to_string(&game.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "   1  2  3  4  5  6  ");
        assert_eq!(lines[2], "  -------------------");
        assert_eq!(lines[3], "1 |  |  |K1|  |  |  |");
        assert_eq!(lines[4], "2 |  | !| !| !| !|  |");
        assert_eq!(lines[7], "5 |  | \"| \"| \"| \"|  |");
        assert_eq!(lines[8], "6 |  |  |  |k2|  |  |");
        assert_eq!(lines[9], "  -------------------");
    }

    #[test]
    fn state_names_player_on_turn() {
        let game = Dastan::new(&GameSettings::default()).unwrap();
        let text = state_to_string(&game.snapshot());
        assert!(text.contains("Move option offer: jazair\n"));
        assert!(text.contains("Player One\nScore: 100\nMove option queue: 1. ryott   2. chowkidar"));
        assert!(text.ends_with("Turn: Player One\n"));
    }

    #[test]
    fn final_result_text() {
        let game = Dastan::new(&GameSettings::default()).unwrap();
        let view = game.snapshot();
        let draw = game.final_result();
        assert_eq!(final_result_to_string(&view, &draw), "Draw!");
        let win = FinalResult {
            scores: [90, 95],
            outcome: Outcome::Winner(PlayerId::Two),
        };
        assert_eq!(final_result_to_string(&view, &win), "Player Two is the winner!");
    }
}
