//! Plain-text rendering of game state.

use crate::config::AppConfig;
use noughts_crosses::{Board, GameState, GameStatus, Mark};

/// Text shown in a single cell: the player's symbol, an index hint, or blank.
pub fn cell_text(board: &Board, index: usize, config: &AppConfig) -> String {
    match board.at(index).and_then(Mark::player) {
        Some(player) => config.symbol(player).to_string(),
        None if *config.show_position_hints() => index.to_string(),
        None => " ".to_string(),
    }
}

/// Renders the board as a 3x3 grid.
pub fn board_text(board: &Board, config: &AppConfig) -> String {
    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| format!(" {} ", cell_text(board, row * 3 + col, config)))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Main status message: whose move it is, or how the game ended.
pub fn headline(state: &GameState, config: &AppConfig) -> String {
    match state.status() {
        GameStatus::InProgress => format!(
            "Current player is: {}",
            config.symbol(state.current_player())
        ),
        GameStatus::Won(player) => format!("{} wins!", config.symbol(player)),
        GameStatus::Draw => "The game ended with a tie!".to_string(),
    }
}

/// Turn counter line, shown only while the game is running.
pub fn turn_line(state: &GameState) -> Option<String> {
    (!state.is_game_over()).then(|| format!("Current turn is: {}", state.turn_number()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_crosses::place_mark;

    #[test]
    fn test_board_text_with_hints() {
        let state = place_mark(&GameState::new(), 4).expect("legal move");
        let text = board_text(state.board(), &AppConfig::default());
        assert_eq!(
            text,
            " 0 | 1 | 2 \n---+---+---\n 3 | O | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_board_text_without_hints() {
        let config: AppConfig = toml::from_str("show_position_hints = false").expect("valid toml");
        let text = board_text(GameState::new().board(), &config);
        assert!(!text.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_headlines() {
        let config = AppConfig::default();
        let mut state = GameState::new();
        assert_eq!(headline(&state, &config), "Current player is: O");
        assert_eq!(turn_line(&state).as_deref(), Some("Current turn is: 1"));

        for index in [0, 3, 1, 4, 2] {
            state = place_mark(&state, index).expect("legal move");
        }
        assert_eq!(headline(&state, &config), "O wins!");
        assert_eq!(turn_line(&state), None);
    }

    #[test]
    fn test_tie_headline() {
        let mut state = GameState::new();
        for index in [0, 1, 2, 4, 7, 3, 5, 8, 6] {
            state = place_mark(&state, index).expect("legal move");
        }
        assert_eq!(headline(&state, &AppConfig::default()), "The game ended with a tie!");
    }
}
