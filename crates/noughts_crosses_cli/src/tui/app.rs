//! Terminal UI state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use noughts_crosses::{GameEngine, GameState, Position};
use tracing::{debug, instrument};

/// Everything the board view needs between frames.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new app with a fresh game and the cursor in the center.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            message: None,
            should_quit: false,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Returns the highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the feedback line from the last key, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    ///
    /// Arrows move the cursor, Enter or Space places at the cursor, a digit
    /// 0-8 places at that index, `n` starts a new game once this one is over,
    /// `q` or Esc quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = c.to_digit(10) {
                    self.place(index as usize);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.new_game(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn place(&mut self, index: usize) {
        match self.engine.place_mark(index) {
            Ok(state) => {
                debug!(index, turn = state.turn_number(), "Placed from TUI");
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    // New Game is only offered once the current game has ended.
    fn new_game(&mut self) {
        if self.engine.is_game_over() {
            self.engine.reset();
            self.cursor = Position::Center;
        } else {
            self.message = Some("Finish this game first".to_string());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_crosses::{GameStatus, Mark, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.state().board().get(Position::TopLeft), Mark::Nought);
        assert_eq!(app.state().current_player(), Player::Cross);
    }

    #[test]
    fn test_digit_places_directly() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('8')]);
        assert_eq!(app.state().board().get(Position::BottomRight), Mark::Nought);
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_digits_use_zero_based_indices() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('0')]);
        assert_eq!(app.state().board().get(Position::TopLeft), Mark::Nought);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_rejected_move_sets_message() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.message(), Some("Square Center is already occupied"));
        assert_eq!(app.state().turn_number(), 2);

        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.message(), Some("Position 9 is out of range (must be 0-8)"));
    }

    #[test]
    fn test_new_game_only_when_over() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('0'), KeyCode::Char('n')]);
        assert_eq!(app.message(), Some("Finish this game first"));
        assert_eq!(app.state().turn_number(), 2);

        press(
            &mut app,
            &[KeyCode::Char('3'), KeyCode::Char('1'), KeyCode::Char('4'), KeyCode::Char('2')],
        );
        assert_eq!(app.state().status(), GameStatus::Won(Player::Nought));

        press(&mut app, &[KeyCode::Char('n')]);
        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Esc]);
        assert!(app.should_quit());
    }
}
