//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Focus};
use super::GameHandler;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Tab, _) => {
                self.app.focus = self.app.focus.toggled();
            }

            (KeyCode::Char('o' | 'O'), _) => {
                GameHandler::new(self.app).toggle_move_order();
            }

            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let mut handler = GameHandler::new(self.app);
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => handler.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => handler.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => handler.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => handler.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => handler.play_cursor(),
            // 1-9 map to cells 0-8
            KeyCode::Char(c @ '1'..='9') => handler.play_cell(c as usize - '1' as usize),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, key: KeyEvent) {
        let mut handler = GameHandler::new(self.app);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => handler.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => handler.move_selection(1),
            KeyCode::Home => handler.move_selection(isize::MIN),
            KeyCode::End => handler.move_selection(isize::MAX),
            KeyCode::Enter => handler.jump_to_selected(),
            _ => {}
        }
    }
}
