//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::{
    app::App,
    handlers::{GameHandler, InputHandler},
    types::{Focus, LogBuffer, UiConfig},
};
use crate::game::{Cell, Player};

/// Helper function to create a test app without the clock panel.
fn create_test_app() -> App {
    let config = UiConfig {
        show_clock: false,
        descending: false,
    };
    App::new(config, LogBuffer::new())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn render(app: &App) -> String {
    render_sized(app, 100, 30)
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.game.step_number(), 0);
        assert_eq!(app.focus, Focus::Board);
        assert_eq!(app.cursor, 4);
        assert_eq!(app.selected_step, 0);
        assert!(app.clock.is_none());
    }

    #[test]
    fn test_app_descending_config() {
        let app = App::new(
            UiConfig {
                show_clock: true,
                descending: true,
            },
            LogBuffer::new(),
        );

        assert!(!app.game.is_ascending());
        assert!(app.clock.is_some());
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines, vec!["Test message 1", "Test message 2"]);
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert_eq!(lines.last().unwrap(), "Message 349");
    }

    #[test]
    fn test_tick_updates_clock() {
        let mut app = App::new(UiConfig::default(), LogBuffer::new());
        let now = chrono::Local::now();

        app.on_tick(now);

        let clock = app.clock.as_ref().unwrap();
        assert_eq!(clock.ticks(), 1);
        assert_eq!(clock.now(), now);
    }

    #[test]
    fn test_tick_without_clock_is_ignored() {
        let mut app = create_test_app();
        app.on_tick(chrono::Local::now());
        assert!(app.clock.is_none());
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_digit_plays_cell() {
        let mut app = create_test_app();

        assert!(!press(&mut app, KeyCode::Char('1')));

        assert_eq!(app.game.current_board().cell(0), Cell::Occupied(Player::X));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_step, 1);
    }

    #[test]
    fn test_cursor_movement_and_enter() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 2);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.current_board().cell(2), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_cursor_clamped_to_grid() {
        let mut app = create_test_app();

        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Char('l'));
        }
        assert_eq!(app.cursor, 8);

        for _ in 0..5 {
            press(&mut app, KeyCode::Char('k'));
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Moves);

        // Digits do nothing while the move list has focus
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game.step_number(), 0);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Board);
    }

    #[test]
    fn test_toggle_order_key() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('o'));
        assert!(!app.game.is_ascending());

        press(&mut app, KeyCode::Char('O'));
        assert!(app.game.is_ascending());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();

        assert!(press(&mut app, KeyCode::Esc));
        assert!(
            InputHandler::new(&mut app)
                .handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
        );
        // Plain q is not a quit key
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_time_travel_through_move_list() {
        let mut app = create_test_app();
        for c in ['1', '4', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.selected_step, 3);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.step_number(), 1);
        assert_eq!(app.game.history().len(), 4);
        assert!(!app.game.x_is_next());
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut app = create_test_app();
        for c in ['1', '2', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Tab);

        // Descending list: 3, 2, 1, 0
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_step, 2);

        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_step, 0);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_step, 3);
    }
}

#[cfg(test)]
mod game_handler_tests {
    use super::*;

    #[test]
    fn test_occupied_cell_is_logged_and_ignored() {
        let mut app = create_test_app();

        GameHandler::new(&mut app).play_cell(4);
        let before = app.game.clone();
        GameHandler::new(&mut app).play_cell(4);

        assert_eq!(app.game, before);
        assert_eq!(app.logs.lines().last().unwrap(), "Cell 5 ignored: cell occupied");
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut app = create_test_app();
        for idx in [0, 3, 1, 4, 2] {
            GameHandler::new(&mut app).play_cell(idx);
        }
        assert!(app.logs.lines().contains(&"Winner: X".to_string()));

        let before = app.game.clone();
        GameHandler::new(&mut app).play_cell(8);

        assert_eq!(app.game, before);
        assert_eq!(
            app.logs.lines().last().unwrap(),
            "Cell 9 ignored: game already won"
        );
    }

    #[test]
    fn test_branching_after_jump() {
        let mut app = create_test_app();
        for idx in [0, 3, 1, 4, 2] {
            GameHandler::new(&mut app).play_cell(idx);
        }

        app.selected_step = 2;
        GameHandler::new(&mut app).jump_to_selected();
        GameHandler::new(&mut app).play_cell(5);

        assert_eq!(app.game.history().len(), 4);
        assert_eq!(app.game.step_number(), 3);
        assert_eq!(app.selected_step, 3);
        assert!(app.game.current_winner().is_none());
    }

    #[test]
    fn test_jump_logs_description() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).play_cell(4);

        app.selected_step = 1;
        GameHandler::new(&mut app).jump_to_selected();

        assert_eq!(app.logs.lines().last().unwrap(), "Go to move #1 at (2, 2)");
    }

    #[test]
    fn test_move_is_logged() {
        let mut app = create_test_app();
        GameHandler::new(&mut app).play_cell(5);

        assert_eq!(app.logs.lines().last().unwrap(), "Move #1: X at (3, 2)");
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;

    #[test]
    fn test_render_initial_screen() {
        let app = create_test_app();
        let screen = render(&app);

        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("o: Descending"));
        assert!(!screen.contains("Clock is ticking."));
    }

    #[test]
    fn test_render_winner_and_moves() {
        let mut app = create_test_app();
        for idx in [0, 3, 1, 4, 2] {
            GameHandler::new(&mut app).play_cell(idx);
        }
        let screen = render(&app);

        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5 at (3, 1)"));
    }

    #[test]
    fn test_render_clock_panel() {
        let app = App::new(UiConfig::default(), LogBuffer::new());
        let screen = render(&app);

        assert!(screen.contains("Clock is ticking."));
        assert!(screen.contains("It is "));
    }

    fn play_drawn_game(app: &mut App) {
        for idx in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
            GameHandler::new(app).play_cell(idx);
        }
    }

    #[test]
    fn test_move_list_scrolls_to_selected_entry() {
        let mut app = App::new(UiConfig::default(), LogBuffer::new());
        play_drawn_game(&mut app);
        assert_eq!(app.game.history().len(), 10);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected_step, 9);

        let screen = render_sized(&app, 100, 20);
        assert!(screen.contains("9. Go to move #9 at (1, 2)"));

        press(&mut app, KeyCode::Home);
        let screen = render_sized(&app, 100, 20);
        assert!(screen.contains("0. Go to game start"));
    }

    #[test]
    fn test_move_list_scrolls_to_current_step_when_unfocused() {
        let mut app = App::new(UiConfig::default(), LogBuffer::new());
        play_drawn_game(&mut app);

        let screen = render_sized(&app, 100, 20);
        assert!(screen.contains("9. Go to move #9 at (1, 2)"));
    }
}

#[cfg(test)]
mod terminal_setup_tests {
    use std::{cell::Cell as Flag, io};

    use super::super::enter_or_rollback;

    #[test]
    fn test_failed_setup_is_rolled_back() {
        let rolled_back = Flag::new(false);

        let result = enter_or_rollback(
            || Err(io::Error::other("alternate screen unavailable")),
            || {
                rolled_back.set(true);
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal_state() {
        let rolled_back = Flag::new(false);

        let result = enter_or_rollback(
            || Ok(()),
            || {
                rolled_back.set(true);
                Ok(())
            },
        );

        assert!(result.is_ok());
        assert!(!rolled_back.get());
    }
}
