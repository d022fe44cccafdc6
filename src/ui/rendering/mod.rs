mod board;
mod clock;
mod logs;
mod moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{ui::app::App, view::GameView};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let view = GameView::from_state(&self.game);

        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status
                Constraint::Length(11), // Board
                Constraint::Min(3),     // Key help
            ])
            .split(main_layout[0]);

        self.draw_status(f, left_layout[0], &view);
        self.draw_board(f, left_layout[1], &view);
        self.draw_help(f, left_layout[2]);

        let clock_height = if self.clock.is_some() { 4 } else { 0 };
        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(clock_height),
                Constraint::Min(5),    // Move list
                Constraint::Length(8), // Logs
            ])
            .split(main_layout[1]);

        if let Some(ref clock) = self.clock {
            self.draw_clock(f, right_layout[0], clock);
        }
        self.draw_moves(f, right_layout[1], &view);
        self.draw_logs(f, right_layout[2]);
    }
}
