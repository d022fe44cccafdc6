use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    clock::{CLOCK_HEADING, ClockState},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_clock(&self, f: &mut Frame, area: Rect, clock: &ClockState) {
        let lines = vec![
            Line::styled(CLOCK_HEADING, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(clock.time_text()),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Clock")),
            area,
        );
    }
}
