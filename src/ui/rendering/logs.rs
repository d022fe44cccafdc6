//! Log panel rendering, newest line at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let logs = self.logs.lines();

        // Two rows go to the border.
        let visible = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(visible);
        let newest = logs.len().saturating_sub(1);

        let lines: Vec<Line> = logs
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, msg)| {
                let style = if i == newest {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::styled(msg.clone(), style)
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
            area,
        );
    }
}
