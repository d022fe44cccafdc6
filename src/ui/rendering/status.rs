use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{app::App, types::Focus},
    view::GameView,
};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect, view: &GameView) {
        let style = if view.board.winning_cells.is_some() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        f.render_widget(
            Paragraph::new(view.status.as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let help_text = match self.focus {
            Focus::Board => "Arrows/hjkl = move | Enter/1-9 = play | Tab = moves | o = order | Esc = quit",
            Focus::Moves => "Up/Down = select | Enter = go to | Tab = board | o = order | Esc = quit",
        };

        f.render_widget(
            Paragraph::new(help_text)
                .wrap(ratatui::widgets::Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
