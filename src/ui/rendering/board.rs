//! Board grid rendering with cursor and winning line highlight.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    game::{Cell, Player},
    ui::{app::App, types::Focus},
    view::{CellView, GameView},
};

const ROW_SEPARATOR: &str = "───┼───┼───";

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect, view: &GameView) {
        let mut lines: Vec<Line> = vec![Line::from("")];

        for row in &view.board.rows {
            if row.key > 0 {
                lines.push(Line::from(Span::styled(
                    ROW_SEPARATOR,
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let mut spans = Vec::new();
            for (i, cell) in row.cells.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
                spans.push(self.cell_span(cell));
            }
            lines.push(Line::from(spans));
        }

        let border_style = if self.focus == Focus::Board {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("Board"),
            ),
            area,
        );
    }

    fn cell_span(&self, cell: &CellView) -> Span<'static> {
        let (text, mut style) = match cell.cell {
            Cell::Empty => (
                format!(" {} ", cell.index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Cell::Occupied(Player::X) => (
                " X ".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Cell::Occupied(Player::O) => (
                " O ".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        if cell.is_winner {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if self.focus == Focus::Board && cell.index == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Span::styled(text, style)
    }
}
