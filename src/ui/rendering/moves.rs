//! Move list rendering for time travel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    ui::{app::App, types::Focus},
    view::GameView,
};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect, view: &GameView) {
        let focused = self.focus == Focus::Moves;

        let items: Vec<ListItem> = view
            .moves
            .iter()
            .map(|mv| {
                let selected = focused && mv.step == self.selected_step;
                let marker = if selected { "> " } else { "  " };

                let mut style = Style::default();
                if mv.is_current {
                    style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
                }
                if selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                ListItem::new(format!("{}{}. {}", marker, mv.step, mv.description)).style(style)
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let title = format!("Moves | o: {}", view.order_toggle_label);

        // Scroll so the entry the user is acting on stays in view.
        let anchor = if focused {
            self.selected_step
        } else {
            self.game.step_number()
        };
        let mut state =
            ListState::default().with_selected(view.moves.iter().position(|mv| mv.step == anchor));

        f.render_stateful_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            ),
            area,
            &mut state,
        );
    }
}
