//! Game state transitions driven by the UI.

use crate::view::describe_move;

use super::super::app::App;

/// Helper struct forwarding UI actions into the game state.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Plays the side to move at `index`. Rejected moves leave the game as is.
    pub fn play_cell(&mut self, index: usize) {
        self.app.cursor = index;
        let player = self.app.game.next_player();
        let next = self.app.game.apply_move(index);

        if next == self.app.game {
            let reason = if self.app.game.current_winner().is_some() {
                "game already won"
            } else {
                "cell occupied"
            };
            self.app
                .log(format!("Cell {} ignored: {}", index + 1, reason));
            return;
        }

        self.app.game = next;
        self.app.selected_step = self.app.game.step_number();

        let step = self.app.game.step_number();
        if let Some(location) = self.app.game.history()[step].location {
            self.app
                .log(format!("Move #{}: {} at {}", step, player, location));
        }

        if let Some(info) = self.app.game.current_winner() {
            self.app.log(format!("Winner: {}", info.winner));
        }
    }

    pub fn play_cursor(&mut self) {
        let index = self.app.cursor;
        self.play_cell(index);
    }

    /// Jumps to the step currently selected in the move list.
    pub fn jump_to_selected(&mut self) {
        let step = self.app.selected_step;
        if step >= self.app.game.history().len() {
            return;
        }

        self.app.game = self.app.game.jump_to(step);
        let item = self.app.game.move_list().into_iter().find(|m| m.step == step);
        if let Some(item) = item {
            self.app.log(describe_move(&item));
        }
    }

    pub fn toggle_move_order(&mut self) {
        self.app.game = self.app.game.toggle_move_order();
        let order = if self.app.game.is_ascending() {
            "ascending"
        } else {
            "descending"
        };
        self.app.log(format!("Move list {}", order));
    }

    /// Moves the list selection by `delta` rows in display order.
    pub fn move_selection(&mut self, delta: isize) {
        let moves = self.app.game.move_list();
        let pos = moves
            .iter()
            .position(|m| m.step == self.app.selected_step)
            .unwrap_or(0);
        let target = pos.saturating_add_signed(delta).min(moves.len() - 1);
        self.app.selected_step = moves[target].step;
    }

    /// Moves the board cursor, clamped to the grid.
    pub fn move_cursor(&mut self, d_col: isize, d_row: isize) {
        let col = (self.app.cursor % 3).saturating_add_signed(d_col).min(2);
        let row = (self.app.cursor / 3).saturating_add_signed(d_row).min(2);
        self.app.cursor = row * 3 + col;
    }
}
