//! Read-side derivations rendered by every front end.
//!
//! Nothing here mutates a [`GameState`]; a view is rebuilt from the latest
//! snapshot after each event.

use std::fmt;

use serde::Serialize;

use crate::game::{Cell, GameState, MoveListItem};

/// Status line shown above the move list.
pub fn status_line(state: &GameState) -> String {
    match state.current_winner() {
        Some(info) => format!("Winner: {}", info.winner),
        None => format!("Next player: {}", state.next_player()),
    }
}

pub fn describe_move(item: &MoveListItem) -> String {
    match item.location {
        Some(location) if item.step > 0 => {
            format!("Go to move #{} at {}", item.step, location)
        }
        _ => "Go to game start".to_string(),
    }
}

/// Label of the ordering toggle: the order it switches to.
pub fn order_toggle_label(state: &GameState) -> &'static str {
    if state.is_ascending() {
        "Descending"
    } else {
        "Ascending"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,
    pub cell: Cell,
    pub is_winner: bool,
}

/// A board row keyed by its row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub key: usize,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub rows: Vec<RowView>,
    pub winning_cells: Option<[usize; 3]>,
}

impl BoardView {
    pub fn from_state(state: &GameState) -> Self {
        let winning_cells = state.current_winner().map(|info| info.winning_cells);
        let rows = state
            .current_board()
            .rows()
            .enumerate()
            .map(|(row, cells)| RowView {
                key: row,
                cells: cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| {
                        let index = row * 3 + col;
                        CellView {
                            index,
                            cell,
                            is_winner: winning_cells.is_some_and(|w| w.contains(&index)),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            rows,
            winning_cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveView {
    pub step: usize,
    pub description: String,
    pub is_current: bool,
}

/// Everything a front end needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub status: String,
    pub board: BoardView,
    pub moves: Vec<MoveView>,
    pub order_toggle_label: &'static str,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Self {
        let moves = state
            .move_list()
            .iter()
            .map(|item| MoveView {
                step: item.step,
                description: describe_move(item),
                is_current: item.step == state.step_number(),
            })
            .collect();

        Self {
            status: status_line(state),
            board: BoardView::from_state(state),
            moves,
            order_toggle_label: order_toggle_label(state),
        }
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.board.rows.iter().enumerate() {
            let marks: Vec<String> = row
                .cells
                .iter()
                .map(|c| match (c.cell, c.is_winner) {
                    (Cell::Occupied(p), true) => format!("[{}]", p),
                    (cell, false) => format!(" {} ", cell),
                    (Cell::Empty, true) => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", marks.join("|"))?;
            if i < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        for mv in &self.moves {
            let marker = if mv.is_current { '>' } else { ' ' };
            writeln!(f, "{} {}. {}", marker, mv.step, mv.description)?;
        }
        Ok(())
    }
}
