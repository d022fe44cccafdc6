//! Board snapshots, move history and the game state reducer.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::winner::{WinnerInfo, detect_winner};

pub const BOARD_SIZE: usize = 9;

/// A side in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// Nine cells in row-major order.
///
/// Boards are values: recording a move produces a new board and leaves the
/// previous snapshot untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Panics if `index` is outside 0..9.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.is_empty())
    }

    /// Returns a copy of this board with `player` placed at `index`.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(player);
        Self { cells }
    }

    /// Iterates the three rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(3)
    }
}

/// 1-based (column, row) coordinates of a played cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub col: usize,
    pub row: usize,
}

impl Location {
    pub fn from_index(index: usize) -> Self {
        Self {
            col: index % 3 + 1,
            row: index / 3 + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One recorded position. The opening entry has no location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub board: Board,
    pub location: Option<Location>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::empty(),
            location: None,
        }
    }
}

/// A history entry paired with its step, as listed for time travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    pub step: usize,
    pub location: Option<Location>,
}

/// The whole game: history, the active step and the list ordering flag.
///
/// Mutation entry points return a new snapshot; the receiver is never
/// modified. The side to move is derived from the step number and is not
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step_number: usize,
    is_ascending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step_number: 0,
            is_ascending: true,
        }
    }

    /// Plays the side to move at `index` from the active step.
    ///
    /// Returns an unchanged copy when the active board already has a winner,
    /// the cell is occupied or `index` is off the board. Any entries after
    /// the active step are discarded before the new one is appended.
    pub fn apply_move(&self, index: usize) -> GameState {
        if index >= BOARD_SIZE {
            debug!(index, "Ignoring move outside the board");
            return self.clone();
        }

        let current = self.current_board();
        if let Some(info) = detect_winner(current) {
            debug!(index, winner = %info.winner, "Ignoring move after game was won");
            return self.clone();
        }
        if !current.is_empty_at(index) {
            debug!(index, "Ignoring move on occupied cell");
            return self.clone();
        }

        let player = self.next_player();
        let mut history = self.history[..=self.step_number].to_vec();
        let location = Location::from_index(index);
        history.push(HistoryEntry {
            board: current.with_mark(index, player),
            location: Some(location),
        });

        let step_number = history.len() - 1;
        debug!(%player, index, %location, step = step_number, "Move applied");

        GameState {
            history,
            step_number,
            is_ascending: self.is_ascending,
        }
    }

    /// Makes `step` the active entry without touching history.
    ///
    /// Panics if `step` is not an index into history; callers only offer
    /// steps taken from [`GameState::move_list`].
    pub fn jump_to(&self, step: usize) -> GameState {
        assert!(
            step < self.history.len(),
            "step {} out of range for history of {} entries",
            step,
            self.history.len()
        );

        debug!(step, "Jumped to step");
        GameState {
            history: self.history.clone(),
            step_number: step,
            is_ascending: self.is_ascending,
        }
    }

    pub fn toggle_move_order(&self) -> GameState {
        GameState {
            history: self.history.clone(),
            step_number: self.step_number,
            is_ascending: !self.is_ascending,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    pub fn is_ascending(&self) -> bool {
        self.is_ascending
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number].board
    }

    pub fn current_winner(&self) -> Option<WinnerInfo> {
        detect_winner(self.current_board())
    }

    /// Every history entry as (step, location), reversed when descending.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                location: entry.location,
            })
            .collect();

        if !self.is_ascending {
            items.reverse();
        }
        items
    }
}
