//! Scripted play without the terminal UI.

use anyhow::{Result, bail};
use tracing::info;

use crate::game::GameState;

/// Feeds `moves` through [`GameState::apply_move`] and optionally rewinds.
///
/// Moves that would be ignored in the UI are ignored here too. A `jump`
/// past the last recorded step is an error.
pub fn replay(moves: &[usize], jump: Option<usize>, descending: bool) -> Result<GameState> {
    let start = if descending {
        GameState::new().toggle_move_order()
    } else {
        GameState::new()
    };

    let mut state = moves.iter().fold(start, |state, &idx| state.apply_move(idx));
    info!(
        requested = moves.len(),
        recorded = state.history().len() - 1,
        "Replayed moves"
    );

    if let Some(step) = jump {
        let last = state.history().len() - 1;
        if step > last {
            bail!("cannot jump to step {}: last step is {}", step, last);
        }
        state = state.jump_to(step);
    }

    Ok(state)
}
