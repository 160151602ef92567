//! Two-in-a-line detection used by the computer's tactics.

use super::lines::WIN_LINES;
use crate::board::Board;
use crate::position::Position;
use crate::types::Mark;
use tracing::{instrument, trace};

/// Finds the empty cell that would complete a line for `mark`.
///
/// Walks [`WIN_LINES`] in order and returns the empty third cell of the
/// first line where `mark` already holds exactly two cells. Lines whose
/// third cell belongs to the other side are skipped.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    WIN_LINES.iter().find_map(|line| {
        let held = line.iter().filter(|&&pos| board.mark_at(pos) == mark).count();
        if held != 2 {
            return None;
        }
        let open = line.iter().copied().find(|&pos| board.mark_at(pos) == Mark::Empty);
        if let Some(pos) = open {
            trace!(?line, %pos, "Line can be completed");
        }
        open
    })
}
