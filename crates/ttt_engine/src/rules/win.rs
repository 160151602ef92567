//! Win detection logic for tic-tac-toe.

use super::lines::WIN_LINES;
use crate::board::Board;
use crate::types::Mark;
use tracing::instrument;

/// Returns the mark that holds all three cells of some win-line.
///
/// Lines are scanned in [`WIN_LINES`] order and the first fully owned line
/// decides. `Mark::Empty` never wins.
#[instrument(skip(board))]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.mark_at(a);
        (mark != Mark::Empty && mark == board.mark_at(b) && mark == board.mark_at(c))
            .then_some(mark)
    })
}
