//! The computer's move selection.

use crate::board::Board;
use crate::position::Position;
use crate::random::{RandomSource, choose};
use tracing::{debug, instrument};

/// Picks the computer's next square.
///
/// Priority, first match wins:
/// 1. complete a line the computer already holds two of,
/// 2. block a line the human holds two of,
/// 3. take the center,
/// 4. any open square, drawn uniformly through `rng`.
///
/// Returns `None` only when the board is full.
#[instrument(skip_all)]
pub fn computer_move(board: &Board, rng: &mut dyn RandomSource) -> Option<Position> {
    if let Some(pos) = board.offense_move() {
        debug!(%pos, "Taking the win");
        return Some(pos);
    }
    if let Some(pos) = board.defense_move() {
        debug!(%pos, "Blocking");
        return Some(pos);
    }
    if board.center_available() {
        debug!("Taking the center");
        return Some(Position::Center);
    }

    let open = board.unmarked_positions();
    let pick = choose(rng, &open).copied();
    debug!(pos = ?pick, open = open.len(), "Random fallback");
    pick
}
