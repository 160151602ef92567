//! Engine error types.

use crate::phases::{Action, MatchPhase};
use crate::position::Position;

/// A mark could not be placed.
///
/// Legal callers only place on positions taken from
/// [`Board::unmarked_positions`](crate::Board::unmarked_positions), so this
/// signals a programming error rather than bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The number does not name a cell (valid cells are 1-9).
    #[display("Position {} is out of range (must be 1-9)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for BoardError {}

/// Error raised by the match state machine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// A placement was rejected by the board.
    #[display("Invalid position: {}", _0)]
    InvalidPosition(BoardError),

    /// The action is not legal in the current phase.
    #[display("Cannot apply {:?} while {:?}", action, phase)]
    UnexpectedAction {
        /// Action that was attempted.
        action: Action,
        /// Phase the match was in.
        phase: MatchPhase,
    },

    /// A round operation was requested outside of a round.
    #[display("No round in progress ({:?})", _0)]
    RoundNotInProgress(MatchPhase),

    /// The human collaborator stopped supplying moves.
    #[display("Human input closed before the round finished")]
    InputClosed,
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::InvalidPosition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::InvalidPosition(err)
    }
}
