//! Phases, actions and outcomes of the match state machine.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// This side completed a line.
    Winner(Mark),
    /// The board filled up with no line completed.
    Tie,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            RoundOutcome::Winner(mark) => Some(*mark),
            RoundOutcome::Tie => None,
        }
    }
}

/// Where the match currently stands.
///
/// ```text
/// AwaitingMove(mark) --move--> AwaitingMove(other) | RoundOver
/// RoundOver --ScoreRound--> ScoreUpdated | MatchOver
/// ScoreUpdated --NextRound--> AwaitingMove(first mover)
/// MatchOver --Rematch--> AwaitingMove(first mover), scores zeroed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for this side to play.
    AwaitingMove(Mark),
    /// The round ended and has not been scored yet.
    RoundOver(RoundOutcome),
    /// The round was scored and nobody has reached the winning score.
    ScoreUpdated(RoundOutcome),
    /// A player reached the winning score.
    MatchOver {
        /// Side that reached the winning score.
        champion: Mark,
    },
}

impl MatchPhase {
    /// True while a round is being played.
    pub fn is_round_in_progress(&self) -> bool {
        matches!(self, MatchPhase::AwaitingMove(_))
    }
}

/// Input to [`MatchController::apply`](crate::MatchController::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The human plays this square.
    HumanMove(Position),
    /// The computer plays its heuristic choice.
    ComputerMove,
    /// Credit the finished round to its winner.
    ScoreRound,
    /// Clear the board for another round of the same match.
    NextRound,
    /// Start a new match with the same setup.
    Rematch,
}
