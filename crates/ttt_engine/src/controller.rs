//! Round and match sequencing.

use crate::ai::computer_move;
use crate::board::Board;
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::phases::{Action, MatchPhase, RoundOutcome};
use crate::player::Player;
use crate::position::Position;
use crate::random::RandomSource;
use crate::types::Mark;
use tracing::{debug, info, instrument, warn};

/// Score that ends a match.
pub const WINNING_SCORE: u32 = 5;

/// Supplies the human's moves.
///
/// Implementors validate input themselves and only ever return a position
/// from [`Board::unmarked_positions`]. Returning `None` means no more input
/// will arrive.
pub trait HumanInput {
    /// Asks the human for a square on `board`.
    fn choose_position(&mut self, board: &Board) -> Option<Position>;
}

/// Drives turns, rounds and scoring for one human against the computer.
///
/// All state changes go through [`apply`](Self::apply); the other mutating
/// methods are conveniences built on it.
#[derive(Debug)]
pub struct MatchController<R> {
    config: MatchConfig,
    board: Board,
    human: Player,
    computer: Player,
    current_mark: Mark,
    phase: MatchPhase,
    rng: R,
}

impl<R: RandomSource> MatchController<R> {
    /// Creates a match ready for the first move of round one.
    #[instrument(skip(rng))]
    pub fn new(config: MatchConfig, rng: R) -> Self {
        let first = *config.first_to_move();
        let human = Player::new(Mark::Human, config.human_name().as_str());
        let computer = Player::new(Mark::Computer, config.computer_name().as_str());
        info!(first = ?first, "Starting match");
        Self {
            config,
            board: Board::new(),
            human,
            computer,
            current_mark: first,
            phase: MatchPhase::AwaitingMove(first),
            rng,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transition function
    // ─────────────────────────────────────────────────────────────

    /// Applies `action` and returns the new phase.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnexpectedAction`] if `action` is not legal in
    /// the current phase and [`MatchError::InvalidPosition`] if a human move
    /// targets an occupied square. The state is unchanged on error.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply(&mut self, action: Action) -> Result<MatchPhase, MatchError> {
        let next = match (self.phase, action) {
            (MatchPhase::AwaitingMove(Mark::Human), Action::HumanMove(pos)) => {
                self.play_move(Mark::Human, pos)?
            }
            (MatchPhase::AwaitingMove(Mark::Computer), Action::ComputerMove) => {
                let pos = computer_move(&self.board, &mut self.rng).ok_or(
                    MatchError::UnexpectedAction {
                        action,
                        phase: self.phase,
                    },
                )?;
                self.play_move(Mark::Computer, pos)?
            }
            (MatchPhase::RoundOver(_), Action::ScoreRound) => self.record_round(),
            (MatchPhase::ScoreUpdated(_), Action::NextRound) => self.reset_round(),
            (MatchPhase::MatchOver { .. }, Action::Rematch) => {
                self.human.reset_score();
                self.computer.reset_score();
                info!("Rematch");
                self.reset_round()
            }
            (phase, action) => {
                warn!(?phase, ?action, "Rejected action");
                return Err(MatchError::UnexpectedAction { action, phase });
            }
        };
        self.phase = next;
        Ok(next)
    }

    fn play_move(&mut self, mark: Mark, pos: Position) -> Result<MatchPhase, MatchError> {
        self.board.place(pos, mark)?;
        debug!(?mark, %pos, "Move played");
        self.current_mark = mark.opponent();

        if let Some(winner) = self.board.winning_mark() {
            info!(?winner, "Round won");
            Ok(MatchPhase::RoundOver(RoundOutcome::Winner(winner)))
        } else if self.board.is_full() {
            info!("Round tied");
            Ok(MatchPhase::RoundOver(RoundOutcome::Tie))
        } else {
            Ok(MatchPhase::AwaitingMove(self.current_mark))
        }
    }

    fn record_round(&mut self) -> MatchPhase {
        let outcome = match self.board.winning_mark() {
            Some(mark) if mark == self.human.mark() => {
                self.human.increment_score();
                RoundOutcome::Winner(mark)
            }
            Some(mark) if mark == self.computer.mark() => {
                self.computer.increment_score();
                RoundOutcome::Winner(mark)
            }
            _ => RoundOutcome::Tie,
        };
        info!(
            human = self.human.score(),
            computer = self.computer.score(),
            "Round scored"
        );

        match self.champion() {
            Some(champion) => {
                info!(champion = %champion.name(), "Match over");
                MatchPhase::MatchOver {
                    champion: champion.mark(),
                }
            }
            None => MatchPhase::ScoreUpdated(outcome),
        }
    }

    fn reset_round(&mut self) -> MatchPhase {
        self.board.reset();
        self.current_mark = *self.config.first_to_move();
        MatchPhase::AwaitingMove(self.current_mark)
    }

    // ─────────────────────────────────────────────────────────────
    //  Round lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Plays moves until the round is won or the board fills.
    ///
    /// Human turns ask `human`; computer turns use the heuristic.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::RoundNotInProgress`] if no round is being
    /// played, [`MatchError::InputClosed`] if `human` stops answering, and
    /// [`MatchError::InvalidPosition`] if it answers with an occupied square.
    #[instrument(skip_all)]
    pub fn play_round(&mut self, human: &mut impl HumanInput) -> Result<RoundOutcome, MatchError> {
        if !self.phase.is_round_in_progress() {
            return Err(MatchError::RoundNotInProgress(self.phase));
        }
        loop {
            match self.phase {
                MatchPhase::AwaitingMove(Mark::Human) => {
                    let pos = human
                        .choose_position(&self.board)
                        .ok_or(MatchError::InputClosed)?;
                    self.apply(Action::HumanMove(pos))?;
                }
                MatchPhase::AwaitingMove(_) => {
                    self.apply(Action::ComputerMove)?;
                }
                MatchPhase::RoundOver(outcome) => return Ok(outcome),
                phase => return Err(MatchError::RoundNotInProgress(phase)),
            }
        }
    }

    /// Credits the finished round: a win adds one to the winner, a tie
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnexpectedAction`] unless a round just ended.
    pub fn score_round(&mut self) -> Result<RoundOutcome, MatchError> {
        let outcome = match self.phase {
            MatchPhase::RoundOver(outcome) => outcome,
            phase => {
                return Err(MatchError::UnexpectedAction {
                    action: Action::ScoreRound,
                    phase,
                });
            }
        };
        self.apply(Action::ScoreRound)?;
        Ok(outcome)
    }

    /// Clears the board and hands the first move back to the configured
    /// first mover.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnexpectedAction`] unless the last round was
    /// scored and the match is still running.
    pub fn start_next_round(&mut self) -> Result<(), MatchError> {
        self.apply(Action::NextRound).map(|_| ())
    }

    /// Starts a fresh match with the same setup.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnexpectedAction`] unless the match is over.
    pub fn rematch(&mut self) -> Result<(), MatchError> {
        self.apply(Action::Rematch).map(|_| ())
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// True once either player has reached [`WINNING_SCORE`].
    pub fn is_match_over(&self) -> bool {
        self.champion().is_some()
    }

    /// The player who reached [`WINNING_SCORE`], if any.
    pub fn champion(&self) -> Option<&Player> {
        [&self.human, &self.computer]
            .into_iter()
            .find(|p| p.score() >= WINNING_SCORE)
    }

    /// The board of the current round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// The computer player.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// The side whose turn it is.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// The current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The setup this match was created with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}
