//! Tic-tac-toe engine: a human against a rule-based computer.
//!
//! The crate holds everything with rules in it and nothing that talks to a
//! terminal. A console front end drives it through [`MatchController`] and
//! the [`HumanInput`] trait.
//!
//! # Architecture
//!
//! - **Board**: nine [`Square`]s, the eight win-lines and the tactical
//!   queries ([`Board::offense_move`], [`Board::defense_move`]).
//! - **AI**: [`computer_move`] tries to win, then to block, then takes the
//!   center, then picks any open square at random.
//! - **Match**: [`MatchController`] alternates turns, scores rounds and
//!   stops at [`WINNING_SCORE`].
//! - **Randomness**: every draw goes through [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use ttt_engine::{
//!     Action, MatchConfig, MatchController, MatchPhase, Mark, Position, ScriptedSource, Symbol,
//! };
//!
//! let config = MatchConfig::new(Symbol::X, "Ada", "Hal");
//! let mut game = MatchController::new(config, ScriptedSource::default());
//!
//! game.apply(Action::HumanMove(Position::TopLeft))?;
//! let phase = game.apply(Action::ComputerMove)?;
//!
//! assert_eq!(game.board().mark_at(Position::Center), Mark::Computer);
//! assert_eq!(phase, MatchPhase::AwaitingMove(Mark::Human));
//! # Ok::<(), ttt_engine::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod config;
mod controller;
mod error;
mod phases;
mod player;
mod position;
mod random;
pub mod rules;
mod types;

pub use ai::computer_move;
pub use board::Board;
pub use config::{COMPUTER_NAMES, MatchConfig, pick_computer_name};
pub use controller::{HumanInput, MatchController, WINNING_SCORE};
pub use error::{BoardError, MatchError};
pub use phases::{Action, MatchPhase, RoundOutcome};
pub use player::Player;
pub use position::Position;
pub use random::{RandomSource, RngSource, ScriptedSource, choose};
pub use types::{Mark, Square, Symbol};
