//! One-time match setup.

use crate::random::{RandomSource, choose};
use crate::types::{Mark, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Names the computer plays under, one drawn per session.
pub const COMPUTER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

/// Draws a computer name from [`COMPUTER_NAMES`].
pub fn pick_computer_name(rng: &mut dyn RandomSource) -> &'static str {
    choose(rng, &COMPUTER_NAMES).copied().unwrap_or(COMPUTER_NAMES[0])
}

/// Setup decided once before the first round and fixed for the match.
///
/// The human picks a symbol and always moves first; the computer draws
/// with the other symbol. The first mover does not alternate between
/// rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Symbol the human draws with.
    human_symbol: Symbol,
    /// Symbol the computer draws with.
    computer_symbol: Symbol,
    /// Side that opens every round.
    first_to_move: Mark,
    /// Human display name.
    human_name: String,
    /// Computer display name.
    computer_name: String,
}

impl MatchConfig {
    /// Creates a setup where the human plays `human_symbol` and moves first.
    #[instrument(skip(human_name, computer_name))]
    pub fn new(
        human_symbol: Symbol,
        human_name: impl Into<String>,
        computer_name: impl Into<String>,
    ) -> Self {
        let config = Self {
            human_symbol,
            computer_symbol: human_symbol.other(),
            first_to_move: Mark::Human,
            human_name: human_name.into(),
            computer_name: computer_name.into(),
        };
        info!(
            human = %config.human_name,
            computer = %config.computer_name,
            symbol = %config.human_symbol,
            "Match configured"
        );
        config
    }

    /// Symbol drawn for `mark`, or `None` for an empty cell.
    pub fn symbol_for(&self, mark: Mark) -> Option<Symbol> {
        match mark {
            Mark::Human => Some(self.human_symbol),
            Mark::Computer => Some(self.computer_symbol),
            Mark::Empty => None,
        }
    }

    /// Display name of the side playing `mark`. Empty cells have no owner.
    pub fn name_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::Human => &self.human_name,
            Mark::Computer => &self.computer_name,
            Mark::Empty => "",
        }
    }
}
