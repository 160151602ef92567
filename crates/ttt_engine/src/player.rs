//! One side of a match and its running score.

use crate::types::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A participant in a match.
///
/// The mark and name are fixed for the player's lifetime; the score counts
/// rounds won in the current match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Player {
    mark: Mark,
    #[new(into)]
    name: String,
    #[new(default)]
    score: u32,
}

impl Player {
    /// The side this player plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rounds won in the current match.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Records a round win.
    pub fn increment_score(&mut self) {
        self.score += 1;
        debug!(player = %self.name, score = self.score, "Score incremented");
    }

    /// Zeroes the score for a fresh match.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_zero_score() {
        let player = Player::new(Mark::Human, "Ada");
        assert_eq!(player.mark(), Mark::Human);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_increment_and_reset() {
        let mut player = Player::new(Mark::Computer, "Hal");
        player.increment_score();
        player.increment_score();
        assert_eq!(player.score(), 2);

        player.reset_score();
        assert_eq!(player.score(), 0);
    }
}
