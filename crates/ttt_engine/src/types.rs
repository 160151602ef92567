//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Occupant state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here this round.
    #[default]
    Empty,
    /// The human player.
    Human,
    /// The computer player.
    Computer,
}

impl Mark {
    /// Returns the opposing side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
            Mark::Empty => Mark::Empty,
        }
    }
}

/// Glyph a side is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Symbol {
    /// Cross.
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// Nought.
    #[display("O")]
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// Returns the symbol the opposing side draws with.
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Parses "x" or "o", ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Symbol::X),
            "o" => Some(Symbol::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    mark: Mark,
}

impl Square {
    /// Creates a square holding `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// Current occupant.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Overwrites the occupant.
    pub fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    /// True while nobody has played here.
    pub fn is_unmarked(&self) -> bool {
        self.mark == Mark::Empty
    }

    /// True once either side has played here.
    pub fn is_marked(&self) -> bool {
        !self.is_unmarked()
    }
}
