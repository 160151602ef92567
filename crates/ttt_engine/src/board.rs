//! The 3x3 board and its tactical queries.

use crate::error::BoardError;
use crate::position::Position;
use crate::rules;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Everything beyond the nine squares (open cells, fullness, the winner,
/// tactical moves) is recomputed on demand from the squares.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine marks in row-major order.
    pub fn from_marks(marks: [Mark; 9]) -> Self {
        Self {
            squares: marks.map(Square::new),
        }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.squares = [Square::default(); 9];
    }

    /// Places `mark` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Occupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), BoardError> {
        let square = &mut self.squares[position.index()];
        if square.is_marked() {
            return Err(BoardError::Occupied(position));
        }
        square.set_mark(mark);
        Ok(())
    }

    /// Places `mark` at the cell numbered `number` (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for numbers outside 1-9 and
    /// [`BoardError::Occupied`] for cells that already hold a mark.
    pub fn place_number(&mut self, number: usize, mark: Mark) -> Result<(), BoardError> {
        self.place(Position::try_from(number)?, mark)
    }

    /// Returns the square at `position`.
    pub fn square(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// Returns the mark at `position`.
    pub fn mark_at(&self, position: Position) -> Mark {
        self.square(position).mark()
    }

    /// Returns a snapshot of the nine marks for rendering.
    pub fn marks(&self) -> [Mark; 9] {
        self.squares.map(|s| s.mark())
    }

    /// Positions nobody has played yet, in ascending numeric order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.square(pos).is_unmarked())
            .collect()
    }

    /// True when no square is left open.
    pub fn is_full(&self) -> bool {
        self.unmarked_positions().is_empty()
    }

    /// The mark that owns a complete win-line, if any.
    pub fn winning_mark(&self) -> Option<Mark> {
        rules::winning_mark(self)
    }

    /// True once either side owns a complete win-line.
    pub fn someone_won(&self) -> bool {
        self.winning_mark().is_some()
    }

    /// The open cell that completes a line the computer already holds two of.
    pub fn offense_move(&self) -> Option<Position> {
        rules::completing_move(self, Mark::Computer)
    }

    /// The open cell that blocks a line the human already holds two of.
    pub fn defense_move(&self) -> Option<Position> {
        rules::completing_move(self, Mark::Human)
    }

    /// True while the center square is open.
    pub fn center_available(&self) -> bool {
        self.square(Position::Center).is_unmarked()
    }
}
