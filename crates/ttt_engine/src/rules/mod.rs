//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a [`Board`](crate::Board) against the
//! eight win-lines. [`Board`](crate::Board) delegates its derived queries
//! here so the line logic lives in one place.

pub mod lines;
pub mod threat;
pub mod win;

pub use lines::{WIN_LINES, WinLine};
pub use threat::completing_move;
pub use win::winning_mark;
