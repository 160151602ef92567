//! The eight win-lines.

use crate::position::Position;

/// Three positions that win when one mark holds all of them.
pub type WinLine = [Position; 3];

/// Every win-line, in scan order: rows, then columns, then diagonals.
///
/// Win detection and the computer's tactics both walk this array front to
/// back and stop at the first hit, so the order is observable.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];
