//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Whether a line is a row, a column or a diagonal, with its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row 0-2, top to bottom.
    Row(u8),
    /// Column 0-2, left to right.
    Column(u8),
    /// Diagonal 0 (top-left to bottom-right) or 1 (top-right to bottom-left).
    Diagonal(u8),
}

/// One of the eight index triples that win the game.
///
/// Only the triples in [`LINES`] can be constructed or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct Line([usize; 3]);

/// Index triple that is not a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{:?} is not a winning line", _0)]
pub struct InvalidLine(pub [usize; 3]);

impl std::error::Error for InvalidLine {}

/// All winning lines in scan order. The first complete line in this order
/// is the one reported.
pub const LINES: [Line; 8] = [
    // Rows
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    // Columns
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    // Diagonals
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

impl Line {
    /// The three board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Position of this line in [`LINES`].
    pub fn ordinal(&self) -> usize {
        match self.kind() {
            LineKind::Row(n) => n as usize,
            LineKind::Column(n) => 3 + n as usize,
            LineKind::Diagonal(n) => 6 + n as usize,
        }
    }

    /// Row, column or diagonal, numbered in scan order.
    pub fn kind(&self) -> LineKind {
        let [a, b, _] = self.0;
        if b == a + 1 {
            LineKind::Row((a / 3) as u8)
        } else if b == a + 3 {
            LineKind::Column(a as u8)
        } else if a == 0 {
            LineKind::Diagonal(0)
        } else {
            LineKind::Diagonal(1)
        }
    }

    /// Short label used by renderers to draw the strike-through:
    /// `h0`-`h2` for rows, `v0`-`v2` for columns, `d0`/`d1` for diagonals.
    pub fn label(&self) -> String {
        match self.kind() {
            LineKind::Row(n) => format!("h{}", n),
            LineKind::Column(n) => format!("v{}", n),
            LineKind::Diagonal(n) => format!("d{}", n),
        }
    }
}

impl TryFrom<[usize; 3]> for Line {
    type Error = InvalidLine;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        LINES
            .iter()
            .copied()
            .find(|l| l.0 == indices)
            .ok_or(InvalidLine(indices))
    }
}

impl From<Line> for [usize; 3] {
    fn from(line: Line) -> Self {
        line.0
    }
}

/// Returns the first complete line and the mark that owns it.
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.0;
        let mark = board.get(a)?.mark()?;
        (board.get(b)?.mark() == Some(mark) && board.get(c)?.mark() == Some(mark))
            .then_some((*line, mark))
    })
}

/// The mark owning the first complete line, if any.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
