//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// A player's mark.
///
/// The engine treats both marks the same way. The numeric encoding
/// (`O` = 0, `X` = 1) only exists for display boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark O (encoded as 0).
    O,
    /// Mark X (encoded as 1).
    X,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Display encoding: `O` is 0, `X` is 1.
    pub fn index(self) -> u8 {
        match self {
            Mark::O => 0,
            Mark::X => 1,
        }
    }

    /// Inverse of [`Mark::index`].
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Mark::O),
            1 => Some(Mark::X),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::O) => 'O',
            Square::Occupied(Mark::X) => 'X',
        }
    }
}

/// 3x3 board in row-major order (rows 0-2, 3-5, 6-8).
///
/// Boards are small `Copy` values. [`Board::place`] returns a new board and
/// never edits the receiver, so search code can branch freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at `index` (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` is empty. Out-of-range is not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] when `index > 8`, [`MoveError::Occupied`]
    /// when the square already holds a mark.
    pub fn place(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Square::Occupied(_)) => Err(MoveError::Occupied(index)),
            Some(Square::Empty) => {
                let mut next = *self;
                next.squares[index] = Square::Occupied(mark);
                Ok(next)
            }
        }
    }

    /// Returns true while at least one square is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.squares.contains(&Square::Empty)
    }

    /// Empty square indices in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Formats the board as a human-readable grid, numbering empty squares.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&pos.to_string()),
                    occupied => result.push(occupied.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: nine characters, `X`, `O` or `.`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// A character other than a mark or an empty marker.
    #[display("Unexpected character {:?} in board notation", _0)]
    UnexpectedChar(char),
    /// Wrong number of squares.
    #[display("Board notation needs 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`, `O` and `.`/`-`/`_` squares; whitespace, `|` and `/` are
    /// separators.
    ///
    /// Stops at the tenth square, so `WrongLength` reports at most 10.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; BOARD_SIZE];
        let mut len = 0;
        for c in s.chars() {
            let square = match c {
                'x' | 'X' => Square::Occupied(Mark::X),
                'o' | 'O' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            if len == BOARD_SIZE {
                return Err(ParseBoardError::WrongLength(BOARD_SIZE + 1));
            }
            squares[len] = square;
            len += 1;
        }
        if len != BOARD_SIZE {
            return Err(ParseBoardError::WrongLength(len));
        }
        Ok(Self { squares })
    }
}
