use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_BOARD_DIMENSION: usize = 8;
pub const MAX_BOARD_DIMENSION: usize = 26;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Board with a dimension of zero given")]
    ZeroDimension,
    #[error("Board of dimension {dimension} exceeds the maximum of {max}")]
    TooLarge { dimension: usize, max: usize },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Coordinate {
    Row,
    Col,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row => write!(f, "row"),
            Coordinate::Col => write!(f, "column"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum BoardPositionError {
    #[error("{0} {1} is outside a board of dimension {2}")]
    OutOfBounds(Coordinate, usize, usize),
}

// The contents of a cell. Empty doubles as "no player".
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    White,
    Black,
    Empty,
}

impl Player {
    pub fn is_piece(&self) -> bool {
        !matches!(self, Player::Empty)
    }

    fn symbol(&self) -> &'static str {
        match self {
            Player::White => "○",
            Player::Black => "●",
            Player::Empty => " ",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "WHITE"),
            Player::Black => write!(f, "BLACK"),
            Player::Empty => write!(f, "EMPTY"),
        }
    }
}

// A (row, col) pair known to lie on a particular board
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position(usize, usize);

impl Position {
    pub fn new(board: &Board, row: usize, col: usize) -> Result<Self, BoardPositionError> {
        let dimension = board.dimension();
        if row >= dimension {
            return Err(BoardPositionError::OutOfBounds(
                Coordinate::Row,
                row,
                dimension,
            ));
        }
        if col >= dimension {
            return Err(BoardPositionError::OutOfBounds(
                Coordinate::Col,
                col,
                dimension,
            ));
        }
        Ok(Position(row, col))
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// A square board stored row by row, so the cell at `(row, col)` lives at
/// index `row * dimension + col`.
///
/// Row 0 is White's home row and the last row is Black's.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    dimension: usize,
    cells: Vec<Player>,
}

impl Board {
    // Ensure that the given dimension meets the following criteria:
    // - board contains at least one row
    // - dimension does not exceed the max board dimension
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        if dimension == 0 {
            return Err(BoardError::ZeroDimension);
        }
        if dimension > MAX_BOARD_DIMENSION {
            return Err(BoardError::TooLarge {
                dimension,
                max: MAX_BOARD_DIMENSION,
            });
        }
        Ok(Board::initial(dimension))
    }

    // Callers must have checked the dimension already
    pub(crate) fn initial(dimension: usize) -> Self {
        let mut cells = vec![Player::Empty; dimension * dimension];
        let last_row = (dimension - 1) * dimension;
        for col in 0..dimension {
            cells[col] = Player::White;
            cells[last_row + col] = Player::Black;
        }
        Board { dimension, cells }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cells(&self) -> &[Player] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Player {
        self.cell(position.row(), position.col())
    }

    pub fn set(&mut self, position: Position, player: Player) {
        self.cells[position.row() * self.dimension + position.col()] = player;
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Player {
        self.cells[row * self.dimension + col]
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == player).count()
    }
}

// Rows are printed from the last row down to row 0, so White plays upwards.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.dimension).rev() {
            for col in 0..self.dimension {
                write!(f, "| {} ", self.cell(row, col).symbol())?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{} ", " ---".repeat(self.dimension))?;
        }
        Ok(())
    }
}
