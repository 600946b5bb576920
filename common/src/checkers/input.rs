use crate::checkers::board::{Board, BoardPositionError, Player, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum MoveError {
    #[error("Invalid move position: {0}")]
    InvalidPosition(BoardPositionError),
    #[error("No checker at position {0}")]
    NoPieceAtSource(Position),
    #[error("Moving not your own piece: {piece} piece moved while {mover} is to move")]
    WrongPlayerPiece { piece: Player, mover: Player },
    #[error("Illegal checker move from {from} to {to}")]
    IllegalGeometry { from: Position, to: Position },
}

// Zero-indexed cell coordinates as they arrive over the wire
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RawPosition {
    pub row: usize,
    pub col: usize,
}

#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RawMove {
    pub from: RawPosition,
    pub to: RawPosition,
}

impl RawMove {
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Self {
        RawMove {
            from: RawPosition {
                row: from.0,
                col: from.1,
            },
            to: RawPosition {
                row: to.0,
                col: to.1,
            },
        }
    }
}

/// A move that passed every rule check against a given board and mover.
///
/// Only meaningful for the game it was validated against; applying it to a
/// different game skips validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidMove {
    from: Position,
    to: Position,
    piece: Player,
}

impl ValidMove {
    // validates, in order:
    // - both positions lie on the board
    // - a piece sits at the source
    // - the piece belongs to the mover
    // - the piece steps one row forward and at most one column sideways
    //
    // The destination is not checked for occupancy.
    pub fn new(raw_move: RawMove, board: &Board, mover: Player) -> Result<Self, MoveError> {
        let from = Position::new(board, raw_move.from.row, raw_move.from.col)
            .map_err(MoveError::InvalidPosition)?;
        let to = Position::new(board, raw_move.to.row, raw_move.to.col)
            .map_err(MoveError::InvalidPosition)?;

        let piece = board.get(from);
        if !piece.is_piece() {
            return Err(MoveError::NoPieceAtSource(from));
        }
        if piece != mover {
            return Err(MoveError::WrongPlayerPiece { piece, mover });
        }
        if !is_legal_step(piece, from, to) {
            return Err(MoveError::IllegalGeometry { from, to });
        }
        Ok(ValidMove { from, to, piece })
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn piece(&self) -> Player {
        self.piece
    }
}

// Straight steps (no column change) are accepted alongside diagonal ones.
fn is_legal_step(piece: Player, from: Position, to: Position) -> bool {
    // Positions are bounded by the board dimension, so these casts are lossless
    let dr = to.row() as i64 - from.row() as i64;
    let dc = to.col() as i64 - from.col() as i64;
    let forward = match piece {
        Player::White => 1,
        Player::Black => -1,
        Player::Empty => return false,
    };
    (-1..=1).contains(&dc) && dr == forward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::board::Coordinate;

    fn pos(board: &Board, row: usize, col: usize) -> Position {
        Position::new(board, row, col).unwrap()
    }

    #[test]
    fn test_out_of_bounds_move() {
        let board = Board::new(3).unwrap();
        let result = ValidMove::new(RawMove::new((3, 0), (2, 0)), &board, Player::White);
        assert_eq!(
            result,
            Err(MoveError::InvalidPosition(BoardPositionError::OutOfBounds(
                Coordinate::Row,
                3,
                3
            )))
        );
        let result = ValidMove::new(RawMove::new((0, 0), (1, 7)), &board, Player::White);
        assert_eq!(
            result,
            Err(MoveError::InvalidPosition(BoardPositionError::OutOfBounds(
                Coordinate::Col,
                7,
                3
            )))
        );
    }

    #[test]
    fn test_no_piece_at_source() {
        let board = Board::new(4).unwrap();
        // Whatever the destination, an empty source is reported first
        for to in [(2, 1), (0, 0), (3, 3), (1, 1)] {
            let result = ValidMove::new(RawMove::new((1, 1), to), &board, Player::White);
            assert_eq!(result, Err(MoveError::NoPieceAtSource(pos(&board, 1, 1))));
        }
    }

    #[test]
    fn test_wrong_player_piece() {
        let board = Board::new(4).unwrap();
        let result = ValidMove::new(RawMove::new((3, 0), (2, 0)), &board, Player::White);
        assert_eq!(
            result,
            Err(MoveError::WrongPlayerPiece {
                piece: Player::Black,
                mover: Player::White,
            })
        );
        let result = ValidMove::new(RawMove::new((0, 0), (1, 0)), &board, Player::Black);
        assert_eq!(
            result,
            Err(MoveError::WrongPlayerPiece {
                piece: Player::White,
                mover: Player::Black,
            })
        );
    }

    #[test]
    fn test_white_geometry() {
        let board = Board::new(4).unwrap();
        for to in [(1, 0), (1, 1), (1, 2)] {
            assert!(ValidMove::new(RawMove::new((0, 1), to), &board, Player::White).is_ok());
        }
        // Sideways, backwards, two rows and two columns are all rejected
        for to in [(0, 2), (0, 0), (2, 1), (1, 3)] {
            let result = ValidMove::new(RawMove::new((0, 1), to), &board, Player::White);
            assert_eq!(
                result,
                Err(MoveError::IllegalGeometry {
                    from: pos(&board, 0, 1),
                    to: pos(&board, to.0, to.1),
                })
            );
        }
    }

    #[test]
    fn test_black_geometry() {
        let board = Board::new(4).unwrap();
        for to in [(2, 0), (2, 1), (2, 2)] {
            assert!(ValidMove::new(RawMove::new((3, 1), to), &board, Player::Black).is_ok());
        }
        for to in [(3, 2), (1, 1), (2, 3)] {
            let result = ValidMove::new(RawMove::new((3, 1), to), &board, Player::Black);
            assert!(matches!(result, Err(MoveError::IllegalGeometry { .. })));
        }
    }

    #[test]
    fn test_occupied_destination_is_accepted() {
        let board = Board::new(2).unwrap();
        let valid_move = ValidMove::new(RawMove::new((0, 0), (1, 1)), &board, Player::White).unwrap();
        assert_eq!(valid_move.from(), pos(&board, 0, 0));
        assert_eq!(valid_move.to(), pos(&board, 1, 1));
        assert_eq!(valid_move.piece(), Player::White);
    }

    #[test]
    fn test_error_messages() {
        let board = Board::new(3).unwrap();
        let err = ValidMove::new(RawMove::new((1, 1), (2, 1)), &board, Player::White).unwrap_err();
        assert_eq!(err.to_string(), "No checker at position (1, 1)");
        let err = ValidMove::new(RawMove::new((0, 0), (2, 2)), &board, Player::White).unwrap_err();
        assert_eq!(err.to_string(), "Illegal checker move from (0, 0) to (2, 2)");
    }

    #[test]
    fn test_deserialize_raw_move() {
        let raw_move: RawMove =
            serde_json::from_str(r#"{"from":{"row":0,"col":1},"to":{"row":1,"col":2}}"#).unwrap();
        assert_eq!(raw_move, RawMove::new((0, 1), (1, 2)));
        let negative = serde_json::from_str::<RawMove>(r#"{"from":{"row":-1,"col":1},"to":{"row":1,"col":2}}"#);
        assert!(negative.is_err());
    }
}
