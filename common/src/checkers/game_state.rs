use crate::checkers::board::{Board, BoardError, Player, DEFAULT_BOARD_DIMENSION};
use crate::checkers::input::{MoveError, RawMove, ValidMove};
use crate::messages::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    WhiteToMove,
    BlackToMove,
    WhiteWon,
    BlackWon,
}

impl GameState {
    // The player to move, or the winner once the game is over
    pub fn player(&self) -> Player {
        match self {
            GameState::WhiteToMove | GameState::WhiteWon => Player::White,
            GameState::BlackToMove | GameState::BlackWon => Player::Black,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameState::WhiteWon | GameState::BlackWon)
    }

    // Won states stay as they are
    fn next_turn(self) -> Self {
        match self {
            GameState::WhiteToMove => GameState::BlackToMove,
            GameState::BlackToMove => GameState::WhiteToMove,
            other => other,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::WhiteToMove => write!(f, "WHITE_TO_MOVE"),
            GameState::BlackToMove => write!(f, "BLACK_TO_MOVE"),
            GameState::WhiteWon => write!(f, "WHITE_WON"),
            GameState::BlackWon => write!(f, "BLACK_WON"),
        }
    }
}

/// One game of checkers: a board plus whose turn it is.
///
/// Moves mutate the game in place, so a game shared between callers has to
/// sit behind a lock.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::initial(DEFAULT_BOARD_DIMENSION),
            state: GameState::WhiteToMove,
        }
    }
}

impl Game {
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        Ok(Game {
            board: Board::new(dimension)?,
            state: GameState::WhiteToMove,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    // Start over on a board of the same size
    pub fn restart(&mut self) {
        *self = Game {
            board: Board::initial(self.dimension()),
            state: GameState::WhiteToMove,
        };
    }

    // The game is left untouched when the move is rejected. Won games are not
    // special-cased: the winner stays the mover and may keep moving.
    pub fn make_move(&mut self, raw_move: RawMove) -> Result<(), MoveError> {
        let valid_move = ValidMove::new(raw_move, &self.board, self.state.player())?;
        self.apply(valid_move);
        Ok(())
    }

    pub fn apply(&mut self, valid_move: ValidMove) {
        self.board.set(valid_move.from(), Player::Empty);
        self.board.set(valid_move.to(), valid_move.piece());
        self.update_state();
    }

    fn update_state(&mut self) {
        let white_count = self.board.count(Player::White);
        let black_count = self.board.count(Player::Black);
        let next_state = if white_count == 0 {
            Some(GameState::BlackWon)
        } else if black_count == 0 {
            Some(GameState::WhiteWon)
        } else {
            self.far_row_winner()
        };
        self.state = next_state.unwrap_or_else(|| self.state.next_turn());
    }

    // Per column, White on the last row is checked before Black on row 0
    fn far_row_winner(&self) -> Option<GameState> {
        let last_row = self.board.dimension() - 1;
        (0..self.board.dimension()).find_map(|col| {
            if self.board.cell(last_row, col) == Player::White {
                Some(GameState::WhiteWon)
            } else if self.board.cell(0, col) == Player::Black {
                Some(GameState::BlackWon)
            } else {
                None
            }
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            board: self.board.cells().to_vec(),
            dimension: self.board.dimension(),
        }
    }
}
