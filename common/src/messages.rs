use crate::checkers::{GameState, Player};
use serde::{Deserialize, Serialize};

// Read-only copy of a game, sent in response to board requests
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub board: Vec<Player>,
    pub dimension: usize,
}

impl Snapshot {
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        self.board.get(row * self.dimension + col).copied()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}
