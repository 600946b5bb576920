mod board;
mod game_state;
mod input;

pub use board::{
    Board, BoardError, BoardPositionError, Coordinate, Player, Position, DEFAULT_BOARD_DIMENSION,
    MAX_BOARD_DIMENSION,
};
pub use game_state::{Game, GameState};
pub use input::{MoveError, RawMove, RawPosition, ValidMove};
