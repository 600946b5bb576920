use common::{BoardError, Game};
use std::sync::Arc;
use tokio::sync::RwLock;

// The one game every client sees. Moves and restarts take the write lock so a
// move's read-modify-write never interleaves with another request.
pub type SharedGame = Arc<RwLock<Game>>;

pub fn new_shared_game(dimension: usize) -> Result<SharedGame, BoardError> {
    Ok(Arc::new(RwLock::new(Game::new(dimension)?)))
}
