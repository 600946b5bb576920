use crate::game::SharedGame;
use common::{messages::ErrorResponse, RawMove};
use tracing::{info, warn};
use warp::{
    http::StatusCode,
    reply::{json, with_status},
    Rejection, Reply,
};

type Result<T> = std::result::Result<T, Rejection>;

pub async fn board_handler(game: SharedGame) -> Result<impl Reply> {
    let snapshot = game.read().await.snapshot();
    Ok(json(&snapshot))
}

// Rejected moves are answered with 400 and the reason, never a rejection,
// so the client always gets a readable message.
#[tracing::instrument(skip(game))]
pub async fn move_handler(body: RawMove, game: SharedGame) -> Result<impl Reply> {
    let mut game = game.write().await;
    match game.make_move(body) {
        Ok(()) => {
            let state = game.state();
            info!("applied move {:?}, state is now {}", body, state);
            if state.is_over() {
                info!("player {} has won", state.player());
            }
            Ok(with_status(json(&game.snapshot()), StatusCode::OK))
        }
        Err(err) => {
            warn!("rejected move {:?}: {}", body, err);
            Ok(with_status(
                json(&ErrorResponse {
                    message: err.to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ))
        }
    }
}

pub async fn restart_handler(game: SharedGame) -> Result<impl Reply> {
    let mut game = game.write().await;
    game.restart();
    info!("restarted game on a board of dimension {}", game.dimension());
    Ok(json(&game.snapshot()))
}

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}
