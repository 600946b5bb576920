use crate::game::SharedGame;
use crate::handler;
use std::convert::Infallible;
use std::path::PathBuf;
use warp::{
    http::{header, Method},
    Filter, Rejection, Reply,
};

// Moves are a handful of integers
const MAX_BODY_BYTES: u64 = 1024 * 16;

pub fn routes(
    game: SharedGame,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health").and_then(handler::health_handler);

    let board_routes = warp::path!("board")
        .and(warp::get())
        .and(with_game(game.clone()))
        .and_then(handler::board_handler)
        .or(warp::path!("board" / "move")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and(with_game(game.clone()))
            .and_then(handler::move_handler))
        .or(warp::path!("board" / "restart")
            .and(warp::post())
            .and(with_game(game))
            .and_then(handler::restart_handler));

    // The built web client, index.html included
    let static_route = warp::get().and(warp::fs::dir(static_dir));

    health_route.or(board_routes).or(static_route).with(
        warp::cors()
            .allow_methods(&[Method::OPTIONS, Method::GET, Method::POST, Method::DELETE])
            .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(300)
            .allow_any_origin(),
    )
}

fn with_game(game: SharedGame) -> impl Filter<Extract = (SharedGame,), Error = Infallible> + Clone {
    warp::any().map(move || game.clone())
}
