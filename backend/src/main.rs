use crate::config::{Cli, Command};
use clap::Parser;
use common::{BoardError, Game};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod config;
mod game;
mod handler;
mod routes;
mod terminal;

#[derive(Error, Debug)]
enum AppError {
    #[error("Could not create game: {0}")]
    Board(#[from] BoardError),
    #[error("Could not install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("Could not start async runtime: {0}")]
    Runtime(io::Error),
    #[error(transparent)]
    Terminal(#[from] terminal::TerminalError),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    // Logs are flushed when the guard drops, so it lives until main returns
    let _guard = init_logging(&cli.log_dir)?;

    match cli.command {
        Command::Serve {
            host,
            port,
            dimension,
            static_dir,
        } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(AppError::Runtime)?;
            runtime.block_on(serve(host, port, dimension, static_dir))
        }
        Command::Terminal { dimension } => {
            let mut game = Game::new(dimension)?;
            info!("starting terminal game on a board of dimension {}", dimension);
            terminal::run(io::stdin().lock(), io::stdout().lock(), &mut game)?;
            Ok(())
        }
    }
}

fn init_logging(log_dir: &Path) -> Result<WorkerGuard, AppError> {
    let file_appender = tracing_appender::rolling::daily(log_dir, "server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

#[tracing::instrument]
async fn serve(
    host: IpAddr,
    port: u16,
    dimension: usize,
    static_dir: PathBuf,
) -> Result<(), AppError> {
    let game = game::new_shared_game(dimension)?;
    info!("created game on a board of dimension {}", dimension);

    let addr = SocketAddr::new(host, port);
    info!("listening on {}", addr);
    warp::serve(routes::routes(game, static_dir)).run(addr).await;
    Ok(())
}
