use common::{Game, RawMove};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
#[error("Terminal I/O failed: {0}")]
pub struct TerminalError(#[from] io::Error);

#[derive(Error, Debug, PartialEq)]
pub enum InputFormatError {
    #[error("Invalid input format")]
    WrongFieldCount(usize),
    #[error("Invalid input - must be integers")]
    NotAnInteger(String),
    #[error("Invalid input - rows and columns start at 1")]
    OutOfRange(i64),
}

// Players type 1-indexed "fromRow,fromCol,toRow,toCol"; the engine wants
// 0-indexed positions.
pub fn parse_move(line: &str) -> Result<RawMove, InputFormatError> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(InputFormatError::WrongFieldCount(fields.len()));
    }
    let mut coords = [0usize; 4];
    for (coord, field) in coords.iter_mut().zip(&fields) {
        let value: i64 = field
            .parse()
            .map_err(|_| InputFormatError::NotAnInteger(field.to_string()))?;
        *coord = value
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or(InputFormatError::OutOfRange(value))?;
    }
    Ok(RawMove::new((coords[0], coords[1]), (coords[2], coords[3])))
}

/// Runs the game to completion, reading one move per line from `input`.
///
/// Returns once somebody has won or `input` runs out.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    game: &mut Game,
) -> Result<(), TerminalError> {
    writeln!(output, "Hello, world of checkers!")?;
    let mut lines = input.lines();
    loop {
        let state = game.state();
        if state.is_over() {
            info!("player {} has won", state.player());
            writeln!(output, "Player {} has won!", state.player())?;
            return Ok(());
        }

        write!(output, "{}", game.board())?;
        writeln!(
            output,
            "Enter a move for {} in the format 'fromRow,fromCol,toRow,toCol'",
            state.player()
        )?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                info!("input closed before the game finished");
                return Ok(());
            }
        };
        let raw_move = match parse_move(&line) {
            Ok(raw_move) => raw_move,
            Err(err) => {
                warn!("unreadable move {:?}: {}", line, err);
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        if let Err(err) = game.make_move(raw_move) {
            warn!("rejected move {:?}: {}", raw_move, err);
            writeln!(output, "Invalid move {}: {}", line.trim(), err)?;
        }
    }
}
