//! UCI command parsing.

use std::time::Duration;

use cesso_core::{Board, Move};

use crate::error::UciError;

/// Parsed arguments of a `go` command.
///
/// Every field defaults to "absent"/`false`; [`parse_command`] only sets the
/// ones the input line actually mentions. `perft` bypasses search entirely
/// (see [`crate::engine::UciEngine`]) and is mutually meaningful on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoParams {
    /// `depth N` -- maximum search depth in plies.
    pub depth: Option<u8>,
    /// `movetime M` -- search for exactly this long.
    pub movetime: Option<Duration>,
    /// `wtime T` -- White's remaining clock time.
    pub wtime: Option<Duration>,
    /// `btime T` -- Black's remaining clock time.
    pub btime: Option<Duration>,
    /// `winc T` -- White's increment per move.
    pub winc: Option<Duration>,
    /// `binc T` -- Black's increment per move.
    pub binc: Option<Duration>,
    /// `movestogo N` -- moves remaining until the next time control.
    pub movestogo: Option<u32>,
    /// `infinite` -- search until `stop`, ignoring all other time limits.
    pub infinite: bool,
    /// `ponder` -- search the position reached after the expected opponent
    /// reply; the clock stays inactive until `ponderhit`.
    pub ponder: bool,
    /// `perft N` -- print a `divide` breakdown to depth N instead of searching.
    pub perft: Option<u8>,
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a board position with optional moves applied.
    Position(Board),
    /// `go [depth N] [movetime M] [wtime…] [winc…] [btime…] [binc…] [infinite] [ponder] [perft N]`.
    Go(GoParams),
    /// `ponderhit` -- the opponent played the expected move; start the clock.
    PonderHit,
    /// `stop` -- halt the current search.
    Stop,
    /// `d` -- print an ASCII board, its FEN, and its Zobrist key.
    D,
    /// `eval` -- print the static evaluation of the current position.
    Eval,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored per UCI spec).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "ponderhit" => Ok(Command::PonderHit),
        "d" => Ok(Command::D),
        "eval" => Ok(Command::Eval),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut board, rest) = if tokens[0] == "startpos" {
        let rest = &tokens[1..];
        (Board::starting_position(), rest)
    } else if tokens[0] == "fen" {
        // FEN is 6 space-separated fields
        if tokens.len() < 7 {
            return Err(UciError::InvalidFen {
                fen: tokens[1..].join(" "),
            });
        }
        let fen = tokens[1..7].join(" ");
        let board: Board = fen.parse().map_err(|_| UciError::InvalidFen {
            fen: fen.clone(),
        })?;
        (board, &tokens[7..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    // Apply moves if present: "moves e2e4 d7d5 ..."
    if !rest.is_empty() && rest[0] == "moves" {
        for uci_str in &rest[1..] {
            let mv = Move::from_uci(uci_str, &board).ok_or_else(|| UciError::InvalidMove {
                uci_move: uci_str.to_string(),
            })?;
            board = board.make_move(mv);
        }
    }

    Ok(Command::Position(board))
}

/// Parse the `go` command arguments into a [`GoParams`].
///
/// Unrecognized subcommands are ignored (per UCI, engines tolerate
/// forward-compatible extensions); a malformed numeric value for a
/// recognized subcommand is an error.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        macro_rules! next_u32 {
            ($name:expr) => {{
                let value = tokens.get(i + 1).ok_or_else(|| UciError::MissingGoValue {
                    param: $name.to_string(),
                })?;
                let parsed: u32 = value.parse().map_err(|_| UciError::InvalidGoValue {
                    param: $name.to_string(),
                    value: value.to_string(),
                })?;
                i += 2;
                parsed
            }};
        }

        match tokens[i] {
            "depth" => {
                let value = next_u32!("depth");
                params.depth = Some(value.min(u8::MAX as u32) as u8);
            }
            "movetime" => params.movetime = Some(Duration::from_millis(next_u32!("movetime") as u64)),
            "wtime" => params.wtime = Some(Duration::from_millis(next_u32!("wtime") as u64)),
            "btime" => params.btime = Some(Duration::from_millis(next_u32!("btime") as u64)),
            "winc" => params.winc = Some(Duration::from_millis(next_u32!("winc") as u64)),
            "binc" => params.binc = Some(Duration::from_millis(next_u32!("binc") as u64)),
            "movestogo" => params.movestogo = Some(next_u32!("movestogo")),
            "perft" => params.perft = Some(next_u32!("perft").min(u8::MAX as u32) as u8),
            "infinite" => {
                params.infinite = true;
                i += 1;
            }
            "ponder" => {
                params.ponder = true;
                i += 1;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}
