//! Error types returned by the rules engine, the move parser and the move selector.
//!
//! All of these are plain values: none of them indicate a broken process, and
//! callers are expected to report them and carry on.

use crate::engine::Player;
use std::num::ParseIntError;

/// Why a move was rejected by [`crate::engine::Game::validate_move`].
///
/// Variants are listed in the order the checks are performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid positions")]
    InvalidPosition,

    #[error("no piece at source position")]
    NoPieceAtSource,

    #[error("not your piece")]
    NotYourPiece,

    #[error("destination is occupied")]
    DestinationOccupied,

    #[error("can only move on dark squares")]
    NotDarkSquare,

    #[error("must move diagonally")]
    NotDiagonal,

    /// A regular piece tried to move away from the opponent's side.
    #[error("{} pieces can only move {}", .0, direction_name(.0))]
    WrongDirection(Player),

    #[error("no piece to capture")]
    NoPieceToCapture,

    #[error("cannot capture your own piece")]
    CannotCaptureOwnPiece,

    #[error("invalid move distance")]
    InvalidDistance,
}

fn direction_name(player: &Player) -> &'static str {
    match player {
        Player::White => "up (towards row 0)",
        Player::Black => "down (towards row 7)",
    }
}

/// Failure to read a move written as `fromRow,fromCol:toRow,toCol`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("invalid move format, expected 'fromRow,fromCol:toRow,toCol'")]
    Format,

    #[error("invalid {field}: {source}")]
    InvalidNumber {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectMoveError {
    #[error("no valid moves available")]
    NoMovesAvailable,
}
