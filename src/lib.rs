//! # Checkers Library
//!
//! This library provides the rules engine for 8x8 checkers (draughts) and a
//! simple computer opponent that prefers captures and otherwise moves at random.
//!
//! It is used by two binaries:
//! - `human_player`: play White against the computer from the command line.
//! - `self_play`: pit two seeded computer players against each other over many
//!   games and report the results.
//!
//! ## Modules
//! - `engine`: board representation (`Board`, `Piece`, `Position`), moves (`Move`),
//!   game state management (`Game`) and the `RulesEngine` trait.
//! - `heuristics`: the `MoveSelector` trait and the capture-first `CapturePrioritySelector`.
//! - `utils`: parsing moves from `fromRow,fromCol:toRow,toCol` text and building
//!   boards from strings.
//! - `error`: the error types returned by the above.
//!
//! ## Example
//! ```
//! use checkers::{CapturePrioritySelector, Game, MoveSelector, Player};
//!
//! let mut game = Game::new();
//! game.apply_move("5,0:4,1".parse().unwrap()).unwrap();
//!
//! let mut computer = CapturePrioritySelector::seeded(1);
//! let reply = computer.select_move(&game).unwrap();
//! game.apply_move(reply).unwrap();
//! assert_eq!(game.current_player(), Player::White);
//! ```

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod utils;

pub use crate::engine::{
    Board, Game, GameState, Move, Piece, PieceType, Player, Position, RulesEngine, BOARD_SIZE,
};
pub use crate::error::{MoveError, ParseMoveError, SelectMoveError};
pub use crate::heuristics::{CapturePrioritySelector, MoveSelector};
pub use crate::utils::parse_move;
