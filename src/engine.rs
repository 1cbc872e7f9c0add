//! Core rules engine for 8x8 checkers.
//!
//! This module defines the game's fundamental components:
//! - `Position`, `Player`, `Piece`: small value types describing squares and pieces.
//! - `Board`: the 8x8 grid of optional pieces, its initial layout and its text rendering.
//! - `Move`: a from/to pair with a canonical `fromRow,fromCol:toRow,toCol` text form.
//! - `Game`: owns the board, whose turn it is, the move history and the game state,
//!   and is the only way to change any of them.
//! - `RulesEngine`: the capability set `Game` offers to move selectors and front ends.
use crate::error::{MoveError, ParseMoveError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, trace};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Rows filled with pieces for each side at the start of a game.
const STARTING_ROWS: usize = 3;

/// Diagonal directions probed by [`Game::legal_moves`], in probe order.
const DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A square on the board, addressed by row (top to bottom) and column (left to right).
///
/// Coordinates are signed so that a position read from user input can be held
/// even when it lies off the board; [`Position::is_valid`] tells the two apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Returns `true` if both coordinates are within `0..BOARD_SIZE`.
    pub fn is_valid(&self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Returns `true` for the playable squares, where `row + col` is odd.
    pub fn is_dark(&self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }

    /// Returns the position shifted by `(dr, dc)`. The result may be off the board.
    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Position::new(self.row + dr, self.col + dc)
    }

    fn index(&self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// One of the two sides. White always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row direction a regular piece of this player moves in.
    ///
    /// White starts at the bottom (rows 5-7) and moves towards row 0;
    /// Black starts at the top (rows 0-2) and moves towards row 7.
    pub fn forward(&self) -> i32 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Single character used when drawing the board.
    ///
    /// ```
    /// use checkers::engine::Player;
    /// assert_eq!(Player::White.symbol(), 'W');
    /// assert_eq!(Player::Black.symbol(), 'B');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Kind of a piece.
///
/// `King` exists so that the forward-only rule can exempt kings, but no rule
/// currently promotes a piece, so every piece in play is `Regular`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Regular,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub kind: PieceType,
}

impl Piece {
    /// Creates a regular piece owned by `player`.
    pub fn new(player: Player) -> Self {
        Piece {
            player,
            kind: PieceType::Regular,
        }
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceType::King
    }

    pub fn symbol(&self) -> char {
        self.player.symbol()
    }
}

/// The 8x8 playing surface.
///
/// Pieces only ever stand on dark squares. Nothing here enforces that; the
/// initial layout establishes it and every legal move keeps it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates a board with the standard starting layout.
    ///
    /// Black occupies the dark squares of rows 0-2, White those of rows 5-7,
    /// and the two middle rows are empty.
    ///
    /// # Examples
    /// ```
    /// use checkers::engine::{Board, Player, Position};
    /// let board = Board::new();
    /// assert_eq!(board.count_pieces(Player::White), 12);
    /// assert_eq!(board.count_pieces(Player::Black), 12);
    /// assert_eq!(board.get_piece(Position::new(5, 0)).map(|p| p.player), Some(Player::White));
    /// assert!(board.is_empty(Position::new(3, 0)));
    /// ```
    pub fn new() -> Self {
        let mut board = Board::new_empty();
        for r in 0..BOARD_SIZE {
            let owner = if r < STARTING_ROWS {
                Player::Black
            } else if r >= BOARD_SIZE - STARTING_ROWS {
                Player::White
            } else {
                continue;
            };
            for c in 0..BOARD_SIZE {
                if (r + c) % 2 == 1 {
                    board.squares[r][c] = Some(Piece::new(owner));
                }
            }
        }
        board
    }

    /// Creates a board with no pieces on it.
    pub fn new_empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns the piece at `pos`, or `None` if the square is empty or off the board.
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        pos.index().and_then(|(r, c)| self.squares[r][c])
    }

    /// Places `piece` at `pos`, replacing whatever was there. Off-board positions are ignored.
    pub fn set_piece(&mut self, pos: Position, piece: Piece) {
        if let Some((r, c)) = pos.index() {
            self.squares[r][c] = Some(piece);
        }
    }

    /// Clears the square at `pos`. Off-board positions are ignored.
    pub fn remove_piece(&mut self, pos: Position) {
        if let Some((r, c)) = pos.index() {
            self.squares[r][c] = None;
        }
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get_piece(pos).is_none()
    }

    /// Iterates over the squares holding a piece of `player`, in row-major order.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        (0..BOARD_SIZE).flat_map(move |r| {
            (0..BOARD_SIZE).filter_map(move |c| match self.squares[r][c] {
                Some(piece) if piece.player == player => {
                    Some(Position::new(r as i32, c as i32))
                }
                _ => None,
            })
        })
    }

    pub fn count_pieces(&self, player: Player) -> usize {
        self.positions_of(player).count()
    }

    /// Draws the board as text, optionally marking one square.
    ///
    /// The first line holds the column numbers; each following line starts with
    /// its row number. Pieces are drawn with their owner's symbol, empty dark
    /// squares as `.` and light squares as a blank. If `highlight` is
    /// `Some(pos)`, that cell is wrapped in ANSI reverse video so a terminal
    /// shows it inverted.
    pub fn to_string_with_highlight(&self, highlight: Option<Position>) -> String {
        let mut output = String::new();

        output.push_str("  ");
        for c in 0..BOARD_SIZE {
            output.push_str(&format!("{} ", c));
        }
        output.push('\n');

        for r in 0..BOARD_SIZE {
            output.push_str(&format!("{} ", r));
            for c in 0..BOARD_SIZE {
                let pos = Position::new(r as i32, c as i32);
                let cell = match self.get_piece(pos) {
                    Some(piece) => piece.symbol(),
                    None if pos.is_dark() => '.',
                    None => ' ',
                };
                if highlight == Some(pos) {
                    output.push_str(&format!("\x1b[7m{}\x1b[0m ", cell));
                } else {
                    output.push(cell);
                    output.push(' ');
                }
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

/// A relocation of one piece from `from` to `to`.
///
/// Moves read and print as `fromRow,fromCol:toRow,toCol`:
/// ```
/// use checkers::engine::{Move, Position};
/// let mv: Move = "5,0:4,1".parse().unwrap();
/// assert_eq!(mv, Move::new(Position::new(5, 0), Position::new(4, 1)));
/// assert_eq!(mv.to_string(), "5,0:4,1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    pub fn row_delta(&self) -> i32 {
        self.to.row - self.from.row
    }

    pub fn col_delta(&self) -> i32 {
        self.to.col - self.from.col
    }

    /// Returns `true` for two-square moves, the only moves that can capture.
    pub fn is_jump(&self) -> bool {
        self.row_delta().abs() == 2
    }

    /// The square jumped over, halfway between `from` and `to`.
    pub fn midpoint(&self) -> Position {
        self.from.offset(self.row_delta() / 2, self.col_delta() / 2)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::parse_move(s)
    }
}

/// Overall status of a game.
///
/// `Draw` is part of the public vocabulary but no rule currently produces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameState {
    fn won_by(player: Player) -> Self {
        match player {
            Player::White => GameState::WhiteWins,
            Player::Black => GameState::BlackWins,
        }
    }

    /// Returns `true` for every state except `InProgress`.
    pub fn is_over(&self) -> bool {
        *self != GameState::InProgress
    }

    /// The winning side, if this state names one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::WhiteWins => Some(Player::White),
            GameState::BlackWins => Some(Player::Black),
            GameState::InProgress | GameState::Draw => None,
        }
    }
}

/// What a front end or a move selector may do with a game.
///
/// [`Game`] is the implementation used in play; tests substitute their own.
pub trait RulesEngine {
    /// Checks `mv` for the player to move without changing anything.
    fn validate_move(&self, mv: Move) -> Result<(), MoveError>;

    /// Validates and then plays `mv`. Nothing changes when an error is returned.
    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError>;

    /// Every move the player to move could make, in a deterministic order.
    fn legal_moves(&self) -> Vec<Move>;

    fn board(&self) -> &Board;

    fn current_player(&self) -> Player;

    fn state(&self) -> GameState;

    fn is_game_over(&self) -> bool {
        self.state().is_over()
    }

    fn winner(&self) -> Option<Player> {
        self.state().winner()
    }
}

/// A single match: the board, the side to move, the moves played so far and the result.
///
/// All changes go through [`Game::apply_move`]; everything else is a read-only view.
///
/// # Examples
/// ```
/// use checkers::engine::{Game, GameState, Move, Player, Position};
/// let mut game = Game::new();
/// assert_eq!(game.current_player(), Player::White);
///
/// let mv: Move = "5,0:4,1".parse().unwrap();
/// game.apply_move(mv).unwrap();
/// assert_eq!(game.current_player(), Player::Black);
/// assert_eq!(game.history(), &[mv]);
/// assert_eq!(game.state(), GameState::InProgress);
/// assert_eq!(game.status(), "Current player: Black");
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    state: GameState,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Starts a game from the standard layout with White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Player::White,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts a game from an arbitrary position with `to_move` to play.
    ///
    /// The game state is computed straight away, so a position where one side
    /// is already beaten is reported as over.
    pub fn new_with_board(board: Board, to_move: Player) -> Self {
        let mut game = Game {
            board,
            current_player: to_move,
            state: GameState::InProgress,
            history: Vec::new(),
        };
        game.update_game_state();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// The winning side, once the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// One-line summary for display: whose turn it is, or how the game ended.
    pub fn status(&self) -> String {
        match self.state {
            GameState::InProgress => format!("Current player: {}", self.current_player),
            GameState::WhiteWins => format!("Game Over! {} wins!", Player::White),
            GameState::BlackWins => format!("Game Over! {} wins!", Player::Black),
            GameState::Draw => "Game Over! It's a draw!".to_string(),
        }
    }

    /// Checks whether the player to move may play `mv`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// 1. both squares are on the board;
    /// 2. the source holds a piece of the player to move;
    /// 3. the destination is empty;
    /// 4. both squares are dark;
    /// 5. the move is diagonal;
    /// 6. a regular piece moves towards the opponent;
    /// 7. the move is one square, or two squares over an opposing piece.
    pub fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        if !mv.from.is_valid() || !mv.to.is_valid() {
            return Err(MoveError::InvalidPosition);
        }

        let piece = self
            .board
            .get_piece(mv.from)
            .ok_or(MoveError::NoPieceAtSource)?;
        if piece.player != self.current_player {
            return Err(MoveError::NotYourPiece);
        }

        if !self.board.is_empty(mv.to) {
            return Err(MoveError::DestinationOccupied);
        }

        if !mv.from.is_dark() || !mv.to.is_dark() {
            return Err(MoveError::NotDarkSquare);
        }

        let row_delta = mv.row_delta();
        if mv.col_delta().abs() != row_delta.abs() {
            return Err(MoveError::NotDiagonal);
        }

        if !piece.is_king() && row_delta.signum() != piece.player.forward() {
            return Err(MoveError::WrongDirection(piece.player));
        }

        match row_delta.abs() {
            1 => Ok(()),
            2 => match self.board.get_piece(mv.midpoint()) {
                None => Err(MoveError::NoPieceToCapture),
                Some(captured) if captured.player == piece.player => {
                    Err(MoveError::CannotCaptureOwnPiece)
                }
                Some(_) => Ok(()),
            },
            _ => Err(MoveError::InvalidDistance),
        }
    }

    /// Plays `mv` for the player to move.
    ///
    /// On success a jumped piece is removed, the mover is relocated, the move
    /// is recorded, the turn passes to the opponent and the game state is
    /// recomputed. On failure the game is left exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Err(err) = self.validate_move(mv) {
            trace!(%mv, player = %self.current_player, %err, "rejected move");
            return Err(err);
        }

        // validate_move guarantees a piece at the source.
        let Some(piece) = self.board.get_piece(mv.from) else {
            return Err(MoveError::NoPieceAtSource);
        };

        if mv.is_jump() {
            self.board.remove_piece(mv.midpoint());
        }
        self.board.remove_piece(mv.from);
        self.board.set_piece(mv.to, piece);

        self.history.push(mv);
        debug!(
            %mv,
            player = %self.current_player,
            capture = mv.is_jump(),
            ply = self.history.len(),
            "applied move"
        );

        self.current_player = self.current_player.opponent();
        self.update_game_state();

        Ok(())
    }

    /// Lists every move available to the player to move.
    ///
    /// Sources are visited in row-major order. From each source the four
    /// diagonals are tried in the order up-left, up-right, down-left,
    /// down-right, and within a diagonal the one-square step comes before the
    /// two-square jump. Any candidate accepted by [`Game::validate_move`] is kept.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.board.positions_of(self.current_player) {
            for &(dr, dc) in DIRECTIONS.iter() {
                for distance in 1..=2 {
                    let mv = Move::new(from, from.offset(dr * distance, dc * distance));
                    if self.validate_move(mv).is_ok() {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    // A side with no pieces has lost; otherwise the side to move loses when it
    // cannot move. Nothing here ever declares a draw.
    fn update_game_state(&mut self) {
        let previous = self.state;

        self.state = if self.board.count_pieces(Player::White) == 0 {
            GameState::BlackWins
        } else if self.board.count_pieces(Player::Black) == 0 {
            GameState::WhiteWins
        } else if self.legal_moves().is_empty() {
            GameState::won_by(self.current_player.opponent())
        } else {
            GameState::InProgress
        };

        if previous == GameState::InProgress && self.state != GameState::InProgress {
            info!(state = ?self.state, plies = self.history.len(), "game over");
        }
    }
}

impl RulesEngine for Game {
    fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        Game::validate_move(self, mv)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        Game::apply_move(self, mv)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Game::legal_moves(self)
    }

    fn board(&self) -> &Board {
        Game::board(self)
    }

    fn current_player(&self) -> Player {
        Game::current_player(self)
    }

    fn state(&self) -> GameState {
        Game::state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
        Move::new(pos(from.0, from.1), pos(to.0, to.1))
    }

    #[test]
    fn test_position_validity() {
        assert!(pos(0, 0).is_valid());
        assert!(pos(7, 7).is_valid());
        assert!(!pos(-1, 0).is_valid());
        assert!(!pos(0, 8).is_valid());
        assert!(!pos(8, 3).is_valid());
    }

    #[test]
    fn test_position_dark_squares() {
        assert!(pos(0, 1).is_dark());
        assert!(pos(5, 0).is_dark());
        assert!(!pos(0, 0).is_dark());
        assert!(!pos(4, 4).is_dark());
    }

    #[test]
    fn test_player_opponent_is_involution() {
        for player in [Player::White, Player::Black] {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        let mut white = 0;
        let mut black = 0;
        for r in 0..BOARD_SIZE as i32 {
            for c in 0..BOARD_SIZE as i32 {
                let p = pos(r, c);
                match board.get_piece(p) {
                    Some(piece) => {
                        assert!(p.is_dark(), "piece on light square {}", p);
                        assert_eq!(piece.kind, PieceType::Regular);
                        match piece.player {
                            Player::White => {
                                assert!((5..=7).contains(&r));
                                white += 1;
                            }
                            Player::Black => {
                                assert!((0..=2).contains(&r));
                                black += 1;
                            }
                        }
                    }
                    None => {
                        assert!(!p.is_dark() || (3..=4).contains(&r));
                    }
                }
            }
        }
        assert_eq!(white, 12);
        assert_eq!(black, 12);
    }

    #[test]
    fn test_board_set_get_remove() {
        let mut board = Board::new_empty();
        let piece = Piece::new(Player::Black);
        for r in 0..BOARD_SIZE as i32 {
            for c in 0..BOARD_SIZE as i32 {
                board.set_piece(pos(r, c), piece);
                assert_eq!(board.get_piece(pos(r, c)), Some(piece));
                assert!(!board.is_empty(pos(r, c)));
                board.remove_piece(pos(r, c));
                assert_eq!(board.get_piece(pos(r, c)), None);
                assert!(board.is_empty(pos(r, c)));
            }
        }
    }

    #[test]
    fn test_board_out_of_range_is_noop() {
        let mut board = Board::new();
        let before = board.clone();
        for p in [pos(-1, 0), pos(0, -1), pos(8, 0), pos(0, 8), pos(100, -100)] {
            board.set_piece(p, Piece::new(Player::White));
            board.remove_piece(p);
            assert_eq!(board.get_piece(p), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_board_formatting() {
        let expected = "  0 1 2 3 4 5 6 7 \n\
                        0   B   B   B   B \n\
                        1 B   B   B   B   \n\
                        2   B   B   B   B \n\
                        3 .   .   .   .   \n\
                        4   .   .   .   . \n\
                        5 W   W   W   W   \n\
                        6   W   W   W   W \n\
                        7 W   W   W   W   \n";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_display_with_highlight() {
        let board = Board::new();
        let output = board.to_string_with_highlight(Some(pos(5, 0)));
        let row5 = output.lines().nth(6).unwrap();
        assert_eq!(row5, "5 \x1b[7mW\x1b[0m   W   W   W   ");
        assert_eq!(board.to_string_with_highlight(None), board.to_string());
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.history().is_empty());
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), "Current player: White");
    }

    #[test]
    fn test_valid_simple_move() {
        let game = Game::new();
        assert_eq!(game.validate_move(mv((5, 0), (4, 1))), Ok(()));
    }

    #[test]
    fn test_apply_simple_move() {
        let mut game = Game::new();
        game.apply_move(mv((5, 0), (4, 1))).unwrap();

        assert!(game.board().is_empty(pos(5, 0)));
        assert_eq!(
            game.board().get_piece(pos(4, 1)),
            Some(Piece::new(Player::White))
        );
        assert_eq!(game.history(), &[mv((5, 0), (4, 1))]);
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn test_invalid_move_from_empty_square_leaves_game_unchanged() {
        let mut game = Game::new();
        let before = game.board().clone();

        let result = game.apply_move(mv((3, 0), (4, 1)));
        assert_eq!(result, Err(MoveError::NoPieceAtSource));
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_validation_errors_in_order() {
        let game = Game::new();
        let cases = [
            (mv((5, 0), (4, -1)), MoveError::InvalidPosition),
            (mv((-1, 0), (0, 1)), MoveError::InvalidPosition),
            (mv((3, 0), (4, 1)), MoveError::NoPieceAtSource),
            (mv((2, 1), (3, 0)), MoveError::NotYourPiece),
            (mv((6, 1), (5, 0)), MoveError::DestinationOccupied),
            (mv((5, 0), (4, 0)), MoveError::NotDarkSquare),
            (mv((5, 2), (4, 2)), MoveError::NotDarkSquare),
            (mv((5, 2), (3, 2)), MoveError::NotDiagonal),
            (mv((5, 2), (4, 5)), MoveError::NotDiagonal),
            (mv((5, 2), (2, 5)), MoveError::DestinationOccupied),
            (mv((5, 2), (3, 4)), MoveError::NoPieceToCapture),
        ];
        for (candidate, expected) in cases {
            assert_eq!(
                game.validate_move(candidate),
                Err(expected),
                "move {}",
                candidate
            );
        }
    }

    #[test]
    fn test_wrong_direction() {
        let board = board_from_str_array(&[
            "        ",
            "        ",
            "        ",
            "  B     ",
            "     W  ",
            "        ",
            "        ",
            "        ",
        ])
        .unwrap();
        let white = Game::new_with_board(board.clone(), Player::White);
        assert_eq!(
            white.validate_move(mv((4, 5), (5, 6))),
            Err(MoveError::WrongDirection(Player::White))
        );
        let black = Game::new_with_board(board, Player::Black);
        assert_eq!(
            black.validate_move(mv((3, 2), (2, 1))),
            Err(MoveError::WrongDirection(Player::Black))
        );
    }

    #[test]
    fn test_king_is_exempt_from_direction_rule() {
        let mut board = Board::new_empty();
        board.set_piece(
            pos(4, 3),
            Piece {
                player: Player::White,
                kind: PieceType::King,
            },
        );
        board.set_piece(pos(0, 1), Piece::new(Player::Black));
        let game = Game::new_with_board(board, Player::White);
        assert_eq!(game.validate_move(mv((4, 3), (5, 4))), Ok(()));
        assert_eq!(game.validate_move(mv((4, 3), (3, 2))), Ok(()));
    }

    #[test]
    fn test_invalid_distance() {
        let board = board_from_str_array(&[
            " B      ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "    W   ",
        ])
        .unwrap();
        let game = Game::new_with_board(board, Player::White);
        assert_eq!(
            game.validate_move(mv((7, 4), (4, 7))),
            Err(MoveError::InvalidDistance)
        );
    }

    #[test]
    fn test_jump_captures_midpoint_piece() {
        let board = board_from_str_array(&[
            "        ",
            "      B ",
            "        ",
            "        ",
            "   B    ",
            "  W     ",
            "        ",
            "        ",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board, Player::White);
        let jump = mv((5, 2), (3, 4));
        assert_eq!(game.validate_move(jump), Ok(()));

        game.apply_move(jump).unwrap();
        assert!(game.board().is_empty(pos(5, 2)));
        assert!(game.board().is_empty(pos(4, 3)));
        assert_eq!(
            game.board().get_piece(pos(3, 4)),
            Some(Piece::new(Player::White))
        );
        assert_eq!(game.board().count_pieces(Player::Black), 1);
        assert_eq!(game.board().count_pieces(Player::White), 1);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_cannot_capture_own_piece() {
        let board = board_from_str_array(&[
            " B      ",
            "        ",
            "        ",
            "        ",
            "   W    ",
            "  W     ",
            "        ",
            "        ",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board.clone(), Player::White);
        let jump = mv((5, 2), (3, 4));
        assert_eq!(
            game.apply_move(jump),
            Err(MoveError::CannotCaptureOwnPiece)
        );
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_legal_moves_initial_order() {
        let game = Game::new();
        let expected = vec![
            mv((5, 0), (4, 1)),
            mv((5, 2), (4, 1)),
            mv((5, 2), (4, 3)),
            mv((5, 4), (4, 3)),
            mv((5, 4), (4, 5)),
            mv((5, 6), (4, 5)),
            mv((5, 6), (4, 7)),
        ];
        assert_eq!(game.legal_moves(), expected);
    }

    #[test]
    fn test_legal_moves_direction_order() {
        let board = board_from_str_array(&[
            " B      ",
            "        ",
            "        ",
            "        ",
            "   B    ",
            "  W     ",
            "        ",
            "        ",
        ])
        .unwrap();
        let game = Game::new_with_board(board, Player::White);
        assert_eq!(
            game.legal_moves(),
            vec![mv((5, 2), (4, 1)), mv((5, 2), (3, 4))]
        );
    }

    #[test]
    fn test_every_legal_move_validates() {
        let mut game = Game::new();
        for _ in 0..6 {
            let moves = game.legal_moves();
            assert!(!moves.is_empty());
            for m in &moves {
                assert_eq!(game.validate_move(*m), Ok(()));
            }
            game.apply_move(moves[0]).unwrap();
        }
    }

    #[test]
    fn test_no_legal_moves_loses() {
        // White's last piece sits in the corner. Its only diagonal is blocked
        // and the square behind the blocker is taken too.
        let board = board_from_str_array(&[
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "  B     ",
            " B      ",
            "W       ",
        ])
        .unwrap();
        let game = Game::new_with_board(board, Player::White);
        assert!(game.legal_moves().is_empty());
        assert!(game.is_game_over());
        assert_eq!(game.state(), GameState::BlackWins);
        assert_eq!(game.winner(), Some(Player::Black));
        assert_eq!(game.status(), "Game Over! Black wins!");
    }

    #[test]
    fn test_boxed_in_after_move_ends_game() {
        // Black's last piece at (0,1) can only step to (1,0) or (1,2). White
        // fills (1,2) and keeps (2,3) occupied so there is nothing to jump into.
        let board = board_from_str_array(&[
            " B      ",
            "W       ",
            " W W    ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board, Player::White);
        assert!(!game.is_game_over());

        game.apply_move(mv((2, 1), (1, 2))).unwrap();
        assert_eq!(game.current_player(), Player::Black);
        assert!(game.legal_moves().is_empty());
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Player::White));
        assert_eq!(game.status(), "Game Over! White wins!");
    }

    #[test]
    fn test_capturing_last_piece_wins() {
        let board = board_from_str_array(&[
            "        ",
            "        ",
            "        ",
            "        ",
            "   B    ",
            "  W     ",
            "        ",
            "        ",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board, Player::White);
        game.apply_move(mv((5, 2), (3, 4))).unwrap();
        assert_eq!(game.board().count_pieces(Player::Black), 0);
        assert_eq!(game.state(), GameState::WhiteWins);
        assert_eq!(game.winner(), Some(Player::White));
    }

    #[test]
    fn test_empty_side_loses_on_construction() {
        let mut board = Board::new_empty();
        board.set_piece(pos(5, 0), Piece::new(Player::White));
        let game = Game::new_with_board(board, Player::Black);
        assert_eq!(game.state(), GameState::WhiteWins);
    }

    #[test]
    fn test_draw_status_text() {
        let mut game = Game::new();
        game.state = GameState::Draw;
        assert!(game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), "Game Over! It's a draw!");
    }

    #[test]
    fn test_game_state_outcome() {
        assert!(!GameState::InProgress.is_over());
        assert_eq!(GameState::InProgress.winner(), None);
        assert!(GameState::WhiteWins.is_over());
        assert_eq!(GameState::WhiteWins.winner(), Some(Player::White));
        assert!(GameState::BlackWins.is_over());
        assert_eq!(GameState::BlackWins.winner(), Some(Player::Black));
        assert!(GameState::Draw.is_over());
        assert_eq!(GameState::Draw.winner(), None);
    }

    #[test]
    fn test_move_helpers() {
        let jump = mv((5, 3), (3, 1));
        assert!(jump.is_jump());
        assert_eq!(jump.midpoint(), pos(4, 2));
        assert_eq!(jump.row_delta(), -2);
        assert_eq!(jump.col_delta(), -2);
        assert!(!mv((5, 0), (4, 1)).is_jump());
    }

    #[test]
    fn test_rules_engine_trait_matches_game() {
        let mut game = Game::new();
        let rules: &mut dyn RulesEngine = &mut game;
        assert_eq!(rules.legal_moves().len(), 7);
        rules.apply_move(mv((5, 0), (4, 1))).unwrap();
        assert_eq!(rules.current_player(), Player::Black);
        assert!(!rules.is_game_over());
        assert_eq!(rules.winner(), None);
        assert_eq!(rules.board().count_pieces(Player::White), 12);
    }
}
