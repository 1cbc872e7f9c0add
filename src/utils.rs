use crate::engine::{Board, Move, Piece, Player, Position, BOARD_SIZE};
use crate::error::ParseMoveError;

/// Parses a move written as `fromRow,fromCol:toRow,toCol`.
///
/// Surrounding whitespace, and whitespace around each number, is ignored.
/// The numbers are not range-checked here; a move that leaves the board parses
/// fine and is rejected later by the rules engine.
///
/// # Returns
/// * `Ok(Move)` if the text has two `:`-separated endpoints, each made of two
///   `,`-separated integers.
/// * `Err(ParseMoveError::Format)` if the number of segments is wrong.
/// * `Err(ParseMoveError::InvalidNumber { .. })` naming the first component
///   that is not an integer.
///
/// # Examples
/// ```
/// use checkers::utils::parse_move;
/// use checkers::engine::{Move, Position};
/// use checkers::error::ParseMoveError;
///
/// let mv = parse_move(" 5,0 : 4,1 ").unwrap();
/// assert_eq!(mv, Move::new(Position::new(5, 0), Position::new(4, 1)));
///
/// assert_eq!(parse_move("5,0-4,1"), Err(ParseMoveError::Format));
/// assert!(matches!(
///     parse_move("5,x:4,1"),
///     Err(ParseMoveError::InvalidNumber { field: "from column", .. })
/// ));
/// ```
pub fn parse_move(s: &str) -> Result<Move, ParseMoveError> {
    let segments: Vec<&str> = s.trim().split(':').collect();
    if segments.len() != 2 {
        return Err(ParseMoveError::Format);
    }

    let from_parts: Vec<&str> = segments[0].split(',').collect();
    let to_parts: Vec<&str> = segments[1].split(',').collect();
    if from_parts.len() != 2 || to_parts.len() != 2 {
        return Err(ParseMoveError::Format);
    }

    let from_row = parse_component(from_parts[0], "from row")?;
    let from_col = parse_component(from_parts[1], "from column")?;
    let to_row = parse_component(to_parts[0], "to row")?;
    let to_col = parse_component(to_parts[1], "to column")?;

    Ok(Move::new(
        Position::new(from_row, from_col),
        Position::new(to_row, to_col),
    ))
}

fn parse_component(text: &str, field: &'static str) -> Result<i32, ParseMoveError> {
    text.trim()
        .parse::<i32>()
        .map_err(|source| ParseMoveError::InvalidNumber { field, source })
}

/// Builds a `Board` from rows of text, starting from row 0.
///
/// Each character is one square: `W` for a White piece, `B` for a Black
/// piece, and `.` or a space for an empty square. Missing rows and the
/// missing tail of a short row are left empty. Pieces may be placed on any
/// square, light or dark; keeping them on dark squares is up to the caller.
///
/// # Returns
/// * `Ok(Board)` if every row fits on the board and every character is recognised.
/// * `Err(String)` describing the first problem otherwise.
///
/// # Examples
/// ```
/// use checkers::utils::board_from_str_array;
/// use checkers::engine::{Player, Position};
///
/// let board = board_from_str_array(&[" B", "", "...W"]).unwrap();
/// assert_eq!(board.get_piece(Position::new(0, 1)).map(|p| p.player), Some(Player::Black));
/// assert_eq!(board.get_piece(Position::new(2, 3)).map(|p| p.player), Some(Player::White));
/// assert!(board.is_empty(Position::new(7, 0)));
///
/// assert!(board_from_str_array(&["X"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() > BOARD_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected at most {}, found {}",
            BOARD_SIZE,
            s.len()
        ));
    }

    let mut board = Board::new_empty();

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() > BOARD_SIZE {
            return Err(format!(
                "Row {} is too long. Expected at most {} characters, found {}",
                r,
                BOARD_SIZE,
                row_str.chars().count()
            ));
        }

        for (c, square) in row_str.chars().enumerate() {
            let piece = match square {
                'W' => Piece::new(Player::White),
                'B' => Piece::new(Player::Black),
                '.' | ' ' => continue,
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        square, r, c
                    ))
                }
            };
            board.set_piece(Position::new(r as i32, c as i32), piece);
        }
    }

    Ok(board)
}
