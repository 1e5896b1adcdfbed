//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and square
//! indices, with `0 == a1` and `63 == h8`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_geometry::{file_of, rank_of, NUM_SQUARES};
use crate::game_state::chess_types::Square;

/// Convert an algebraic coordinate (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to an algebraic coordinate.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square as usize >= NUM_SQUARES {
        return Err(ChessError::InvalidSquare {
            square: i32::from(square),
        });
    }
    Ok(square_name(square))
}

/// Coordinate name for a square already known to be on the board.
#[inline]
pub fn square_name(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}
