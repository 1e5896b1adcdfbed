//! Knight candidate moves.
//!
//! Knights jump by a fixed offset table; four column-exclusion tables drop
//! the jumps that would wrap around the a- or h-file.

use crate::game_state::board_geometry::{
    offset_square, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN,
};
use crate::game_state::chess_types::{GameState, Piece, Square};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_shared::push_quiet_or_capture;

pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn candidate_moves(piece: Piece, game_state: &GameState, out: &mut Vec<ChessMove>) {
    for offset in KNIGHT_OFFSETS {
        if is_column_exclusion(piece.square, offset) {
            continue;
        }
        let Some(to) = offset_square(piece.square, offset) else {
            continue;
        };
        push_quiet_or_capture(piece, game_state, to, out);
    }
}

#[inline]
const fn is_column_exclusion(square: Square, offset: i32) -> bool {
    let sq = square as usize;
    (FIRST_COLUMN[sq] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[sq] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[sq] && matches!(offset, 10 | -6))
        || (EIGHTH_COLUMN[sq] && matches!(offset, 17 | 10 | -6 | -15))
}
