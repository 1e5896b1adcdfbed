//! Bishop candidate moves.

use crate::game_state::chess_types::{GameState, Piece};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_shared::slide_moves;

pub const BISHOP_VECTORS: [i32; 4] = [-9, -7, 7, 9];

#[inline]
pub fn candidate_moves(piece: Piece, game_state: &GameState, out: &mut Vec<ChessMove>) {
    slide_moves(piece, game_state, &BISHOP_VECTORS, out);
}
