//! Queen candidate moves: the union of bishop and rook directions.

use crate::game_state::chess_types::{GameState, Piece};
use crate::moves::bishop_moves::BISHOP_VECTORS;
use crate::moves::chess_move::ChessMove;
use crate::moves::move_shared::slide_moves;
use crate::moves::rook_moves::ROOK_VECTORS;

pub fn candidate_moves(piece: Piece, game_state: &GameState, out: &mut Vec<ChessMove>) {
    slide_moves(piece, game_state, &BISHOP_VECTORS, out);
    slide_moves(piece, game_state, &ROOK_VECTORS, out);
}
