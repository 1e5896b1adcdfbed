//! King candidate moves (single steps only; castling is added by the player
//! view, which knows the opponent's attacks).

use crate::game_state::board_geometry::offset_square;
use crate::game_state::chess_types::{GameState, Piece};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_shared::{crosses_side_edge, push_quiet_or_capture};

pub const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn candidate_moves(piece: Piece, game_state: &GameState, out: &mut Vec<ChessMove>) {
    for offset in KING_OFFSETS {
        if crosses_side_edge(piece.square, offset) {
            continue;
        }
        let Some(to) = offset_square(piece.square, offset) else {
            continue;
        };
        push_quiet_or_capture(piece, game_state, to, out);
    }
}
