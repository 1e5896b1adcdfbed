//! Helpers shared by the per-piece candidate generators.

use crate::game_state::board_geometry::{offset_square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{GameState, Piece, Square};
use crate::moves::chess_move::ChessMove;

/// Push a quiet move or a capture onto `out`.
///
/// Returns `true` when `to` is occupied, which ends a slide.
#[inline]
pub fn push_quiet_or_capture(
    piece: Piece,
    game_state: &GameState,
    to: Square,
    out: &mut Vec<ChessMove>,
) -> bool {
    match game_state.piece_at(to) {
        None => {
            out.push(ChessMove::Normal { piece, to });
            false
        }
        Some(occupant) => {
            if occupant.is_enemy_of(piece) {
                out.push(ChessMove::Capture {
                    piece,
                    to,
                    captured: occupant,
                });
            }
            true
        }
    }
}

/// Whether a one-square step along `vector` would wrap around a side edge.
#[inline]
pub const fn crosses_side_edge(square: Square, vector: i32) -> bool {
    match vector {
        -9 | -1 | 7 => FIRST_COLUMN[square as usize],
        -7 | 1 | 9 => EIGHTH_COLUMN[square as usize],
        _ => false,
    }
}

/// Walk each direction until the edge or the first occupied square.
pub fn slide_moves(
    piece: Piece,
    game_state: &GameState,
    vectors: &[i32],
    out: &mut Vec<ChessMove>,
) {
    for &vector in vectors {
        let mut current = piece.square;
        loop {
            if crosses_side_edge(current, vector) {
                break;
            }
            let Some(next) = offset_square(current, vector) else {
                break;
            };
            current = next;
            if push_quiet_or_capture(piece, game_state, current, out) {
                break;
            }
        }
    }
}
