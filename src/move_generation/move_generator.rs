//! Pseudo-legal move generation.
//!
//! Dispatches each piece to its movement rules. Nothing here checks whether
//! the mover's own king ends up attacked; that is the player view's job.

use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind};
use crate::moves::chess_move::ChessMove;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Append the candidate moves of a single piece.
#[inline]
pub fn piece_candidate_moves(piece: Piece, game_state: &GameState, out: &mut Vec<ChessMove>) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves::candidate_moves(piece, game_state, out),
        PieceKind::Knight => knight_moves::candidate_moves(piece, game_state, out),
        PieceKind::Bishop => bishop_moves::candidate_moves(piece, game_state, out),
        PieceKind::Rook => rook_moves::candidate_moves(piece, game_state, out),
        PieceKind::Queen => queen_moves::candidate_moves(piece, game_state, out),
        PieceKind::King => king_moves::candidate_moves(piece, game_state, out),
    }
}

/// Candidate moves of every piece in `pieces`, in the order given.
pub fn pseudo_legal_moves(pieces: &[Piece], game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for piece in pieces {
        piece_candidate_moves(*piece, game_state, &mut out);
    }
    out
}

/// Candidate moves of every piece of `color`.
pub fn pseudo_legal_moves_for(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    pseudo_legal_moves(&game_state.active_pieces(color), game_state)
}
