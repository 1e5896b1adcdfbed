//! Attack and check detection.
//!
//! A square is attacked when a non-pawn candidate move of the attacking side
//! lands on it, or when one of that side's pawns threatens it diagonally.
//! Pawn pushes never attack.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::pawn_moves::pawn_attack_squares;

/// Moves among `moves` that attack `square`.
pub fn attacks_on_square(square: Square, moves: &[ChessMove]) -> Vec<&ChessMove> {
    moves
        .iter()
        .filter(|mv| {
            mv.to() == Some(square)
                && mv.moving_piece().map(|piece| piece.kind) != Some(PieceKind::Pawn)
        })
        .collect()
}

/// Whether the side owning `attacker_pieces` (whose candidate moves are
/// `attacker_moves`) attacks `square`.
pub fn is_square_attacked(
    square: Square,
    attacker_moves: &[ChessMove],
    attacker_pieces: &[Piece],
) -> bool {
    !attacks_on_square(square, attacker_moves).is_empty()
        || attacker_pieces
            .iter()
            .filter(|piece| piece.kind == PieceKind::Pawn)
            .any(|pawn| pawn_attack_squares(*pawn).any(|target| target == square))
}

/// The king of `color`.
pub fn find_king(game_state: &GameState, color: Color) -> ChessResult<Piece> {
    game_state
        .pieces()
        .find(|piece| piece.color == color && piece.kind == PieceKind::King)
        .ok_or(ChessError::MissingKing { color })
}

/// Whether the king of `color` is attacked in `game_state`, regardless of
/// whose turn it is.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    let king = find_king(game_state, color)?;
    let attackers = game_state.active_pieces(color.opposite());
    let attacker_moves = pseudo_legal_moves(&attackers, game_state);
    Ok(is_square_attacked(king.square, &attacker_moves, &attackers))
}
