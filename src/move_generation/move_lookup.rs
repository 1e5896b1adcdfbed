//! Coordinate-based move lookup.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::player::Player;
use crate::moves::chess_move::ChessMove;

/// Find the member of `player`'s legal-move set going from `from` to `to`.
///
/// With `promotion` given, promotion moves must promote to that kind while
/// other moves match on squares alone. Without it the first match wins, which
/// for a promoting pawn is the queen. Returns [`ChessMove::Null`] when nothing
/// matches.
pub fn find_move(
    player: &Player<'_>,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessMove {
    player
        .legal_moves()
        .iter()
        .find(|mv| {
            mv.from() == Some(from)
                && mv.to() == Some(to)
                && match (promotion, mv.promotion_kind()) {
                    (Some(wanted), Some(kind)) => wanted == kind,
                    _ => true,
                }
        })
        .cloned()
        .unwrap_or(ChessMove::Null)
}
