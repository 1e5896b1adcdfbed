//! Move execution.
//!
//! Every move builds a brand-new [`GameState`]: the pieces it does not touch
//! are copied, the moved piece is re-created at its destination, and the turn
//! passes to the mover's opponent. Any en-passant target not set here is cleared.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{GameState, Piece, PieceKind};
use crate::game_state::game_state::GameStateBuilder;
use crate::moves::chess_move::ChessMove;

pub fn apply_move(game_state: &GameState, mv: &ChessMove) -> ChessResult<GameState> {
    let mover = mv.moving_piece().ok_or(ChessError::NullMoveExecution)?;
    let next_side = mover.color.opposite();

    let next = match mv {
        ChessMove::Null => return Err(ChessError::NullMoveExecution),
        ChessMove::Normal { piece, to } => {
            ensure_on_board(game_state, *piece)?;
            GameStateBuilder::copy_except(game_state, &[piece.square])
                .set_piece(piece.moved_to(*to))
                .set_side_to_move(next_side)
                .build()
        }
        ChessMove::Capture {
            piece,
            to,
            captured,
        } => {
            ensure_on_board(game_state, *piece)?;
            ensure_on_board(game_state, *captured)?;
            GameStateBuilder::copy_except(game_state, &[piece.square])
                .set_piece(piece.moved_to(*to))
                .set_side_to_move(next_side)
                .build()
        }
        ChessMove::PawnJump { piece, to } => {
            ensure_on_board(game_state, *piece)?;
            let moved = piece.moved_to(*to);
            GameStateBuilder::copy_except(game_state, &[piece.square])
                .set_piece(moved)
                .set_en_passant_pawn(moved)
                .set_side_to_move(next_side)
                .build()
        }
        ChessMove::EnPassant { piece, to, captured } => {
            ensure_on_board(game_state, *piece)?;
            ensure_on_board(game_state, *captured)?;
            GameStateBuilder::copy_except(game_state, &[piece.square, captured.square])
                .set_piece(piece.moved_to(*to))
                .set_side_to_move(next_side)
                .build()
        }
        ChessMove::KingSideCastle {
            king,
            to,
            rook,
            rook_to,
        }
        | ChessMove::QueenSideCastle {
            king,
            to,
            rook,
            rook_to,
        } => {
            ensure_on_board(game_state, *king)?;
            ensure_on_board(game_state, *rook)?;
            GameStateBuilder::copy_except(game_state, &[king.square, rook.square])
                .set_piece(king.moved_to(*to))
                .set_piece(Piece::with_moved(PieceKind::Rook, rook.color, *rook_to, true))
                .set_castled(king.color)
                .set_side_to_move(next_side)
                .build()
        }
        ChessMove::Promotion { inner, promoted_to } => {
            apply_promotion(game_state, inner, *promoted_to)?
        }
    };

    tracing::trace!(mv = %mv, "executed move");
    Ok(next)
}

fn apply_promotion(
    game_state: &GameState,
    inner: &ChessMove,
    promoted_to: PieceKind,
) -> ChessResult<GameState> {
    let pawn = inner.moving_piece().ok_or(ChessError::NullMoveExecution)?;
    if pawn.kind != PieceKind::Pawn {
        return Err(ChessError::PromotionOfNonPawn { kind: pawn.kind });
    }
    if matches!(promoted_to, PieceKind::Pawn | PieceKind::King) {
        return Err(ChessError::InvalidPromotion { kind: promoted_to });
    }

    let after_pawn_move = apply_move(game_state, inner)?;
    let destination = inner.to().ok_or(ChessError::NullMoveExecution)?;

    let promoted = GameStateBuilder::copy_except(&after_pawn_move, &[destination])
        .set_piece(Piece::with_moved(promoted_to, pawn.color, destination, true))
        .set_side_to_move(after_pawn_move.side_to_move())
        .build();
    Ok(promoted)
}

fn ensure_on_board(game_state: &GameState, piece: Piece) -> ChessResult<()> {
    if game_state.piece_at(piece.square) == Some(piece) {
        Ok(())
    } else {
        Err(ChessError::StaleMove {
            square: piece.square,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind};
    use crate::moves::chess_move::ChessMove;

    #[test]
    fn null_move_cannot_be_executed() {
        let game = GameState::new_game();
        assert_eq!(
            apply_move(&game, &ChessMove::Null),
            Err(ChessError::NullMoveExecution)
        );
    }

    #[test]
    fn pawn_jump_sets_en_passant_pawn_and_next_move_clears_it() {
        let game = GameState::new_game();
        let pawn = game.piece_at(12).expect("e2 pawn");
        let after_jump = apply_move(&game, &ChessMove::PawnJump { piece: pawn, to: 28 })
            .expect("jump should apply");

        assert_eq!(after_jump.en_passant_pawn(), Some(pawn.moved_to(28)));
        assert_eq!(after_jump.side_to_move(), Color::Dark);

        let knight = after_jump.piece_at(62).expect("g8 knight");
        let after_reply = apply_move(&after_jump, &ChessMove::Normal { piece: knight, to: 45 })
            .expect("reply should apply");
        assert_eq!(after_reply.en_passant_pawn(), None);
    }

    #[test]
    fn capture_replaces_the_victim_and_reduces_piece_count() {
        let game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - -")
            .expect("test FEN should parse");
        let pawn = game.piece_at(28).expect("e4 pawn");
        let victim = game.piece_at(35).expect("d5 pawn");
        let next = apply_move(
            &game,
            &ChessMove::Capture {
                piece: pawn,
                to: 35,
                captured: victim,
            },
        )
        .expect("capture should apply");

        assert_eq!(next.piece_count(), game.piece_count() - 1);
        assert_eq!(next.piece_at(35).map(|p| p.color), Some(Color::Light));
        assert!(!next.is_occupied(28));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6")
            .expect("test FEN should parse");
        let pawn = game.piece_at(36).expect("e5 pawn");
        let victim = game.en_passant_pawn().expect("d5 pawn is the en-passant target");
        let next = apply_move(
            &game,
            &ChessMove::EnPassant {
                piece: pawn,
                to: 43,
                captured: victim,
            },
        )
        .expect("en passant should apply");

        assert!(!next.is_occupied(35));
        assert!(!next.is_occupied(36));
        assert_eq!(next.piece_at(43).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(next.piece_count(), game.piece_count() - 1);
    }

    #[test]
    fn castle_moves_king_and_rook_and_records_it() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K -")
            .expect("test FEN should parse");
        let king = game.piece_at(4).expect("e1 king");
        let rook = game.piece_at(7).expect("h1 rook");
        let next = apply_move(
            &game,
            &ChessMove::KingSideCastle {
                king,
                to: 6,
                rook,
                rook_to: 5,
            },
        )
        .expect("castle should apply");

        assert_eq!(next.piece_at(6), Some(king.moved_to(6)));
        assert_eq!(
            next.piece_at(5),
            Some(Piece::with_moved(PieceKind::Rook, Color::Light, 5, true))
        );
        assert!(!next.is_occupied(4));
        assert!(!next.is_occupied(7));
        assert!(next.has_castled(Color::Light));
        assert!(!next.has_castled(Color::Dark));
    }

    #[test]
    fn promotion_replaces_pawn_with_new_piece() {
        let game = GameState::from_fen("7k/4P3/8/8/8/8/8/K7 w - -").expect("test FEN should parse");
        let pawn = game.piece_at(52).expect("e7 pawn");
        let next = apply_move(
            &game,
            &ChessMove::Promotion {
                inner: Box::new(ChessMove::Normal { piece: pawn, to: 60 }),
                promoted_to: PieceKind::Knight,
            },
        )
        .expect("promotion should apply");

        assert_eq!(
            next.piece_at(60),
            Some(Piece::with_moved(PieceKind::Knight, Color::Light, 60, true))
        );
        assert_eq!(next.side_to_move(), Color::Dark);
        assert_eq!(next.piece_count(), 3);
    }

    #[test]
    fn promoting_a_non_pawn_is_fatal() {
        let game = GameState::from_fen("7k/4R3/8/8/8/8/8/K7 w - -").expect("test FEN should parse");
        let rook = game.piece_at(52).expect("e7 rook");
        let result = apply_move(
            &game,
            &ChessMove::Promotion {
                inner: Box::new(ChessMove::Normal { piece: rook, to: 60 }),
                promoted_to: PieceKind::Queen,
            },
        );
        assert_eq!(
            result,
            Err(ChessError::PromotionOfNonPawn {
                kind: PieceKind::Rook
            })
        );
    }

    #[test]
    fn capture_of_a_piece_no_longer_on_the_board_is_rejected() {
        let game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - -")
            .expect("test FEN should parse");
        let pawn = game.piece_at(28).expect("e4 pawn");
        let ghost = Piece::new(PieceKind::Knight, Color::Dark, 35);
        assert_eq!(
            apply_move(
                &game,
                &ChessMove::Capture {
                    piece: pawn,
                    to: 35,
                    captured: ghost,
                },
            ),
            Err(ChessError::StaleMove { square: 35 })
        );
    }

    #[test]
    fn move_from_another_position_is_rejected() {
        let game = GameState::new_game();
        let ghost = Piece::new(PieceKind::Queen, Color::Light, 27);
        assert_eq!(
            apply_move(&game, &ChessMove::Normal { piece: ghost, to: 35 }),
            Err(ChessError::StaleMove { square: 27 })
        );
    }
}
