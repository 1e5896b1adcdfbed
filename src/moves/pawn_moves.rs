//! Pawn candidate moves.
//!
//! Four templates (single push, double push, two diagonal captures), each
//! multiplied by the color's direction. Moves reaching the last rank expand
//! into one promotion per [`PROMOTION_KINDS`] entry.

use crate::game_state::board_geometry::{offset_square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{Color, GameState, Piece, Square, PROMOTION_KINDS};
use crate::moves::chess_move::ChessMove;

pub const PAWN_OFFSETS: [i32; 4] = [8, 16, 7, 9];

pub fn candidate_moves(piece: Piece, game_state: &GameState, out: &mut Vec<ChessMove>) {
    let color = piece.color;
    let direction = color.direction();

    for offset in PAWN_OFFSETS {
        let Some(to) = offset_square(piece.square, offset * direction) else {
            continue;
        };

        match offset {
            8 => {
                if !game_state.is_occupied(to) {
                    push_with_promotions(ChessMove::Normal { piece, to }, color, to, out);
                }
            }
            16 => {
                if piece.has_moved || !color.is_pawn_home_square(piece.square) {
                    continue;
                }
                let between = (piece.square as i32 + 8 * direction) as Square;
                if !game_state.is_occupied(between) && !game_state.is_occupied(to) {
                    out.push(ChessMove::PawnJump { piece, to });
                }
            }
            _ => {
                if is_diagonal_exclusion(piece.square, color, offset) {
                    continue;
                }
                match game_state.piece_at(to) {
                    Some(occupant) if occupant.is_enemy_of(piece) => push_with_promotions(
                        ChessMove::Capture {
                            piece,
                            to,
                            captured: occupant,
                        },
                        color,
                        to,
                        out,
                    ),
                    Some(_) => {}
                    None => {
                        if let Some(captured) = en_passant_victim(piece, game_state, offset) {
                            out.push(ChessMove::EnPassant { piece, to, captured });
                        }
                    }
                }
            }
        }
    }
}

/// Diagonal squares `pawn` threatens, occupied or not.
pub fn pawn_attack_squares(pawn: Piece) -> impl Iterator<Item = Square> {
    let direction = pawn.color.direction();
    [7, 9].into_iter().filter_map(move |offset| {
        if is_diagonal_exclusion(pawn.square, pawn.color, offset) {
            None
        } else {
            offset_square(pawn.square, offset * direction)
        }
    })
}

/// The `7` diagonal drifts toward the a-file for Light and the h-file for
/// Dark; the `9` diagonal the other way.
#[inline]
const fn is_diagonal_exclusion(square: Square, color: Color, offset: i32) -> bool {
    let sq = square as usize;
    match (offset, color) {
        (7, Color::Light) | (9, Color::Dark) => FIRST_COLUMN[sq],
        (7, Color::Dark) | (9, Color::Light) => EIGHTH_COLUMN[sq],
        _ => false,
    }
}

/// The en-passant pawn, when it stands beside `pawn` on the side of the
/// `offset` diagonal.
fn en_passant_victim(pawn: Piece, game_state: &GameState, offset: i32) -> Option<Piece> {
    let target = game_state.en_passant_pawn()?;
    let direction = pawn.color.direction();
    let beside = if offset == 7 {
        pawn.square as i32 - direction
    } else {
        pawn.square as i32 + direction
    };
    (target.square as i32 == beside && target.is_enemy_of(pawn)).then_some(target)
}

fn push_with_promotions(mv: ChessMove, color: Color, to: Square, out: &mut Vec<ChessMove>) {
    if color.is_promotion_square(to) {
        for promoted_to in PROMOTION_KINDS {
            out.push(ChessMove::Promotion {
                inner: Box::new(mv.clone()),
                promoted_to,
            });
        }
    } else {
        out.push(mv);
    }
}
