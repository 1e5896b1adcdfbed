//! Move variants.
//!
//! A move names the piece that moves and where it goes. The snapshot it was
//! generated from is not stored; execution takes it explicitly (see
//! [`apply_move`](crate::move_generation::legal_move_apply::apply_move)).

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChessMove {
    /// Quiet move to an empty square, including single pawn pushes.
    Normal { piece: Piece, to: Square },
    /// Capture on the destination square.
    Capture {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    /// Pawn advancing two squares from its home rank.
    PawnJump { piece: Piece, to: Square },
    /// Pawn capturing the pawn that just double-stepped past it.
    EnPassant {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
    KingSideCastle {
        king: Piece,
        to: Square,
        rook: Piece,
        rook_to: Square,
    },
    QueenSideCastle {
        king: Piece,
        to: Square,
        rook: Piece,
        rook_to: Square,
    },
    /// A pawn move onto the last rank, replacing the pawn with `promoted_to`.
    Promotion {
        inner: Box<ChessMove>,
        promoted_to: PieceKind,
    },
    /// Placeholder for "no move matched"; never executable.
    Null,
}

impl ChessMove {
    /// The piece that moves, or `None` for the null move.
    pub fn moving_piece(&self) -> Option<Piece> {
        match self {
            ChessMove::Normal { piece, .. }
            | ChessMove::Capture { piece, .. }
            | ChessMove::PawnJump { piece, .. }
            | ChessMove::EnPassant { piece, .. } => Some(*piece),
            ChessMove::KingSideCastle { king, .. } | ChessMove::QueenSideCastle { king, .. } => {
                Some(*king)
            }
            ChessMove::Promotion { inner, .. } => inner.moving_piece(),
            ChessMove::Null => None,
        }
    }

    pub fn from(&self) -> Option<Square> {
        self.moving_piece().map(|piece| piece.square)
    }

    pub fn to(&self) -> Option<Square> {
        match self {
            ChessMove::Normal { to, .. }
            | ChessMove::Capture { to, .. }
            | ChessMove::PawnJump { to, .. }
            | ChessMove::EnPassant { to, .. }
            | ChessMove::KingSideCastle { to, .. }
            | ChessMove::QueenSideCastle { to, .. } => Some(*to),
            ChessMove::Promotion { inner, .. } => inner.to(),
            ChessMove::Null => None,
        }
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match self {
            ChessMove::Capture { captured, .. } | ChessMove::EnPassant { captured, .. } => {
                Some(*captured)
            }
            ChessMove::Promotion { inner, .. } => inner.captured_piece(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(
            self,
            ChessMove::KingSideCastle { .. } | ChessMove::QueenSideCastle { .. }
        )
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self {
            ChessMove::Promotion { promoted_to, .. } => Some(*promoted_to),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ChessMove::Null)
    }

    /// Coordinate notation such as `e2e4` or `e7e8q`; `0000` for the null move.
    pub fn to_long_algebraic(&self) -> String {
        let (Some(from), Some(to)) = (self.from(), self.to()) else {
            return "0000".to_owned();
        };
        let mut out = format!("{}{}", square_name(from), square_name(to));
        if let Some(kind) = self.promotion_kind() {
            out.push(kind.letter().to_ascii_lowercase());
        }
        out
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessMove::Normal { piece, to } => match piece.kind {
                PieceKind::Pawn => write!(f, "{}", square_name(*to)),
                kind => write!(f, "{}{}", kind.letter(), square_name(*to)),
            },
            ChessMove::Capture { piece, to, .. } | ChessMove::EnPassant { piece, to, .. } => {
                match piece.kind {
                    PieceKind::Pawn => {
                        let origin = square_name(piece.square);
                        write!(f, "{}x{}", &origin[..1], square_name(*to))
                    }
                    kind => write!(f, "{}x{}", kind.letter(), square_name(*to)),
                }
            }
            ChessMove::PawnJump { to, .. } => write!(f, "{}", square_name(*to)),
            ChessMove::KingSideCastle { .. } => f.write_str("O-O"),
            ChessMove::QueenSideCastle { .. } => f.write_str("O-O-O"),
            ChessMove::Promotion { inner, promoted_to } => {
                write!(f, "{}={}", inner, promoted_to.letter())
            }
            ChessMove::Null => f.write_str("--"),
        }
    }
}
