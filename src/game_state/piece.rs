//! Immutable piece values.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// A piece standing on a square.
///
/// Equality is structural: two pieces are equal when kind, color, square and
/// moved flag all agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn with_moved(
        kind: PieceKind,
        color: Color,
        square: Square,
        has_moved: bool,
    ) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved,
        }
    }

    /// The value this piece becomes after moving to `destination`.
    #[inline]
    pub const fn moved_to(self, destination: Square) -> Self {
        Self {
            square: destination,
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.kind.value()
    }

    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.color != other.color
    }
}
