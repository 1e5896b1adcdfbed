//! Core value types shared by every layer of the rules engine.
//!
//! Color-dependent behavior is expressed as small lookup functions keyed by
//! the enum value rather than per-variant overrides.

use crate::game_state::board_geometry::{EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::piece::Piece;

/// Board square index (`0..=63`, `0 == a1`, `63 == h8`).
pub type Square = u8;

/// Side to move. `Light` moves first and owns ranks 1 and 2 at the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Sign applied to pawn offsets: Light advances toward higher indices.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Whether a pawn of this color on `square` still stands on its home rank.
    #[inline]
    pub const fn is_pawn_home_square(self, square: Square) -> bool {
        match self {
            Color::Light => SECOND_RANK[square as usize],
            Color::Dark => SEVENTH_RANK[square as usize],
        }
    }

    /// Whether a pawn of this color arriving on `square` promotes.
    #[inline]
    pub const fn is_promotion_square(self, square: Square) -> bool {
        match self {
            Color::Light => EIGHTH_RANK[square as usize],
            Color::Dark => FIRST_RANK[square as usize],
        }
    }

    /// Rank holding this color's king and rooks at the start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

/// Piece kind (color is stored separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i64 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /// Upper-case notation letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}
