//! Canonical chess-rule constants.
//!
//! Starting layout and the castling geometry for both sides, stored as data
//! tables keyed by [`Color`].

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Squares and preconditions for one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleLayout {
    pub king_home: Square,
    pub king_to: Square,
    pub rook_home: Square,
    pub rook_to: Square,
    /// Squares between king and rook.
    pub must_be_empty: &'static [Square],
    /// Squares the king crosses or lands on.
    pub must_be_safe: &'static [Square],
}

const LIGHT_KING_SIDE: CastleLayout = CastleLayout {
    king_home: 4,
    king_to: 6,
    rook_home: 7,
    rook_to: 5,
    must_be_empty: &[5, 6],
    must_be_safe: &[5, 6],
};

const LIGHT_QUEEN_SIDE: CastleLayout = CastleLayout {
    king_home: 4,
    king_to: 2,
    rook_home: 0,
    rook_to: 3,
    must_be_empty: &[1, 2, 3],
    must_be_safe: &[3, 2],
};

const DARK_KING_SIDE: CastleLayout = CastleLayout {
    king_home: 60,
    king_to: 62,
    rook_home: 63,
    rook_to: 61,
    must_be_empty: &[61, 62],
    must_be_safe: &[61, 62],
};

const DARK_QUEEN_SIDE: CastleLayout = CastleLayout {
    king_home: 60,
    king_to: 58,
    rook_home: 56,
    rook_to: 59,
    must_be_empty: &[57, 58, 59],
    must_be_safe: &[59, 58],
};

#[inline]
pub const fn king_side_castle(color: Color) -> &'static CastleLayout {
    match color {
        Color::Light => &LIGHT_KING_SIDE,
        Color::Dark => &DARK_KING_SIDE,
    }
}

#[inline]
pub const fn queen_side_castle(color: Color) -> &'static CastleLayout {
    match color {
        Color::Light => &LIGHT_QUEEN_SIDE,
        Color::Dark => &DARK_QUEEN_SIDE,
    }
}
