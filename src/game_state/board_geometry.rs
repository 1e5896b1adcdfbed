//! Static per-square predicates used by the move generators.
//!
//! Offsets are applied to raw square indices, so every stepping or sliding
//! generator consults these tables to refuse moves that would wrap from one
//! edge of the board to the other.

use crate::game_state::chess_types::Square;

pub const NUM_SQUARES: usize = 64;

pub const FIRST_COLUMN: [bool; NUM_SQUARES] = column_table(0);
pub const SECOND_COLUMN: [bool; NUM_SQUARES] = column_table(1);
pub const SEVENTH_COLUMN: [bool; NUM_SQUARES] = column_table(6);
pub const EIGHTH_COLUMN: [bool; NUM_SQUARES] = column_table(7);

pub const FIRST_RANK: [bool; NUM_SQUARES] = rank_table(0);
pub const SECOND_RANK: [bool; NUM_SQUARES] = rank_table(1);
pub const SEVENTH_RANK: [bool; NUM_SQUARES] = rank_table(6);
pub const EIGHTH_RANK: [bool; NUM_SQUARES] = rank_table(7);

const fn column_table(file: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = 0usize;

    while sq < NUM_SQUARES {
        table[sq] = sq % 8 == file;
        sq += 1;
    }

    table
}

const fn rank_table(rank: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = 0usize;

    while sq < NUM_SQUARES {
        table[sq] = sq / 8 == rank;
        sq += 1;
    }

    table
}

#[inline]
pub const fn is_valid_square(coordinate: i32) -> bool {
    coordinate >= 0 && coordinate < NUM_SQUARES as i32
}

/// Square reached by `offset`, or `None` when it falls off the top or bottom.
///
/// Horizontal wraparound is not detected here; callers check the column
/// tables first.
#[inline]
pub const fn offset_square(square: Square, offset: i32) -> Option<Square> {
    let target = square as i32 + offset;
    if is_valid_square(target) {
        Some(target as Square)
    } else {
        None
    }
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}
