//! FEN-to-GameState parser.
//!
//! FEN carries no per-piece move history, so moved flags are derived: kings
//! and rooks count as unmoved only where a castling right names them, pawns
//! only on their home rank, and other pieces only on their starting square.
//! The en-passant field identifies the pawn that just double-stepped. Clock
//! fields are optional and ignored.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_geometry::rank_of;
use crate::game_state::chess_rules::{king_side_castle, queen_side_castle, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameStateBuilder;
use crate::utils::algebraic::algebraic_to_square;

/// Castling rights named in the FEN, indexed by color then `[king side, queen side]`.
type CastlingRights = [[bool; 2]; 2];

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    // Halfmove clock and fullmove number.
    if parts.nth(2).is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;

    let mut builder = GameStateBuilder::new();
    for (kind, color, square) in parse_board(board_part)? {
        let has_moved = !starts_unmoved(kind, color, square, &rights);
        builder.set_piece(Piece::with_moved(kind, color, square, has_moved));
    }
    builder.set_side_to_move(side_to_move);

    let partial = builder.build();
    if let Some(pawn) = parse_en_passant_pawn(en_passant_part, &partial, side_to_move)? {
        builder.set_en_passant_pawn(pawn);
    }

    Ok(builder.build())
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Vec<(PieceKind, Color, Square)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::with_capacity(32);
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            pieces.push((kind, color, board_rank * 8 + file));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(pieces)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = [[false; 2]; 2];
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights[Color::Light.index()][0] = true,
            'Q' => rights[Color::Light.index()][1] = true,
            'k' => rights[Color::Dark.index()][0] = true,
            'q' => rights[Color::Dark.index()][1] = true,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn starts_unmoved(kind: PieceKind, color: Color, square: Square, rights: &CastlingRights) -> bool {
    let [king_side, queen_side] = rights[color.index()];
    match kind {
        PieceKind::Pawn => color.is_pawn_home_square(square),
        PieceKind::King => square == king_side_castle(color).king_home && (king_side || queen_side),
        PieceKind::Rook => {
            (king_side && square == king_side_castle(color).rook_home)
                || (queen_side && square == queen_side_castle(color).rook_home)
        }
        _ => {
            square / 8 == color.back_rank()
                && BACK_RANK_LAYOUT[(square % 8) as usize] == kind
        }
    }
}

/// The enemy pawn standing just beyond the en-passant target square.
fn parse_en_passant_pawn(
    en_passant_part: &str,
    game_state: &GameState,
    side_to_move: Color,
) -> ChessResult<Option<Piece>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let jumper = side_to_move.opposite();
    let expected_rank = match jumper {
        Color::Light => 2,
        Color::Dark => 5,
    };
    if rank_of(target) != expected_rank {
        return Err(ChessError::InvalidFen(format!(
            "en-passant square {en_passant_part} is not on the expected rank"
        )));
    }
    let pawn_square = target as i32 + 8 * jumper.direction();

    let pawn = u8::try_from(pawn_square)
        .ok()
        .and_then(|square| game_state.piece_at(square))
        .filter(|piece| piece.kind == PieceKind::Pawn && piece.color == jumper)
        .ok_or_else(|| {
            ChessError::InvalidFen(format!("no pawn to capture en passant on {en_passant_part}"))
        })?;

    Ok(Some(pawn))
}
