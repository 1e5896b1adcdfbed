//! Per-side view of a position.
//!
//! A [`Player`] is derived from a [`GameState`] on demand and never cached on
//! it. It gathers the side's pieces, its candidate moves plus any available
//! castles, and whether its king is attacked. Legality is decided lazily in
//! [`Player::make_move`] by executing the move and inspecting the result.

use std::cell::OnceCell;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{king_side_castle, queen_side_castle, CastleLayout};
use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{find_king, is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::move_generation::move_transition::{MoveStatus, MoveTransition};
use crate::moves::chess_move::ChessMove;

#[derive(Debug)]
pub struct Player<'a> {
    game_state: &'a GameState,
    color: Color,
    king: Piece,
    active_pieces: Vec<Piece>,
    legal_moves: Vec<ChessMove>,
    is_in_check: bool,
    escape: OnceCell<bool>,
}

impl<'a> Player<'a> {
    pub fn new(game_state: &'a GameState, color: Color) -> ChessResult<Self> {
        let king = find_king(game_state, color)?;
        let active_pieces = game_state.active_pieces(color);
        let opponent_pieces = game_state.active_pieces(color.opposite());
        let opponent_moves = pseudo_legal_moves(&opponent_pieces, game_state);

        let is_in_check = is_square_attacked(king.square, &opponent_moves, &opponent_pieces);

        let mut legal_moves = pseudo_legal_moves(&active_pieces, game_state);
        if !is_in_check {
            let layouts = [(king_side_castle(color), true), (queen_side_castle(color), false)];
            for (layout, king_side) in layouts {
                if let Some(castle) = castle_move(
                    game_state,
                    king,
                    layout,
                    king_side,
                    &opponent_moves,
                    &opponent_pieces,
                ) {
                    legal_moves.push(castle);
                }
            }
        }

        Ok(Self {
            game_state,
            color,
            king,
            active_pieces,
            legal_moves,
            is_in_check,
            escape: OnceCell::new(),
        })
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.king
    }

    #[inline]
    pub fn active_pieces(&self) -> &[Piece] {
        &self.active_pieces
    }

    /// Candidate moves plus available castles. Entries may still leave the
    /// king attacked; [`Player::make_move`] filters those out.
    #[inline]
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.is_in_check
    }

    #[inline]
    pub fn has_castled(&self) -> bool {
        self.game_state.has_castled(self.color)
    }

    #[inline]
    pub fn is_move_legal(&self, mv: &ChessMove) -> bool {
        self.legal_moves.contains(mv)
    }

    /// Try `mv` against this view's position.
    pub fn make_move(&self, mv: &ChessMove) -> ChessResult<MoveTransition> {
        if !self.is_move_legal(mv) {
            return Ok(MoveTransition::rejected(
                self.game_state,
                mv.clone(),
                MoveStatus::IllegalMove,
            ));
        }

        let candidate = apply_move(self.game_state, mv)?;
        if is_king_in_check(&candidate, self.color)? {
            return Ok(MoveTransition::rejected(
                self.game_state,
                mv.clone(),
                MoveStatus::LeavesPlayerInCheck,
            ));
        }

        Ok(MoveTransition::done(candidate, mv.clone()))
    }

    /// Whether any legal move completes. Computed once per view.
    pub fn has_escape_moves(&self) -> ChessResult<bool> {
        if let Some(known) = self.escape.get() {
            return Ok(*known);
        }

        let mut found = false;
        for mv in &self.legal_moves {
            if self.make_move(mv)?.status.is_done() {
                found = true;
                break;
            }
        }
        let _ = self.escape.set(found);
        Ok(found)
    }

    pub fn is_checkmate(&self) -> ChessResult<bool> {
        Ok(self.is_in_check && !self.has_escape_moves()?)
    }

    pub fn is_stalemate(&self) -> ChessResult<bool> {
        Ok(!self.is_in_check && !self.has_escape_moves()?)
    }
}

fn castle_move(
    game_state: &GameState,
    king: Piece,
    layout: &CastleLayout,
    king_side: bool,
    opponent_moves: &[ChessMove],
    opponent_pieces: &[Piece],
) -> Option<ChessMove> {
    if king.has_moved || king.square != layout.king_home {
        return None;
    }
    if layout.must_be_empty.iter().any(|&sq| game_state.is_occupied(sq)) {
        return None;
    }

    let rook = game_state
        .piece_at(layout.rook_home)
        .filter(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        })?;

    if layout
        .must_be_safe
        .iter()
        .any(|&sq| is_square_attacked(sq, opponent_moves, opponent_pieces))
    {
        return None;
    }

    let mv = if king_side {
        ChessMove::KingSideCastle {
            king,
            to: layout.king_to,
            rook,
            rook_to: layout.rook_to,
        }
    } else {
        ChessMove::QueenSideCastle {
            king,
            to: layout.king_to,
            rook,
            rook_to: layout.rook_to,
        }
    };
    Some(mv)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::errors::ChessError;

    fn castles(game: &GameState) -> Vec<ChessMove> {
        let player = game.current_player().expect("position should have kings");
        player
            .legal_moves()
            .iter()
            .filter(|mv| mv.is_castle())
            .cloned()
            .collect()
    }

    #[test]
    fn start_position_has_twenty_moves_and_no_check() {
        let game = GameState::new_game();
        let player = game.current_player().expect("start has kings");
        assert_eq!(player.legal_moves().len(), 20);
        assert_eq!(player.active_pieces().len(), 16);
        assert_eq!(player.king().square, 4);
        assert!(!player.is_in_check());
        assert_eq!(player.is_checkmate(), Ok(false));
        assert_eq!(player.is_stalemate(), Ok(false));
    }

    #[test]
    fn both_castles_available_with_clear_paths() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -")
            .expect("test FEN should parse");
        let moves = castles(&game);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| matches!(mv, ChessMove::KingSideCastle { to: 6, .. })));
        assert!(moves.iter().any(|mv| matches!(mv, ChessMove::QueenSideCastle { to: 2, .. })));

        let dark = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq -")
            .expect("test FEN should parse");
        assert_eq!(castles(&dark).len(), 2);
    }

    #[test]
    fn castling_needs_unmoved_king_and_rook() {
        // No rights in the FEN means both king and rooks are marked as moved.
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - -")
            .expect("test FEN should parse");
        assert!(castles(&game).is_empty());

        let only_king_side = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w K -")
            .expect("test FEN should parse");
        let moves = castles(&only_king_side);
        assert_eq!(moves.len(), 1);
        assert!(matches!(moves[0], ChessMove::KingSideCastle { .. }));
    }

    fn play(mut game: GameState, moves: &[(u8, u8)]) -> GameState {
        for &(from, to) in moves {
            let transition = game.attempt_move(from, to, None).expect("attempt should run");
            assert_eq!(transition.status, MoveStatus::Done, "{from}->{to}");
            game = transition.game_state;
        }
        game
    }

    #[test]
    fn king_that_moved_and_returned_cannot_castle() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -")
            .expect("test FEN should parse");
        let back_home = play(game, &[(4, 5), (56, 48), (5, 4), (48, 56)]);

        assert_eq!(back_home.piece_at(4).map(|king| king.has_moved), Some(true));
        assert!(castles(&back_home).is_empty());
    }

    #[test]
    fn rook_that_moved_and_returned_cannot_castle_on_its_side() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -")
            .expect("test FEN should parse");
        let back_home = play(game, &[(7, 15), (56, 48), (15, 7), (48, 56)]);

        let moves = castles(&back_home);
        assert_eq!(moves.len(), 1);
        assert!(matches!(moves[0], ChessMove::QueenSideCastle { to: 2, .. }));
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ -")
            .expect("test FEN should parse");
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn castling_through_attacked_square_is_unavailable() {
        // Dark rook on f8 covers f1.
        let game = GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K -")
            .expect("test FEN should parse");
        assert!(castles(&game).is_empty());

        // b1 may be attacked on the queen side; only c1 and d1 matter.
        let b_file = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q -")
            .expect("test FEN should parse");
        assert_eq!(castles(&b_file).len(), 1);
    }

    #[test]
    fn castling_out_of_check_is_unavailable() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/8/4K2R w K -")
            .expect("test FEN should parse");
        let player = game.current_player().expect("kings present");
        assert!(player.is_in_check());
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn move_into_check_is_rejected() {
        let game = GameState::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - -")
            .expect("test FEN should parse");
        let player = game.current_player().expect("kings present");
        let bishop = game.piece_at(12).expect("e2 bishop");
        let pinned_move = ChessMove::Normal { piece: bishop, to: 21 };

        let transition = player.make_move(&pinned_move).expect("attempt should run");
        assert_eq!(transition.status, MoveStatus::LeavesPlayerInCheck);
        assert_eq!(transition.game_state, game);
    }

    #[test]
    fn move_not_in_legal_set_is_illegal() {
        let game = GameState::new_game();
        let player = game.current_player().expect("kings present");
        let rook = game.piece_at(0).expect("a1 rook");
        let transition = player
            .make_move(&ChessMove::Normal { piece: rook, to: 40 })
            .expect("attempt should run");
        assert_eq!(transition.status, MoveStatus::IllegalMove);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for (from, to) in [(13, 21), (52, 36), (14, 30), (59, 31)] {
            let transition = game.attempt_move(from, to, None).expect("attempt should run");
            assert_eq!(transition.status, MoveStatus::Done, "{from}->{to}");
            game = transition.game_state;
        }

        let player = game.current_player().expect("kings present");
        assert!(player.is_in_check());
        assert_eq!(player.is_checkmate(), Ok(true));
        assert_eq!(player.is_stalemate(), Ok(false));
        assert_eq!(game.is_checkmate(), Ok(true));
        assert!(player
            .legal_moves()
            .iter()
            .all(|mv| !player.make_move(mv).expect("attempt runs").status.is_done()));
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - -")
            .expect("test FEN should parse");
        let player = game.current_player().expect("kings present");
        assert!(!player.is_in_check());
        assert_eq!(player.is_stalemate(), Ok(true));
        assert_eq!(player.is_checkmate(), Ok(false));
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - -")
            .expect("test FEN should parse");
        let after_jump = game.attempt_move(51, 35, None).expect("attempt should run");
        assert_eq!(after_jump.status, MoveStatus::Done);

        let light = after_jump.game_state.current_player().expect("kings present");
        assert!(light
            .legal_moves()
            .iter()
            .any(|mv| matches!(mv, ChessMove::EnPassant { to: 43, .. })));

        // Spend a tempo on each side; the capture is gone.
        let waited = after_jump
            .game_state
            .attempt_move(4, 5, None)
            .and_then(|t| t.game_state.attempt_move(60, 61, None))
            .expect("attempts should run");
        assert_eq!(waited.status, MoveStatus::Done);
        let light = waited.game_state.current_player().expect("kings present");
        assert!(!light
            .legal_moves()
            .iter()
            .any(|mv| matches!(mv, ChessMove::EnPassant { .. })));
    }

    #[test]
    fn missing_king_is_reported() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K3 b - -").expect("test FEN should parse");
        assert_eq!(
            game.current_player().map(|p| p.color()),
            Err(ChessError::MissingKing { color: Color::Dark })
        );
    }

    #[test]
    fn random_playouts_preserve_board_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..4 {
            let mut game = GameState::new_game();
            for _ in 0..40 {
                let done: Vec<_> = {
                    let player = game.current_player().expect("kings are never captured");
                    player
                        .legal_moves()
                        .iter()
                        .filter_map(|mv| player.make_move(mv).ok())
                        .filter(|t| t.status.is_done())
                        .collect()
                };
                let Some(next) = done.choose(&mut rng) else {
                    break;
                };

                let before = game.piece_count();
                let after = next.game_state.piece_count();
                let expected = before - usize::from(next.mv.is_capture());
                assert_eq!(after, expected, "{}", next.mv);
                assert_eq!(next.game_state.side_to_move(), game.side_to_move().opposite());
                for color in [Color::Light, Color::Dark] {
                    let kings = next
                        .game_state
                        .active_pieces(color)
                        .iter()
                        .filter(|p| p.kind == PieceKind::King)
                        .count();
                    assert_eq!(kings, 1);
                }
                let in_check = is_king_in_check(&next.game_state, game.side_to_move())
                    .expect("king present");
                assert!(!in_check);

                game = next.game_state.clone();
            }
        }
    }
}
