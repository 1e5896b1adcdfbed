//! Static position evaluation.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so alternate heuristics can
//! be swapped in without touching the search. Scores are from Light's point of
//! view: positive favors Light, negative favors Dark.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::player::Player;

pub const CHECK_BONUS: i64 = 50;
pub const CHECKMATE_BONUS: i64 = 100_000;
pub const CASTLE_BONUS: i64 = 60;

pub trait BoardScorer: Send + Sync {
    /// `depth` is the remaining search depth; mates found with more depth
    /// left score higher.
    fn score(&self, game_state: &GameState, depth: u8) -> ChessResult<i64>;
}

/// Material, mobility, check, mate and castling terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    fn score_side(player: &Player<'_>, opponent: &Player<'_>, depth: u8) -> ChessResult<i64> {
        let material: i64 = player.active_pieces().iter().map(|piece| piece.value()).sum();
        let mobility = player.legal_moves().len() as i64;
        let check = if opponent.is_in_check() { CHECK_BONUS } else { 0 };
        let checkmate = if opponent.is_checkmate()? {
            Self::mate_bonus(depth)
        } else {
            0
        };
        let castle = if player.has_castled() { CASTLE_BONUS } else { 0 };

        Ok(material
            .saturating_add(mobility)
            .saturating_add(check)
            .saturating_add(checkmate)
            .saturating_add(castle))
    }

    /// `CHECKMATE_BONUS * 100^(depth + 1)`, saturating at `i64::MAX`.
    #[inline]
    pub fn mate_bonus(depth: u8) -> i64 {
        CHECKMATE_BONUS.saturating_mul(100i64.saturating_pow(u32::from(depth) + 1))
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &GameState, depth: u8) -> ChessResult<i64> {
        if game_state.is_stalemate()? {
            return Ok(0);
        }

        let light = game_state.player(Color::Light)?;
        let dark = game_state.player(Color::Dark)?;
        let light_score = Self::score_side(&light, &dark, depth)?;
        let dark_score = Self::score_side(&dark, &light, depth)?;
        Ok(light_score.saturating_sub(dark_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(StandardScorer.score(&game, 0), Ok(0));
    }

    #[test]
    fn stalemate_scores_zero_despite_material() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - -")
            .expect("test FEN should parse");
        assert_eq!(StandardScorer.score(&game, 3), Ok(0));
    }

    #[test]
    fn extra_material_favors_its_owner() {
        let light_up = GameState::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - -")
            .expect("test FEN should parse");
        let dark_up = GameState::from_fen("q3k3/8/8/8/8/8/8/4K3 w - -")
            .expect("test FEN should parse");
        assert!(StandardScorer.score(&light_up, 0).expect("scored") > 0);
        assert!(StandardScorer.score(&dark_up, 0).expect("scored") < 0);
    }

    #[test]
    fn check_adds_bonus_for_the_checking_side() {
        // Rook gives check from e2 or sits quietly on a2; everything else equal.
        let checking = GameState::from_fen("4k3/8/8/8/8/8/4R3/K7 b - -")
            .expect("test FEN should parse");
        let quiet = GameState::from_fen("4k3/8/8/8/8/8/R7/K7 b - -")
            .expect("test FEN should parse");

        let light = checking.player(Color::Light).expect("kings present");
        let dark = checking.player(Color::Dark).expect("kings present");
        assert!(dark.is_in_check());
        let with_check = StandardScorer::score_side(&light, &dark, 0).expect("scored");

        let light_quiet = quiet.player(Color::Light).expect("kings present");
        let dark_quiet = quiet.player(Color::Dark).expect("kings present");
        let without_check =
            StandardScorer::score_side(&light_quiet, &dark_quiet, 0).expect("scored");

        let mobility_delta =
            light.legal_moves().len() as i64 - light_quiet.legal_moves().len() as i64;
        assert_eq!(with_check - without_check, CHECK_BONUS + mobility_delta);
    }

    #[test]
    fn checkmate_dominates_and_grows_with_remaining_depth() {
        let mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - -")
            .expect("test FEN should parse");
        assert_eq!(mated.is_checkmate(), Ok(true));

        let shallow = StandardScorer.score(&mated, 0).expect("scored");
        let deep = StandardScorer.score(&mated, 1).expect("scored");
        assert!(shallow > CHECKMATE_BONUS);
        assert!(deep > shallow);
    }

    #[test]
    fn mate_bonus_saturates() {
        assert_eq!(StandardScorer::mate_bonus(0), 10_000_000);
        assert_eq!(StandardScorer::mate_bonus(1), 1_000_000_000);
        assert_eq!(StandardScorer::mate_bonus(200), i64::MAX);
    }

    #[test]
    fn castling_is_rewarded() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K -")
            .expect("test FEN should parse");
        let after = game.attempt_move(4, 6, None).expect("castle attempt").game_state;
        assert!(after.has_castled(Color::Light));

        let light = after.player(Color::Light).expect("kings present");
        let dark = after.player(Color::Dark).expect("kings present");
        let light_score = StandardScorer::score_side(&light, &dark, 0).expect("scored");
        let material: i64 = light.active_pieces().iter().map(|p| p.value()).sum();
        assert_eq!(light_score, material + light.legal_moves().len() as i64 + CASTLE_BONUS);
    }
}
