//! Move-path enumeration for validating move generation.
//!
//! Only attempts that complete (`MoveStatus::Done`) are counted, so the node
//! totals match the published perft tables.

use crate::errors::ChessResult;
use crate::game_state::chess_types::GameState;
use crate::move_generation::move_transition::MoveTransition;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for transition in completed_moves(game_state)? {
        if depth == 1 {
            total.merge(leaf_counts(&transition)?);
        } else {
            total.merge(perft(&transition.game_state, depth - 1)?);
        }
    }
    Ok(total)
}

/// Node count per root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    for transition in completed_moves(game_state)? {
        let nodes = perft(&transition.game_state, depth.saturating_sub(1))?.nodes;
        out.push((transition.mv.to_long_algebraic(), nodes));
    }
    Ok(out)
}

fn completed_moves(game_state: &GameState) -> ChessResult<Vec<MoveTransition>> {
    let player = game_state.current_player()?;
    let mut out = Vec::with_capacity(player.legal_moves().len());
    for mv in player.legal_moves() {
        let transition = player.make_move(mv)?;
        if transition.status.is_done() {
            out.push(transition);
        }
    }
    Ok(out)
}

fn leaf_counts(transition: &MoveTransition) -> ChessResult<PerftCounts> {
    let mv = &transition.mv;
    let reply = transition.game_state.current_player()?;
    let in_check = reply.is_in_check();

    Ok(PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        en_passant: usize::from(matches!(mv, ChessMove::EnPassant { .. })),
        castles: usize::from(mv.is_castle()),
        promotions: usize::from(mv.promotion_kind().is_some()),
        checks: usize::from(in_check),
        checkmates: usize::from(in_check && reply.is_checkmate()?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&GameState::new_game(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_matches_reference_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft should run").nodes, 400);

        let depth_three = perft(&game, 3).expect("perft should run");
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castles_and_en_passant() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");

        let depth_one = perft(&game, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&game, 2).expect("perft should run");
        assert_eq!(depth_two.nodes, 2_039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
        assert!(divided.iter().all(|(_, n)| *n == 20));
    }
}
