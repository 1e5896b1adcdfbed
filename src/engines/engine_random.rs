//! Random-move engine.
//!
//! Selects uniformly from the moves that complete and is used for diagnostics
//! and self-play smoke tests.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::GameState;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Rules Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let player = game_state.current_player()?;
        let mut completed = Vec::with_capacity(player.legal_moves().len());
        for mv in player.legal_moves() {
            if player.make_move(mv)?.status.is_done() {
                completed.push(mv);
            }
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            completed.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {}",
                depth
            ));
        }

        let mut rng = rand::rng();
        out.best_move = completed.choose(&mut rng).map(|mv| (*mv).clone());
        Ok(out)
    }
}
