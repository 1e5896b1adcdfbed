//! Minimax engine wrapper.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::{Minimax, SearchConfig};

pub struct MinimaxEngine {
    default_depth: u8,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self { default_depth }
    }

    #[inline]
    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Rules Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if !name.eq_ignore_ascii_case("depth") {
            return Err(ChessError::UnknownOption(name.to_owned()));
        }
        let depth = value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|depth| *depth > 0)
            .ok_or_else(|| ChessError::InvalidOptionValue {
                name: name.to_owned(),
                value: value.to_owned(),
            })?;
        self.default_depth = depth;
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let result = Minimax::new(StandardScorer, SearchConfig { depth }).search(game_state)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            result.depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        if result.best_move.is_null() {
            out.info_lines
                .push("info string minimax_engine no_completed_move".to_owned());
        } else {
            out.info_lines.push(format!(
                "info string minimax_engine best_move {}",
                result.best_move.to_long_algebraic()
            ));
            out.best_move = Some(result.best_move);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_option_is_parsed_and_validated() {
        let mut engine = MinimaxEngine::default();
        assert_eq!(engine.default_depth(), 3);

        engine.set_option("Depth", "2").expect("valid depth");
        assert_eq!(engine.default_depth(), 2);

        assert!(matches!(
            engine.set_option("Depth", "zero"),
            Err(ChessError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            engine.set_option("Depth", "0"),
            Err(ChessError::InvalidOptionValue { .. })
        ));
        assert_eq!(
            engine.set_option("Hash", "16"),
            Err(ChessError::UnknownOption("Hash".to_owned()))
        );
        assert_eq!(engine.default_depth(), 2);
    }

    #[test]
    fn go_depth_overrides_configured_depth() {
        let game = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - -")
            .expect("test FEN should parse");
        let mut engine = MinimaxEngine::new(4);
        let out = engine
            .choose_move(&game, &GoParams { depth: Some(1) })
            .expect("search should run");

        assert_eq!(out.best_move.and_then(|mv| mv.to()), Some(35));
        assert!(out.info_lines[0].starts_with("info depth 1 "));
    }

    #[test]
    fn mated_side_gets_no_move() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - -")
            .expect("test FEN should parse");
        let mut engine = MinimaxEngine::new(2);
        let out = engine.choose_move(&game, &GoParams::default()).expect("search should run");
        assert_eq!(out.best_move, None);
    }
}
