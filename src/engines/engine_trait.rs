//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait interface.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no completed move.
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
