//! Fixed-depth minimax search.
//!
//! Light maximizes and Dark minimizes. Each level passes its running best down
//! as a single bound: a minimizing level stops once it drops below the bound,
//! a maximizing level once it rises above it. Only moves whose attempt
//! completes are searched.

use std::time::Instant;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState};
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{BoardScorer, StandardScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search. Zero is treated as one.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// [`ChessMove::Null`] when the side to move has no completed move.
    pub best_move: ChessMove,
    pub best_score: i64,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Default)]
pub struct Minimax<S: BoardScorer = StandardScorer> {
    scorer: S,
    config: SearchConfig,
}

impl Minimax<StandardScorer> {
    pub fn with_depth(depth: u8) -> Self {
        Self::new(StandardScorer, SearchConfig { depth })
    }
}

impl<S: BoardScorer> Minimax<S> {
    pub fn new(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn search(&self, game_state: &GameState) -> ChessResult<SearchResult> {
        let started = Instant::now();
        let depth = self.config.depth.max(1);
        let side = game_state.side_to_move();
        let player = game_state.current_player()?;

        let mut nodes = 0u64;
        let mut best_move = ChessMove::Null;
        let mut highest = i64::MIN;
        let mut lowest = i64::MAX;

        for mv in player.legal_moves() {
            let transition = player.make_move(mv)?;
            if !transition.status.is_done() {
                continue;
            }

            let value = match side {
                Color::Light => self.min(&transition.game_state, depth - 1, highest, &mut nodes)?,
                Color::Dark => self.max(&transition.game_state, depth - 1, lowest, &mut nodes)?,
            };
            tracing::debug!(side = ?side, mv = %mv, value, "root move scored");

            match side {
                Color::Light if value >= highest => {
                    highest = value;
                    best_move = mv.clone();
                }
                Color::Dark if value <= lowest => {
                    lowest = value;
                    best_move = mv.clone();
                }
                _ => {}
            }
        }

        let best_score = match side {
            Color::Light => highest,
            Color::Dark => lowest,
        };
        let elapsed_ms = started.elapsed().as_millis();
        tracing::info!(
            best_move = %best_move,
            best_score,
            depth,
            nodes,
            elapsed_ms = elapsed_ms as u64,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            best_score,
            depth,
            nodes,
            elapsed_ms,
        })
    }

    fn min(
        &self,
        game_state: &GameState,
        depth: u8,
        bound: i64,
        nodes: &mut u64,
    ) -> ChessResult<i64> {
        *nodes += 1;
        let player = game_state.current_player()?;
        if depth == 0 || player.is_checkmate()? || player.is_stalemate()? {
            return self.scorer.score(game_state, depth);
        }

        let mut lowest = i64::MAX;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv)?;
            if transition.status.is_done() {
                let value = self.max(&transition.game_state, depth - 1, lowest, nodes)?;
                lowest = lowest.min(value);
            }
            if lowest < bound {
                break;
            }
        }
        Ok(lowest)
    }

    fn max(
        &self,
        game_state: &GameState,
        depth: u8,
        bound: i64,
        nodes: &mut u64,
    ) -> ChessResult<i64> {
        *nodes += 1;
        let player = game_state.current_player()?;
        if depth == 0 || player.is_checkmate()? || player.is_stalemate()? {
            return self.scorer.score(game_state, depth);
        }

        let mut highest = i64::MIN;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv)?;
            if transition.status.is_done() {
                let value = self.min(&transition.game_state, depth - 1, highest, nodes)?;
                highest = highest.max(value);
            }
            if highest > bound {
                break;
            }
        }
        Ok(highest)
    }
}

/// Best move for the side to move with the standard evaluator.
pub fn search_best_move(game_state: &GameState, depth: u8) -> ChessResult<ChessMove> {
    Ok(Minimax::with_depth(depth).search(game_state)?.best_move)
}
