//! Outcome of a move attempt.

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Done,
    /// The move is not in the player's legal-move set.
    IllegalMove,
    /// Executing the move would leave the mover's king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Snapshot after the attempt, the attempted move, and its status.
///
/// On rejection `game_state` is the pre-move snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTransition {
    pub game_state: GameState,
    pub mv: ChessMove,
    pub status: MoveStatus,
}

impl MoveTransition {
    pub fn done(game_state: GameState, mv: ChessMove) -> Self {
        Self {
            game_state,
            mv,
            status: MoveStatus::Done,
        }
    }

    pub fn rejected(previous: &GameState, mv: ChessMove, status: MoveStatus) -> Self {
        Self {
            game_state: previous.clone(),
            mv,
            status,
        }
    }
}
