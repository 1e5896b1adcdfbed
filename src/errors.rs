//! Error types for the rules engine.
//!
//! Expected move rejections are not errors; they travel as
//! [`MoveStatus`](crate::move_generation::move_transition::MoveStatus) values.
//! Everything here signals a corrupted position or malformed input and aborts
//! the current operation.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Invariant violations and input errors raised by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A side has no king on the board.
    #[error("no {color:?} king on the board")]
    MissingKing { color: Color },

    /// The null move reached execution.
    #[error("cannot execute the null move")]
    NullMoveExecution,

    /// A promotion wrapped a move made by something other than a pawn.
    #[error("cannot promote a {kind:?}")]
    PromotionOfNonPawn { kind: PieceKind },

    /// A pawn was asked to become a pawn or a king.
    #[error("invalid promotion target {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// The moving piece is not where the move says it is.
    #[error("move does not match the position: no such piece on square {square}")]
    StaleMove { square: Square },

    /// Square index outside `0..=63`.
    #[error("invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: i32 },

    /// Unparseable algebraic coordinate.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// Unparseable FEN text.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },
}

/// Result alias used throughout the crate.
pub type ChessResult<T> = Result<T, ChessError>;
