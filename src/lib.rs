//! Crate root module declarations for the Plum Rules chess engine.
//!
//! This file exposes the subsystems (position model, piece movement, legality
//! and execution, search, engines, and utility helpers) so binaries, benches,
//! and external callers can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_geometry;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod move_generator;
    pub mod move_lookup;
    pub mod move_transition;
    pub mod perft;
    pub mod player;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}
