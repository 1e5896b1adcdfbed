//! Immutable position snapshot.
//!
//! `GameState` is the central model for the engine. It is never mutated after
//! construction: executing a move builds a fresh snapshot through
//! [`GameStateBuilder`], copying the pieces the move does not touch.

use std::fmt;

use crate::errors::ChessResult;
use crate::game_state::board_geometry::NUM_SQUARES;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::move_generation::move_lookup::find_move;
use crate::move_generation::move_transition::{MoveStatus, MoveTransition};
use crate::move_generation::player::Player;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

/// Board squares, side to move, en-passant target and castle history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    squares: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    castled: [bool; 2],
}

impl GameState {
    /// The standard starting position, Light to move.
    pub fn new_game() -> Self {
        let mut builder = GameStateBuilder::new();

        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let file = file as Square;
            builder
                .set_piece(Piece::new(*kind, Color::Light, file))
                .set_piece(Piece::new(PieceKind::Pawn, Color::Light, 8 + file))
                .set_piece(Piece::new(PieceKind::Pawn, Color::Dark, 48 + file))
                .set_piece(Piece::new(*kind, Color::Dark, 56 + file));
        }

        builder.set_side_to_move(Color::Light).build()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    #[inline]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// Every piece on the board in square order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|slot| *slot)
    }

    /// Pieces of `color` in square order.
    pub fn active_pieces(&self, color: Color) -> Vec<Piece> {
        self.pieces().filter(|piece| piece.color == color).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Player view for `color`, computed from scratch.
    pub fn player(&self, color: Color) -> ChessResult<Player<'_>> {
        Player::new(self, color)
    }

    /// Player view for the side to move.
    pub fn current_player(&self) -> ChessResult<Player<'_>> {
        self.player(self.side_to_move)
    }

    /// Look up the legal move matching a square pair and try it.
    ///
    /// Coordinates that match no legal move come back as an
    /// [`MoveStatus::IllegalMove`] transition carrying the null move.
    pub fn attempt_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveTransition> {
        let player = self.current_player()?;
        let mv = find_move(&player, from, to, promotion);
        let transition = player.make_move(&mv)?;
        if transition.status != MoveStatus::Done {
            tracing::debug!(from, to, status = ?transition.status, "move attempt rejected");
        }
        Ok(transition)
    }

    pub fn is_checkmate(&self) -> ChessResult<bool> {
        self.current_player()?.is_checkmate()
    }

    pub fn is_stalemate(&self) -> ChessResult<bool> {
        self.current_player()?.is_stalemate()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

/// Incremental constructor for [`GameState`].
///
/// Setting a piece on an occupied square replaces the previous occupant. The
/// en-passant pawn defaults to none, so any move that does not set it clears
/// it.
#[derive(Debug, Clone)]
pub struct GameStateBuilder {
    squares: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    castled: [bool; 2],
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
            side_to_move: Color::Light,
            en_passant_pawn: None,
            castled: [false; 2],
        }
    }

    /// Start from `game_state`, keeping every piece except those on `skip`
    /// and carrying its castle history forward.
    pub fn copy_except(game_state: &GameState, skip: &[Square]) -> Self {
        let mut builder = Self::new();
        for piece in game_state.pieces() {
            if !skip.contains(&piece.square) {
                builder.set_piece(piece);
            }
        }
        builder.castled = game_state.castled;
        builder
    }

    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.squares[piece.square as usize] = Some(piece);
        self
    }

    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self.squares[square as usize] = None;
        self
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn set_castled(&mut self, color: Color) -> &mut Self {
        self.castled[color.index()] = true;
        self
    }

    pub fn build(&self) -> GameState {
        GameState {
            squares: self.squares,
            side_to_move: self.side_to_move,
            en_passant_pawn: self.en_passant_pawn,
            castled: self.castled,
        }
    }
}
