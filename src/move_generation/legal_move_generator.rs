//! Legal move collection.
//!
//! Walks every piece of the side to move, asks the per-piece generators for
//! destinations, fans last-rank pawn moves out into one candidate per
//! promotion piece, and keeps the candidates `validate_move` accepts.

use crate::chess_errors::{MoveError, MoveResult};
use crate::game_state::chess_rules::PROMOTION_PIECES;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::validate_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::piece_moves::{capture_destinations, pseudo_legal_destinations};

/// Every legal move for the side to move.
pub struct LegalMoveGenerator;

/// Legal moves that capture, en-passant included.
pub struct CaptureMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveResult<Vec<ChessMove>> {
        generate_legal_moves(game_state)
    }
}

impl MoveGenerator for CaptureMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveResult<Vec<ChessMove>> {
        generate_legal_capture_moves(game_state)
    }
}

pub fn generate_legal_moves(game_state: &mut GameState) -> MoveResult<Vec<ChessMove>> {
    collect_legal(game_state, pseudo_legal_destinations)
}

pub fn generate_legal_capture_moves(game_state: &mut GameState) -> MoveResult<Vec<ChessMove>> {
    collect_legal(game_state, capture_destinations)
}

fn collect_legal(
    game_state: &mut GameState,
    destinations: fn(&GameState, Square) -> Vec<Square>,
) -> MoveResult<Vec<ChessMove>> {
    let color = game_state.side_to_move;
    if game_state.find_king(color).is_none() {
        return Err(MoveError::NoKing);
    }

    let mut candidates = Vec::<ChessMove>::with_capacity(64);

    let origins: Vec<(Square, Piece)> = game_state.squares_of(color).collect();
    for (from, piece) in origins {
        for to in destinations(game_state, from) {
            if piece.kind == PieceKind::Pawn && rank_of(to) == color.promotion_rank() {
                candidates.extend(
                    PROMOTION_PIECES
                        .iter()
                        .map(|&kind| ChessMove::with_promotion(from, to, kind)),
                );
            } else {
                candidates.push(ChessMove::new(from, to));
            }
        }
    }

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        match validate_move(game_state, mv) {
            Ok(()) => legal.push(mv),
            Err(MoveError::NoKing) => return Err(MoveError::NoKing),
            Err(_) => {}
        }
    }

    Ok(legal)
}
