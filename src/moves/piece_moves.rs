//! Per-square dispatch into the piece generators.
//!
//! Both entry points read the color from the piece on the square, so they
//! also answer "what could this piece capture" for the side not on move.
//! An empty square yields no destinations.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{bishop_capture_destinations, bishop_destinations};
use crate::moves::king_moves::{king_capture_destinations, king_destinations};
use crate::moves::knight_moves::{knight_capture_destinations, knight_destinations};
use crate::moves::pawn_moves::{pawn_capture_destinations, pawn_destinations};
use crate::moves::queen_moves::{queen_capture_destinations, queen_destinations};
use crate::moves::rook_moves::{rook_capture_destinations, rook_destinations};

/// Destinations reachable by the piece on `square`, ignoring self-check.
pub fn pseudo_legal_destinations(game_state: &GameState, square: Square) -> Vec<Square> {
    if square >= 64 {
        return Vec::new();
    }
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(game_state, square, piece.color),
        PieceKind::Knight => knight_destinations(game_state, square, piece.color),
        PieceKind::Bishop => bishop_destinations(game_state, square, piece.color),
        PieceKind::Rook => rook_destinations(game_state, square, piece.color),
        PieceKind::Queen => queen_destinations(game_state, square, piece.color),
        PieceKind::King => king_destinations(game_state, square, piece.color),
    }
}

/// Destinations where the piece on `square` would capture.
pub fn capture_destinations(game_state: &GameState, square: Square) -> Vec<Square> {
    if square >= 64 {
        return Vec::new();
    }
    let Some(piece) = game_state.piece_at(square) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_capture_destinations(game_state, square, piece.color),
        PieceKind::Knight => knight_capture_destinations(game_state, square, piece.color),
        PieceKind::Bishop => bishop_capture_destinations(game_state, square, piece.color),
        PieceKind::Rook => rook_capture_destinations(game_state, square, piece.color),
        PieceKind::Queen => queen_capture_destinations(game_state, square, piece.color),
        PieceKind::King => king_capture_destinations(game_state, square, piece.color),
    }
}
