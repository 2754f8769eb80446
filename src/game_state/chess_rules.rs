//! Canonical chess-rule constants.
//!
//! Starting position text, home squares for kings and rooks, and the set of
//! piece kinds a pawn may promote to.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotion fan-out order used by the legal move collector.
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub const WHITE_KING_HOME: Square = 4;
pub const BLACK_KING_HOME: Square = 60;
pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 0;
pub const WHITE_KINGSIDE_ROOK_HOME: Square = 7;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 56;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 63;

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    }
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_KINGSIDE_ROOK_HOME,
        Color::Black => BLACK_KINGSIDE_ROOK_HOME,
    }
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_QUEENSIDE_ROOK_HOME,
        Color::Black => BLACK_QUEENSIDE_ROOK_HOME,
    }
}

/// Rook relocation `(from, to)` for a castling king move, if `king_to` is a
/// castling destination from the color's home square.
#[inline]
pub const fn castling_rook_move(color: Color, king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    let home = king_home(color);
    if king_from != home {
        return None;
    }
    if king_to == home + 2 {
        Some((kingside_rook_home(color), home + 1))
    } else if king_to == home - 2 {
        Some((queenside_rook_home(color), home - 1))
    } else {
        None
    }
}
