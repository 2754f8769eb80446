use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::piece_moves::capture_destinations;
use crate::moves::ray_moves::{first_blocker, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// Every square some piece of `color` could capture on right now.
pub fn capture_squares_for(game_state: &GameState, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(16);
    for (square, _) in game_state.squares_of(color) {
        out.extend(capture_destinations(game_state, square));
    }
    out
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.find_king(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether a piece of `attacker_color` attacks `square`, occupied or not.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let is_attacker = |sq: Square, kinds: &[PieceKind]| {
        matches!(game_state.piece_at(sq), Some(piece) if piece.color == attacker_color && kinds.contains(&piece.kind))
    };

    // A pawn of the attacking color attacks `square` exactly from the squares
    // a defending pawn on `square` would attack.
    if squares_in_mask(pawn_attacks(attacker_color.opposite(), square)).any(|sq| is_attacker(sq, &[PieceKind::Pawn])) {
        return true;
    }

    if squares_in_mask(knight_attacks(square)).any(|sq| is_attacker(sq, &[PieceKind::Knight])) {
        return true;
    }

    if squares_in_mask(king_attacks(square)).any(|sq| is_attacker(sq, &[PieceKind::King])) {
        return true;
    }

    let diagonal_hit = DIAGONAL_DIRECTIONS.iter().any(|&(df, dr)| {
        first_blocker(game_state, square, df, dr)
            .is_some_and(|sq| is_attacker(sq, &[PieceKind::Bishop, PieceKind::Queen]))
    });
    if diagonal_hit {
        return true;
    }

    ORTHOGONAL_DIRECTIONS.iter().any(|&(df, dr)| {
        first_blocker(game_state, square, df, dr)
            .is_some_and(|sq| is_attacker(sq, &[PieceKind::Rook, PieceKind::Queen]))
    })
}
