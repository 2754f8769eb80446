//! King steps and castling.
//!
//! Castling is offered as a king destination two files away when the right is
//! still held, the rook stands on its home corner, the squares between king
//! and rook are empty, and neither the king's square nor the squares it
//! crosses are attacked.

use crate::game_state::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

/// Pseudo-legal king destinations including castling.
pub fn king_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut out: Vec<Square> = squares_in_mask(king_attacks(from))
        .filter(|&to| game_state.can_move_to(to, color))
        .collect();

    generate_castling_destinations(game_state, from, color, &mut out);
    out
}

pub fn king_capture_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    squares_in_mask(king_attacks(from))
        .filter(|&to| game_state.is_capturable(to, color))
        .collect()
}

fn generate_castling_destinations(game_state: &GameState, king_from: Square, color: Color, out: &mut Vec<Square>) {
    if king_from != king_home(color) {
        return;
    }

    let enemy = color.opposite();
    let own_rook = Some(Piece::new(color, PieceKind::Rook));
    let can_kingside = game_state.has_castling_right(kingside_flag(color))
        && game_state.piece_at(kingside_rook_home(color)) == own_rook;
    let can_queenside = game_state.has_castling_right(queenside_flag(color))
        && game_state.piece_at(queenside_rook_home(color)) == own_rook;

    if !can_kingside && !can_queenside {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    if can_kingside {
        let between = [king_from + 1, king_from + 2];
        if between.iter().all(|&sq| !game_state.is_occupied(sq))
            && between.iter().all(|&sq| !is_square_attacked(game_state, sq, enemy))
        {
            out.push(king_from + 2);
        }
    }

    if can_queenside {
        let between = [king_from - 1, king_from - 2, king_from - 3];
        let transit = [king_from - 1, king_from - 2];
        if between.iter().all(|&sq| !game_state.is_occupied(sq))
            && transit.iter().all(|&sq| !is_square_attacked(game_state, sq, enemy))
        {
            out.push(king_from - 2);
        }
    }
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file - 1, rank - 1);
        attacks |= set_if_valid(file, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 1);
        attacks |= set_if_valid(file - 1, rank);
        attacks |= set_if_valid(file + 1, rank);
        attacks |= set_if_valid(file - 1, rank + 1);
        attacks |= set_if_valid(file, rank + 1);
        attacks |= set_if_valid(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
