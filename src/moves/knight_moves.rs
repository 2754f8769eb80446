//! Knight jump generation.
//!
//! The eight jump targets per square are precomputed with every offset
//! checked against both file and rank edges, so no jump wraps the board.

use crate::game_state::chess_types::*;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

/// Pseudo-legal knight destinations: empty or enemy-occupied jump targets.
pub fn knight_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    squares_in_mask(knight_attacks(from))
        .filter(|&to| game_state.can_move_to(to, color))
        .collect()
}

/// Knight jump targets holding an enemy piece.
pub fn knight_capture_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    squares_in_mask(knight_attacks(from))
        .filter(|&to| game_state.is_capturable(to, color))
        .collect()
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file + 1, rank + 2);
        attacks |= set_if_valid(file + 2, rank + 1);
        attacks |= set_if_valid(file + 2, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 2);
        attacks |= set_if_valid(file - 1, rank - 2);
        attacks |= set_if_valid(file - 2, rank - 1);
        attacks |= set_if_valid(file - 2, rank + 1);
        attacks |= set_if_valid(file - 1, rank + 2);

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
