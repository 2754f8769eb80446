//! Bishop move generation over the four diagonal rays.

use crate::game_state::chess_types::*;
use crate::moves::ray_moves::{ray_destinations, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    ray_destinations(game_state, from, color, &DIAGONAL_DIRECTIONS, false)
}

#[inline]
pub fn bishop_capture_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    ray_destinations(game_state, from, color, &DIAGONAL_DIRECTIONS, true)
}
