//! Rook move generation over the four orthogonal rays.

use crate::game_state::chess_types::*;
use crate::moves::ray_moves::{ray_destinations, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    ray_destinations(game_state, from, color, &ORTHOGONAL_DIRECTIONS, false)
}

#[inline]
pub fn rook_capture_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    ray_destinations(game_state, from, color, &ORTHOGONAL_DIRECTIONS, true)
}
