//! Queen move generation: union of the bishop and rook rays.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::{bishop_capture_destinations, bishop_destinations};
use crate::moves::rook_moves::{rook_capture_destinations, rook_destinations};

pub fn queen_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut out = bishop_destinations(game_state, from, color);
    out.extend(rook_destinations(game_state, from, color));
    out
}

pub fn queen_capture_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut out = bishop_capture_destinations(game_state, from, color);
    out.extend(rook_capture_destinations(game_state, from, color));
    out
}
