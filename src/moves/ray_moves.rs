//! Ray casting shared by the sliding pieces.
//!
//! A ray advances one square at a time. It keeps going across empty squares,
//! stops on (and includes) the first enemy piece, and stops before a friendly
//! piece or the board edge.

use crate::game_state::chess_types::*;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Walk every `(file_step, rank_step)` ray from `from` for a piece of `color`.
/// With `captures_only`, only the enemy squares that end a ray are kept.
pub fn ray_destinations(
    game_state: &GameState,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    captures_only: bool,
) -> Vec<Square> {
    let mut out = Vec::new();

    for &(file_step, rank_step) in directions {
        let mut file = file_of(from) as i8 + file_step;
        let mut rank = rank_of(from) as i8 + rank_step;

        while let Some(to) = square_at(file, rank) {
            if !game_state.can_move_to(to, color) {
                break;
            }
            if game_state.is_capturable(to, color) {
                out.push(to);
                break;
            }
            if !captures_only {
                out.push(to);
            }
            file += file_step;
            rank += rank_step;
        }
    }

    out
}

/// First occupied square along a ray from `from`, if any.
pub fn first_blocker(game_state: &GameState, from: Square, file_step: i8, rank_step: i8) -> Option<Square> {
    let mut file = file_of(from) as i8 + file_step;
    let mut rank = rank_of(from) as i8 + rank_step;

    while let Some(square) = square_at(file, rank) {
        if game_state.is_occupied(square) {
            return Some(square);
        }
        file += file_step;
        rank += rank_step;
    }

    None
}
