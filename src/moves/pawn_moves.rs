//! Pawn pushes, diagonal captures, and en-passant.
//!
//! Promotion is not decided here: a push or capture onto the last rank is
//! returned as a plain destination and the legal move collector fans it out.

use crate::game_state::chess_types::*;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

#[inline]
const fn forward(color: Color, square: Square, ranks: u8) -> Option<Square> {
    let rank = rank_of(square) as i8;
    let step = ranks as i8;
    let target = match color {
        Color::White => rank + step,
        Color::Black => rank - step,
    };
    square_at(file_of(square) as i8, target)
}

/// Pseudo-legal pawn destinations: pushes plus captures.
pub fn pawn_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);

    if let Some(one_ahead) = forward(color, from, 1) {
        if !game_state.is_occupied(one_ahead) {
            out.push(one_ahead);
        }

        if rank_of(from) == color.pawn_start_rank() {
            if let Some(two_ahead) = forward(color, from, 2) {
                if !game_state.is_occupied(one_ahead) && !game_state.is_occupied(two_ahead) {
                    out.push(two_ahead);
                }
            }
        }
    }

    out.extend(pawn_capture_destinations(game_state, from, color));
    out
}

/// Diagonal captures onto enemy pieces, plus the en-passant target when it
/// belongs to a pawn that just double-stepped past this one.
pub fn pawn_capture_destinations(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(2);

    for to in squares_in_mask(pawn_attacks(color, from)) {
        if game_state.is_capturable(to, color) {
            out.push(to);
        } else if is_en_passant_capture(game_state, from, to, color) {
            out.push(to);
        }
    }

    out
}

/// `to` is the live en-passant target, one rank ahead of the mover on an
/// adjacent file, with the enemy pawn that skipped it standing behind it.
pub fn is_en_passant_capture(game_state: &GameState, from: Square, to: Square, color: Color) -> bool {
    if game_state.en_passant_square != Some(to) || game_state.is_occupied(to) {
        return false;
    }
    if file_of(from).abs_diff(file_of(to)) != 1 || forward(color, from, 1).map(rank_of) != Some(rank_of(to)) {
        return false;
    }

    let Some(victim_square) = forward(color.opposite(), to, 1) else {
        return false;
    };
    game_state.piece_at(victim_square) == Some(Piece::new(color.opposite(), PieceKind::Pawn))
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
