//! Move text in coordinate form: `e2e4`, `e7e8q`.
//!
//! A promotion is named by an optional fifth character. A four character pawn
//! move onto the last rank is read as a queen promotion. Whether the move is
//! playable is left to `validate_move`.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: ChessMove) -> Result<String, NotationError> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);

    if let Some(kind) = mv.promotion {
        let ch = promotion_to_char(kind).ok_or_else(|| NotationError::InvalidMoveText(format!("{out}{kind:?}")))?;
        out.push(ch);
    }

    Ok(out)
}

pub fn parse_long_algebraic(long_algebraic: &str, game_state: &GameState) -> Result<ChessMove, NotationError> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(NotationError::InvalidMoveText(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let promotion = match text.as_bytes().get(4) {
        Some(&ch) => Some(char_to_promotion(ch as char)?),
        None => default_promotion(game_state, from, to),
    };

    Ok(ChessMove { from, to, promotion })
}

fn default_promotion(game_state: &GameState, from: Square, to: Square) -> Option<PieceKind> {
    let piece = game_state.piece_at(from)?;
    (piece.kind == PieceKind::Pawn && rank_of(to) == piece.color.promotion_rank()).then_some(PieceKind::Queen)
}

fn promotion_to_char(piece_kind: PieceKind) -> Option<char> {
    match piece_kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        _ => None,
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, NotationError> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(NotationError::InvalidPromotion(ch)),
    }
}
