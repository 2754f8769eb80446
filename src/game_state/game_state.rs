//! Mailbox board state representation.
//!
//! `GameState` is the central model for the engine. It stores one optional
//! piece per square plus the side to move, castling flags, the en-passant
//! target, and the two move counters. A single instance is mutated in place
//! by `make_move` / `unmake_move` for the life of a game or search line.

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub squares: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the previous ply's double pawn push.
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square as usize].is_some()
    }

    /// True iff `square` holds a piece of the color opposite `by_color`.
    #[inline]
    pub fn is_capturable(&self, square: Square, by_color: Color) -> bool {
        matches!(self.squares[square as usize], Some(piece) if piece.color != by_color)
    }

    /// True iff `square` is empty or capturable by `by_color`. Does not bound
    /// check; callers pass on-board squares only.
    #[inline]
    pub fn can_move_to(&self, square: Square, by_color: Color) -> bool {
        match self.squares[square as usize] {
            Some(piece) => piece.color != by_color,
            None => true,
        }
    }

    /// Linear scan for the king of `color`. `None` marks a malformed position.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(color, PieceKind::King));
        self.squares
            .iter()
            .position(|slot| *slot == king)
            .map(|index| index as Square)
    }

    #[inline]
    pub fn has_castling_right(&self, flag: CastlingRights) -> bool {
        self.castling_rights & flag != 0
    }

    /// Occupied squares holding pieces of `color`, lowest square first.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| match slot {
                Some(piece) if piece.color == color => Some((index as Square, *piece)),
                _ => None,
            })
    }
}
