use crate::game_state::chess_types::*;

/// Single undo record produced by `make_move` and consumed by `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Differs from `mv.to` only for en-passant captures.
    pub captured_square: Square,

    /// Every castling flag this move cleared, for either color.
    pub revoked_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

impl UndoState {
    /// Rights `color` lost through this move.
    pub fn lost_castling_rights(&self, color: Color) -> LostCastlingRights {
        let kingside = self.revoked_castling_rights & kingside_flag(color) != 0;
        let queenside = self.revoked_castling_rights & queenside_flag(color) != 0;
        match (kingside, queenside) {
            (true, true) => LostCastlingRights::Both,
            (true, false) => LostCastlingRights::Kingside,
            (false, true) => LostCastlingRights::Queenside,
            (false, false) => LostCastlingRights::None,
        }
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.captured_square != self.mv.to
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.moved_piece.kind == PieceKind::King && self.mv.from.abs_diff(self.mv.to) == 2
    }
}
