use crate::chess_errors::MoveResult;
use crate::game_state::chess_types::{ChessMove, GameState};

/// Something that can enumerate moves for the side to move.
///
/// Implementations may play moves on `game_state` while working but must hand
/// it back unchanged.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveResult<Vec<ChessMove>>;
}
