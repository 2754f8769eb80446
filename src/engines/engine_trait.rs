//! Engine abstraction used by the protocol front end.
//!
//! Strategies sit behind one trait so the front end can swap them at runtime
//! through `setoption name Skill Level`.

use crate::game_state::chess_types::{ChessMove, GameState};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// Side-to-move relative centipawns, when the engine searched.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, String>;
}
