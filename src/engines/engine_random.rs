//! Skill level 1: a uniformly random legal move.
//!
//! Mostly useful for diagnostics and as a sparring partner in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic picks, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, String> {
        let mut working = game_state.clone();
        let legal_moves = self
            .move_generator
            .generate_legal_moves(&mut working)
            .map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine ignored_depth {}", depth));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_picks_a_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(7);
        let out = engine.choose_move(&game, &GoParams::default()).expect("engine should choose");

        let mut probe = game.clone();
        let legal = LegalMoveGenerator
            .generate_legal_moves(&mut probe)
            .expect("generation should succeed");
        let picked = out.best_move.expect("start position has moves");
        assert!(legal.contains(&picked));
        assert_eq!(out.score, None);
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::new_game();
        let a = RandomEngine::with_seed(42).choose_move(&game, &GoParams::default());
        let b = RandomEngine::with_seed(42).choose_move(&game, &GoParams::default());
        assert_eq!(
            a.expect("engine should choose").best_move,
            b.expect("engine should choose").best_move
        );
    }

    #[test]
    fn no_move_when_mated() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::with_seed(1)
            .choose_move(&game, &GoParams::default())
            .expect("engine should choose");
        assert_eq!(out.best_move, None);
    }
}
