//! Fixed-depth material negamax engine.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{search_best_move, SearchConfig, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

pub struct NegamaxEngine {
    default_depth: u8,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl NegamaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth: default_depth.clamp(1, MAX_SEARCH_DEPTH),
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for NegamaxEngine {
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid Depth value '{value}'"))?;
            if !(1..=MAX_SEARCH_DEPTH).contains(&parsed) {
                return Err(format!("Depth must be between 1 and {MAX_SEARCH_DEPTH}"));
            }
            self.default_depth = parsed;
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> Result<EngineOutput, String> {
        // Explicit `go depth` wins over the configured default.
        let depth = params.depth.unwrap_or(self.default_depth);

        // The search mutates and restores its own copy.
        let mut working = game_state.clone();
        let outcome = search_best_move(
            &mut working,
            &self.move_generator,
            &self.scorer,
            SearchConfig { depth },
        )
        .map_err(|e| e.to_string())?;

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            score: Some(outcome.score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            outcome.depth, outcome.score, outcome.nodes
        ));
        if outcome.depth != depth {
            out.info_lines
                .push(format!("info string negamax_engine requested_depth {depth} used_depth {}", outcome.depth));
        }

        Ok(out)
    }
}
