//! Fixed-depth negamax.
//!
//! The position is searched in place: every node plays a move with
//! `make_move`, recurses, and takes it back with `unmake_move`, so no board is
//! copied per node. Scores are side-to-move relative at every ply.

use tracing::{debug, warn};

use crate::chess_errors::MoveResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

pub const MAX_SEARCH_DEPTH: u8 = 6;
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Halfmove clock value at which the fifty-move rule applies.
const FIFTY_MOVE_HALFMOVES: u16 = 100;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the root has no legal move.
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub nodes: u64,
    pub depth: u8,
}

/// Search `config.depth` plies below `game_state` and report the best move.
///
/// The depth is clamped to `1..=MAX_SEARCH_DEPTH`.
pub fn search_best_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> MoveResult<SearchOutcome> {
    let depth = clamp_depth(config.depth);
    let mut nodes = 0u64;

    let moves = generator.generate_legal_moves(game_state)?;
    nodes += 1;
    if moves.is_empty() {
        return Ok(SearchOutcome {
            best_move: None,
            score: terminal_score(game_state, 0),
            nodes,
            depth,
        });
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in moves {
        let undo = make_move(game_state, mv)?;
        let result = negamax(game_state, generator, scorer, depth - 1, 1, &mut nodes);
        unmake_move(game_state, &undo);
        let score = -result?;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    debug!(depth, nodes, score = best_score, "search finished");

    Ok(SearchOutcome {
        best_move,
        score: best_score,
        nodes,
        depth,
    })
}

/// Score of `game_state` for the side to move, `depth` plies deep.
pub fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    ply: u8,
    nodes: &mut u64,
) -> MoveResult<i32> {
    *nodes += 1;

    if depth == 0 {
        return Ok(scorer.score(game_state));
    }

    // Mate and stalemate take precedence over the fifty-move draw.
    let moves = generator.generate_legal_moves(game_state)?;
    if moves.is_empty() {
        return Ok(terminal_score(game_state, ply));
    }
    if ply > 0 && game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return Ok(0);
    }

    let mut best_score = i32::MIN;
    for mv in moves {
        let undo = make_move(game_state, mv)?;
        let result = negamax(game_state, generator, scorer, depth - 1, ply + 1, nodes);
        unmake_move(game_state, &undo);
        best_score = best_score.max(-result?);
    }

    Ok(best_score)
}

/// Checkmate is worse the sooner it happens; stalemate is a draw.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if is_king_in_check(game_state, game_state.side_to_move) {
        -(MATE_SCORE - i32::from(ply))
    } else {
        0
    }
}

fn clamp_depth(requested: u8) -> u8 {
    if requested > MAX_SEARCH_DEPTH {
        warn!(requested, max = MAX_SEARCH_DEPTH, "search depth clamped");
        MAX_SEARCH_DEPTH
    } else {
        requested.max(1)
    }
}
