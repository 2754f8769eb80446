use crate::chess_errors::MoveResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `game_state`.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> MoveResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

/// Per root move breakdown, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> MoveResult<Vec<(ChessMove, PerftCounts)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut out = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut local = PerftCounts::default();
        let undo = make_move(game_state, mv)?;
        let result = if depth == 1 {
            record_leaf(generator, game_state, &undo, &mut local)
        } else {
            perft_recurse(generator, game_state, depth - 1, &mut local)
        };
        unmake_move(game_state, &undo);
        result?;
        out.push((mv, local));
    }

    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;

    for mv in moves {
        let undo = make_move(game_state, mv)?;
        let result = if depth == 1 {
            record_leaf(generator, game_state, &undo, counts)
        } else {
            perft_recurse(generator, game_state, depth - 1, counts)
        };
        unmake_move(game_state, &undo);
        result?;
    }

    Ok(())
}

fn record_leaf<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    undo: &UndoState,
    counts: &mut PerftCounts,
) -> MoveResult<()> {
    let mut leaf = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if undo.captured_piece.is_some() {
        leaf.captures = 1;
    }
    if undo.is_en_passant() {
        leaf.en_passant = 1;
    }
    if undo.is_castling() {
        leaf.castles = 1;
    }
    if undo.mv.promotion.is_some() {
        leaf.promotions = 1;
    }

    // Mate needs a reply search, so only pay for it when in check.
    if is_king_in_check(game_state, game_state.side_to_move) {
        leaf.checks = 1;
        if generator.generate_legal_moves(game_state)?.is_empty() {
            leaf.checkmates = 1;
        }
    }

    counts.merge(leaf);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    fn nodes(fen: &str, depth: u8) -> usize {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let before = game.clone();
        let counts = perft(&LegalMoveGenerator, &mut game, depth).expect("perft should run");
        assert_eq!(game, before);
        counts.nodes
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &mut game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(nodes(start, 1), 20);
        assert_eq!(nodes(start, 2), 400);
        assert_eq!(nodes(start, 3), 8902);
    }

    #[test]
    fn starting_position_depth_three_breakdown() {
        let mut game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &mut game, 3).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_node_counts() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        assert_eq!(nodes(fen, 1), 48);
        assert_eq!(nodes(fen, 2), 2039);
    }

    #[test]
    fn kiwipete_depth_two_breakdown() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let counts = perft(&LegalMoveGenerator, &mut game, 2).expect("perft should run");
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 3);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn endgame_rook_and_pawns_node_counts() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(nodes(fen, 1), 14);
        assert_eq!(nodes(fen, 2), 191);
        assert_eq!(nodes(fen, 3), 2812);
    }

    #[test]
    fn promotion_heavy_position_node_counts() {
        let fen = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
        assert_eq!(nodes(fen, 1), 6);
        assert_eq!(nodes(fen, 2), 264);
        assert_eq!(nodes(fen, 3), 9467);
    }

    #[test]
    fn discovered_promotion_position_node_counts() {
        let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        assert_eq!(nodes(fen, 1), 44);
        assert_eq!(nodes(fen, 2), 1486);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &mut game, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, counts)| counts.nodes == 20));
        assert_eq!(divided.iter().map(|(_, c)| c.nodes).sum::<usize>(), 400);
    }
}
