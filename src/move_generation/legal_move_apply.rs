//! Move validation and in-place make/unmake.
//!
//! `validate_move` is transactional: it plays the candidate on the position,
//! checks the mover's king against the opponent's capture set, and always
//! takes the move back before returning. `make_move` applies permanently and
//! hands back the `UndoState` that `unmake_move` needs to restore every
//! field exactly.

use crate::chess_errors::{MoveError, MoveResult};
use crate::game_state::chess_rules::{castling_rook_move, king_home, kingside_rook_home, queenside_rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::capture_squares_for;
use crate::moves::pawn_moves::is_en_passant_capture;
use crate::moves::piece_moves::pseudo_legal_destinations;

/// Check that `mv` is legal for the side to move. The position is left
/// unchanged whatever the outcome.
pub fn validate_move(game_state: &mut GameState, mv: ChessMove) -> MoveResult<()> {
    if mv.from >= 64 || mv.to >= 64 {
        return Err(MoveError::IndexOutOfBounds);
    }

    let piece = game_state.piece_at(mv.from).ok_or(MoveError::NoPieceToMove)?;

    if !pseudo_legal_destinations(game_state, mv.from).contains(&mv.to) {
        return Err(MoveError::InvalidMove);
    }
    if piece.color != game_state.side_to_move {
        return Err(MoveError::InvalidMove);
    }
    if !promotion_fits(piece, mv) {
        return Err(MoveError::InvalidMove);
    }

    let undo = make_move(game_state, mv)?;
    let verdict = match game_state.find_king(piece.color) {
        None => Err(MoveError::NoKing),
        Some(king_sq) => {
            if capture_squares_for(game_state, game_state.side_to_move).contains(&king_sq) {
                Err(MoveError::KingLeftInCheck)
            } else {
                Ok(())
            }
        }
    };
    unmake_move(game_state, &undo);

    verdict
}

/// A pawn reaching its last rank must name a promotion piece; nothing else may.
fn promotion_fits(piece: Piece, mv: ChessMove) -> bool {
    let promotes = piece.kind == PieceKind::Pawn && rank_of(mv.to) == piece.color.promotion_rank();
    match mv.promotion {
        Some(kind) => promotes && kind.is_promotion_target(),
        None => !promotes,
    }
}

/// Apply `mv` permanently. The caller is expected to have validated it.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> MoveResult<UndoState> {
    if mv.from >= 64 || mv.to >= 64 {
        return Err(MoveError::IndexOutOfBounds);
    }
    let moved_piece = game_state.piece_at(mv.from).ok_or(MoveError::NoPieceToMove)?;
    let color = moved_piece.color;
    let is_pawn = moved_piece.kind == PieceKind::Pawn;

    let captured_square = if is_pawn && is_en_passant_capture(game_state, mv.from, mv.to, color) {
        match color {
            Color::White => mv.to - 8,
            Color::Black => mv.to + 8,
        }
    } else {
        mv.to
    };

    let mut undo = UndoState {
        mv,
        moved_piece,
        captured_piece: game_state.squares[captured_square as usize].take(),
        captured_square,
        revoked_castling_rights: 0,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    // En-passant target lives for exactly one ply.
    game_state.en_passant_square = if is_pawn
        && rank_of(mv.from) == color.pawn_start_rank()
        && mv.from.abs_diff(mv.to) == 16
    {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    let rights_before = game_state.castling_rights;
    update_castling_rights(game_state, &undo);
    undo.revoked_castling_rights = rights_before & !game_state.castling_rights;

    game_state.squares[mv.from as usize] = None;
    game_state.squares[mv.to as usize] = Some(match mv.promotion {
        Some(kind) if is_pawn => Piece::new(color, kind),
        _ => moved_piece,
    });

    if moved_piece.kind == PieceKind::King {
        if let Some((rook_from, rook_to)) = castling_rook_move(color, mv.from, mv.to) {
            game_state.squares[rook_to as usize] = game_state.squares[rook_from as usize].take();
        }
    }

    if undo.captured_piece.is_some() || is_pawn {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = color.opposite();

    Ok(undo)
}

/// Restore the position `make_move` started from.
pub fn unmake_move(game_state: &mut GameState, undo: &UndoState) {
    let mv = undo.mv;
    let color = undo.moved_piece.color;

    game_state.side_to_move = color;

    if undo.moved_piece.kind == PieceKind::King {
        if let Some((rook_from, rook_to)) = castling_rook_move(color, mv.from, mv.to) {
            game_state.squares[rook_from as usize] = game_state.squares[rook_to as usize].take();
        }
    }

    game_state.squares[mv.to as usize] = None;
    game_state.squares[mv.from as usize] = Some(undo.moved_piece);
    if let Some(captured) = undo.captured_piece {
        game_state.squares[undo.captured_square as usize] = Some(captured);
    }

    game_state.castling_rights |= undo.revoked_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
}

fn update_castling_rights(game_state: &mut GameState, undo: &UndoState) {
    let color = undo.moved_piece.color;
    let from = undo.mv.from;

    match undo.moved_piece.kind {
        PieceKind::King if from == king_home(color) => {
            game_state.castling_rights &= !(kingside_flag(color) | queenside_flag(color));
        }
        PieceKind::Rook if from == kingside_rook_home(color) => {
            game_state.castling_rights &= !kingside_flag(color);
        }
        PieceKind::Rook if from == queenside_rook_home(color) => {
            game_state.castling_rights &= !queenside_flag(color);
        }
        _ => {}
    }

    // Capturing a rook on its home corner removes the owner's right.
    if undo.captured_piece.is_some() {
        let enemy = color.opposite();
        if undo.captured_square == kingside_rook_home(enemy) {
            game_state.castling_rights &= !kingside_flag(enemy);
        } else if undo.captured_square == queenside_rook_home(enemy) {
            game_state.castling_rights &= !queenside_flag(enemy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn play(game: &mut GameState, lan: &str) -> UndoState {
        let mv = parse_long_algebraic(lan, game).expect("move text should parse");
        validate_move(game, mv).expect("move should be legal");
        make_move(game, mv).expect("move should apply")
    }

    #[test]
    fn e2e4_sets_en_passant_target_and_resets_clock() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");

        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.en_passant_square, Some(20));
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.piece_at(28), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(game.piece_at(12), None);
    }

    #[test]
    fn validation_reports_each_error_kind() {
        let mut game = GameState::new_game();
        assert_eq!(validate_move(&mut game, ChessMove::new(28, 36)), Err(MoveError::NoPieceToMove));
        assert_eq!(validate_move(&mut game, ChessMove::new(12, 64)), Err(MoveError::IndexOutOfBounds));
        assert_eq!(validate_move(&mut game, ChessMove::new(70, 12)), Err(MoveError::IndexOutOfBounds));
        assert_eq!(validate_move(&mut game, ChessMove::new(12, 36)), Err(MoveError::InvalidMove));
        // Black pawn while White is on move.
        assert_eq!(validate_move(&mut game, ChessMove::new(52, 44)), Err(MoveError::InvalidMove));

        let mut kingless = GameState::from_fen("4k3/8/8/8/8/8/4P3/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(validate_move(&mut kingless, ChessMove::new(12, 20)), Err(MoveError::NoKing));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        // White bishop e2 pinned on the e-file by the rook on e8.
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();
        assert_eq!(validate_move(&mut game, ChessMove::new(12, 21)), Err(MoveError::KingLeftInCheck));
        assert_eq!(game, before);
    }

    #[test]
    fn validation_leaves_position_untouched_on_success() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(validate_move(&mut game, ChessMove::new(6, 21)), Ok(()));
        assert_eq!(game, before);
    }

    #[test]
    fn kingside_castle_moves_rook_and_clears_white_rights() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let before = game.clone();
        let undo = play(&mut game, "e1g1");

        assert_eq!(game.piece_at(6), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(game.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(game.piece_at(7), None);
        assert_eq!(game.piece_at(4), None);
        assert!(!game.has_castling_right(CASTLE_WHITE_KINGSIDE));
        assert!(!game.has_castling_right(CASTLE_WHITE_QUEENSIDE));
        assert_eq!(game.castling_rights, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(undo.lost_castling_rights(Color::White), LostCastlingRights::Both);
        assert!(undo.is_castling());

        unmake_move(&mut game, &undo);
        assert_eq!(game, before);
    }

    #[test]
    fn queenside_castle_round_trips() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 9").expect("FEN should parse");
        let before = game.clone();
        let undo = play(&mut game, "e8c8");

        assert_eq!(game.piece_at(58), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(game.piece_at(59), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(game.piece_at(56), None);
        assert_eq!(game.fullmove_number, 10);
        assert_eq!(game.halfmove_clock, 4);

        unmake_move(&mut game, &undo);
        assert_eq!(game, before);
    }

    #[test]
    fn rook_move_revokes_single_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let undo = play(&mut game, "a1a4");
        assert_eq!(undo.lost_castling_rights(Color::White), LostCastlingRights::Queenside);
        assert!(game.has_castling_right(CASTLE_WHITE_KINGSIDE));
        assert!(!game.has_castling_right(CASTLE_WHITE_QUEENSIDE));
    }

    #[test]
    fn capturing_corner_rook_revokes_opponent_right() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let before = game.clone();
        let undo = play(&mut game, "h1h8");
        assert_eq!(undo.lost_castling_rights(Color::Black), LostCastlingRights::Kingside);
        assert_eq!(undo.lost_castling_rights(Color::White), LostCastlingRights::Kingside);
        assert_eq!(game.castling_rights, CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_QUEENSIDE);

        unmake_move(&mut game, &undo);
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_capture_removes_and_restores_victim() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let before = game.clone();
        let undo = play(&mut game, "e5d6");

        assert!(undo.is_en_passant());
        assert_eq!(undo.captured_square, 35);
        assert_eq!(game.piece_at(35), None);
        assert_eq!(game.piece_at(43), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(game.en_passant_square, None);

        unmake_move(&mut game, &undo);
        assert_eq!(game, before);
    }

    #[test]
    fn en_passant_available_for_one_ply_only() {
        let mut game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K2N b - - 0 1").expect("FEN should parse");
        play(&mut game, "d7d5");
        assert_eq!(game.en_passant_square, Some(43));
        assert!(validate_move(&mut game, ChessMove::new(36, 43)).is_ok());

        play(&mut game, "h1g3");
        play(&mut game, "e8e7");
        assert_eq!(game.en_passant_square, None);
        assert_eq!(validate_move(&mut game, ChessMove::new(36, 43)), Err(MoveError::InvalidMove));
    }

    #[test]
    fn promotion_replaces_pawn_and_requires_piece_choice() {
        let mut game = GameState::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(validate_move(&mut game, ChessMove::new(52, 60)), Err(MoveError::InvalidMove));
        assert_eq!(
            validate_move(&mut game, ChessMove::with_promotion(52, 60, PieceKind::King)),
            Err(MoveError::InvalidMove)
        );

        let before = game.clone();
        let mv = ChessMove::with_promotion(52, 60, PieceKind::Knight);
        validate_move(&mut game, mv).expect("promotion should be legal");
        let undo = make_move(&mut game, mv).expect("promotion should apply");
        assert_eq!(game.piece_at(60), Some(Piece::new(Color::White, PieceKind::Knight)));

        unmake_move(&mut game, &undo);
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_on_ordinary_move_is_rejected() {
        let mut game = GameState::new_game();
        assert_eq!(
            validate_move(&mut game, ChessMove::with_promotion(12, 28, PieceKind::Queen)),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn random_games_unwind_to_their_start() {
        use crate::move_generation::legal_move_generator::generate_legal_moves;
        use rand::rngs::StdRng;
        use rand::seq::IndexedRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(20_240_601);
        let starts = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        ];

        for fen in starts {
            for _ in 0..6 {
                let mut game = GameState::from_fen(fen).expect("FEN should parse");
                let mut history = Vec::new();

                for _ in 0..80 {
                    let legal = generate_legal_moves(&mut game).expect("generation should succeed");
                    let Some(&mv) = legal.choose(&mut rng) else {
                        break;
                    };
                    let snapshot = game.clone();
                    let undo = make_move(&mut game, mv).expect("legal move should apply");
                    history.push((snapshot, undo));
                }

                // Unwind one ply at a time; every field must match, en-passant target included.
                while let Some((snapshot, undo)) = history.pop() {
                    unmake_move(&mut game, &undo);
                    assert_eq!(game, snapshot);
                }
                assert_eq!(game.get_fen(), fen);
            }
        }
    }

    #[test]
    fn quiet_moves_advance_halfmove_clock() {
        let mut game = GameState::new_game();
        play(&mut game, "g1f3");
        assert_eq!(game.halfmove_clock, 1);
        play(&mut game, "g8f6");
        assert_eq!(game.halfmove_clock, 2);
        assert_eq!(game.fullmove_number, 2);
    }
}
