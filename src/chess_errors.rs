//! Errors used throughout the chess engine.
//!
//! `MoveError` is the tagged outcome of move validation. It is never fatal:
//! a rejected move leaves the position exactly as it was, and callers (the
//! legal move collector, search, the protocol front end) decide what to do
//! with it. `FenError` and `NotationError` describe malformed text at the
//! boundary; a position that fails to parse is never handed to the core.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Outcome of validating a candidate move against a position.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square is empty.
    #[error("there is no piece on the origin square")]
    NoPieceToMove,

    /// One of the square indices is outside `0..64`.
    #[error("square index is outside the board")]
    IndexOutOfBounds,

    /// The destination is not reachable by the piece, the piece belongs to
    /// the side not on move, or the promotion request does not fit the move.
    #[error("move is not playable by the piece on the origin square")]
    InvalidMove,

    /// Playing the move would leave the mover's own king attacked.
    #[error("move leaves the mover's king in check")]
    KingLeftInCheck,

    /// The mover has no king on the board.
    #[error("position has no king for the side to move")]
    NoKing,
}

/// Result type for validation. `Ok(())` is the successful operation.
pub type MoveResult<T> = Result<T, MoveError>;

/// Malformed six-field position text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field in position text")]
    MissingField(&'static str),

    #[error("position text has extra trailing fields")]
    ExtraFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not sum to 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("invalid empty-square count '{0}'")]
    InvalidEmptyCount(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastling(char),

    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),

    #[error("invalid {field}: {value}")]
    InvalidClock { field: &'static str, value: String },

    #[error("more than one {0:?} king on the board")]
    DuplicateKing(Color),
}

/// Malformed square or move text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("square index out of bounds: {0}")]
    SquareOutOfBounds(u8),

    #[error("invalid long algebraic move: {0}")]
    InvalidMoveText(String),

    #[error("invalid promotion piece character: {0}")]
    InvalidPromotion(char),
}
