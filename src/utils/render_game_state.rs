//! Plain-text board dump for the `d` command and debugging.

use crate::game_state::chess_types::*;

/// Render the board with rank 8 at the top. White pieces are uppercase,
/// black lowercase, empty squares `-`, and the file legend sits underneath.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.piece_at(rank * 8 + file) {
                Some(piece) => out.push(piece.to_char()),
                None => out.push('-'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
