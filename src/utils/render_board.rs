//! Terminal board renderer.
//!
//! Uses the FEN letters as glyphs (uppercase white, lowercase black) and `.`
//! for empty squares, with file letters above and below and rank numbers on
//! both sides.

use crate::game_state::board::Board;
use crate::game_state::chess_types::square_at;

/// Render the board with rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(board.piece_at(square_at(file, rank)).ascii());
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn renders_the_start_position() {
        let expected = "  a b c d e f g h\n\
8 r n b q k b n r 8
7 p p p p p p p p 7
6 . . . . . . . . 6
5 . . . . . . . . 5
4 . . . . . . . . 4
3 . . . . . . . . 3
2 P P P P P P P P 2
1 R N B Q K B N R 1
  a b c d e f g h";

        assert_eq!(render_board(&Board::new_game()), expected);
    }
}
