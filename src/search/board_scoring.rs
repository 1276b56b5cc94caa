//! Static evaluation: material count only.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so the material table can
//! be swapped without touching the search code.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Practical infinity for search windows and the score of a lost position.
pub const WIN_VALUE: i32 = 50_000;

pub const PAWN_VALUE: i32 = 30;
pub const ROOK_VALUE: i32 = 90;
pub const KNIGHT_VALUE: i32 = 85;
pub const BISHOP_VALUE: i32 = 84;
pub const QUEEN_VALUE: i32 = 300;

/// Worth more than every other piece plus `WIN_VALUE`, so a line that loses the
/// king always scores below `-WIN_VALUE`.
pub const KING_VALUE: i32 = 8 * PAWN_VALUE
    + 2 * ROOK_VALUE
    + 2 * KNIGHT_VALUE
    + 2 * BISHOP_VALUE
    + QUEEN_VALUE
    + WIN_VALUE;

pub trait BoardScorer {
    /// Score from the perspective of `color`.
    fn score(&self, board: &Board, color: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, color: Color) -> i32 {
        let white_minus_black = evaluate(board);
        match color {
            Color::Light => white_minus_black,
            Color::Dark => -white_minus_black,
        }
    }
}

/// Material balance, white minus black.
pub fn evaluate(board: &Board) -> i32 {
    board
        .squares()
        .iter()
        .filter_map(|piece| {
            let value = MaterialScorer::piece_value(piece.kind()?);
            Some(match piece.color() {
                Color::Light => value,
                Color::Dark => -value,
            })
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{evaluate, BoardScorer, MaterialScorer, KING_VALUE, PAWN_VALUE, WIN_VALUE};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::game_state::piece::Piece;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&Board::new_game()), 0);
    }

    #[test]
    fn removing_a_white_pawn_costs_one_pawn() {
        let mut board = Board::new_game();
        board.set_piece(12, Piece::NONE);

        assert_eq!(evaluate(&board), -PAWN_VALUE);
        assert_eq!(MaterialScorer.score(&board, Color::Light), -30);
        assert_eq!(MaterialScorer.score(&board, Color::Dark), 30);
    }

    #[test]
    fn king_outweighs_the_win_bound() {
        assert_eq!(KING_VALUE, 51_058);
        assert!(KING_VALUE > WIN_VALUE);
    }
}
