use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::GeneratedMoves;
use crate::move_generation::moves_shared::push_slides;

pub fn generate_bishop_moves(board: &Board, from: Square, piece: Piece, out: &mut GeneratedMoves) {
    push_slides(board, from, piece, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::move_generation::move_generator::GeneratedMoves;

    #[test]
    fn bishop_in_corner_sees_one_diagonal() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/B3K3 w - - 0 1").expect("FEN should parse");
        let mut out = GeneratedMoves::default();
        generate_bishop_moves(&board, 0, board.piece_at(0), &mut out);

        assert_eq!(out.moves.len(), 7);
        assert!(out.captures.is_empty());
    }
}
