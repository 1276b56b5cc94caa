use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::GeneratedMoves;
use crate::move_generation::moves_shared::push_slides;

pub fn generate_rook_moves(board: &Board, from: Square, piece: Piece, out: &mut GeneratedMoves) {
    push_slides(board, from, piece, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::move_generation::move_generator::GeneratedMoves;

    #[test]
    fn rook_stops_at_friendly_and_takes_enemy_blockers() {
        // Rook d4, own pawn d6, enemy knight f4.
        let board = Board::from_fen("4k3/8/3P4/8/3R1n2/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = GeneratedMoves::default();
        generate_rook_moves(&board, 27, board.piece_at(27), &mut out);

        // up: d5 | down: d3 d2 d1 | left: c4 b4 a4 | right: e4 + capture f4
        assert_eq!(out.moves.len(), 8);
        assert_eq!(out.captures.len(), 1);
        assert_eq!(out.captures[0].to, 29);
        assert!(out.iter().all(|mv| mv.to != 43), "own pawn square is never a target");
    }
}
