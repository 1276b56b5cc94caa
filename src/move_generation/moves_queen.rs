use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::GeneratedMoves;
use crate::move_generation::moves_shared::push_slides;

/// Queen moves are the union of rook and bishop rays.
pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut GeneratedMoves) {
    push_slides(board, from, piece, &ORTHOGONAL_DIRECTIONS, out);
    push_slides(board, from, piece, &DIAGONAL_DIRECTIONS, out);
}
