use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::GeneratedMoves;
use crate::move_generation::moves_shared::push_offsets;

pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut GeneratedMoves) {
    push_offsets(board, from, piece, &KNIGHT_OFFSETS, out);
}
