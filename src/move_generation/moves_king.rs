use crate::game_state::board::Board;
use crate::game_state::chess_move::RegularMove;
use crate::game_state::chess_rules::{king_home, long_castling, short_castling, CastlingLane};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::attack_checks::is_square_attacked;
use crate::move_generation::move_generator::GeneratedMoves;
use crate::move_generation::moves_shared::push_offsets;

/// Adjacent steps plus castling. Castling is emitted as a king move only; the
/// rook is relocated when the move is applied.
pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut GeneratedMoves) {
    push_offsets(board, from, piece, &KING_OFFSETS, out);

    let color = piece.color();
    if piece.has_moved() || from != king_home(color) || is_square_attacked(board, from, color) {
        return;
    }

    for lane in [short_castling(color), long_castling(color)] {
        if castling_lane_is_open(board, color, &lane) {
            out.push(RegularMove::new(piece, from, lane.king_to, Piece::NONE));
        }
    }
}

fn castling_lane_is_open(board: &Board, color: Color, lane: &CastlingLane) -> bool {
    let rook = board.piece_at(lane.rook_from);
    if !rook.is_kind(PieceKind::Rook) || rook.color() != color || rook.has_moved() {
        return false;
    }

    if let Some(square) = lane.extra_empty {
        if !board.piece_at(square).is_empty() {
            return false;
        }
    }

    lane.king_path
        .iter()
        .all(|&sq| board.piece_at(sq).is_empty() && !is_square_attacked(board, sq, color))
}
