use crate::game_state::board::Board;
use crate::game_state::chess_move::RegularMove;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::GeneratedMoves;

/// Emit a move onto `to` unless a friendly piece stands there.
#[inline]
pub fn push_step(board: &Board, from: Square, to: Square, piece: Piece, out: &mut GeneratedMoves) {
    let target = board.piece_at(to);
    if target.is_empty() || target.color() != piece.color() {
        out.push(RegularMove::new(piece, from, to, target));
    }
}

/// Fixed-offset movers (knight, king): each offset is bounds-checked by file and rank.
pub fn push_offsets(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut GeneratedMoves,
) {
    for &(d_file, d_rank) in offsets {
        if let Some(to) = offset_square(from, d_file, d_rank) {
            push_step(board, from, to, piece, out);
        }
    }
}

/// Ray-scan each direction until the first blocker. An enemy blocker is
/// emitted as a capture, a friendly one ends the ray silently.
pub fn push_slides(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut GeneratedMoves,
) {
    for &(d_file, d_rank) in directions {
        let mut cursor = from;
        while let Some(to) = offset_square(cursor, d_file, d_rank) {
            let target = board.piece_at(to);
            if target.is_empty() {
                out.push(RegularMove::new(piece, from, to, target));
                cursor = to;
                continue;
            }
            if target.color() != piece.color() {
                out.push(RegularMove::new(piece, from, to, target));
            }
            break;
        }
    }
}
