//! In-place application and exact reversal of move records.
//!
//! `make_move` and `unmake_move` are inverses for every record the generator
//! produces: the record's `piece` is the mover's encoding before the move and
//! `captured` is whatever it removed, so undo needs no auxiliary log. Callers
//! should go through [`MoveScope`](crate::move_generation::move_scope::MoveScope)
//! rather than pairing these by hand.

use crate::game_state::board::Board;
use crate::game_state::chess_move::{RegularMove, StateFixup};
use crate::game_state::chess_rules::castling_lane_for;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

pub fn make_move(board: &mut Board, mv: &RegularMove) {
    let color = mv.color();

    if mv.is_castling() {
        if let Some(lane) = castling_lane_for(color, mv.to) {
            let rook = board.piece_at(lane.rook_from);
            board.set_piece(lane.rook_from, Piece::NONE);
            board.set_piece(lane.rook_to, rook.with_moved());
        }
    }

    if mv.is_en_passant() {
        board.set_piece(mv.captured_square(), Piece::NONE);
    }

    let landed = if mv.is_promotion() {
        Piece::new(color, PieceKind::Queen).with_moved().with_promoted()
    } else if mv.is_double_step() {
        mv.piece.with_moved().with_en_passant()
    } else {
        mv.piece.with_moved().without_en_passant()
    };

    board.set_piece(mv.from, Piece::NONE);
    board.set_piece(mv.to, landed);
}

pub fn unmake_move(board: &mut Board, mv: &RegularMove) {
    if mv.is_en_passant() {
        board.set_piece(mv.to, Piece::NONE);
        board.set_piece(mv.captured_square(), mv.captured);
    } else {
        board.set_piece(mv.to, mv.captured);
    }
    board.set_piece(mv.from, mv.piece);

    if mv.is_castling() {
        if let Some(lane) = castling_lane_for(mv.color(), mv.to) {
            let rook = board.piece_at(lane.rook_to);
            board.set_piece(lane.rook_to, Piece::NONE);
            board.set_piece(lane.rook_from, rook.without_moved());
        }
    }
}

#[inline]
pub fn make_fixup(board: &mut Board, fixup: &StateFixup) {
    board.set_piece(fixup.square, fixup.after);
}

#[inline]
pub fn unmake_fixup(board: &mut Board, fixup: &StateFixup) {
    board.set_piece(fixup.square, fixup.before);
}
