//! Pawn move generation.
//!
//! Covers single and double steps, diagonal captures and en passant. A pawn
//! still carrying its en-passant flag from the previous ply gets a fixup that
//! clears the flag, and its moves are generated from the cleared encoding so
//! they stay consistent once the fixup is applied. Promotion is handled when
//! the move is applied, not here.

use crate::game_state::board::Board;
use crate::game_state::chess_move::{RegularMove, StateFixup};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::move_generator::GeneratedMoves;

pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut GeneratedMoves) {
    let color = piece.color();
    let forward = color.forward();

    if piece.is_en_passant_target() {
        out.fixups.push(StateFixup {
            square: from,
            before: piece,
            after: piece.without_en_passant(),
        });
    }
    let piece = piece.without_en_passant();

    if let Some(one_step) = offset_square(from, 0, forward) {
        if board.piece_at(one_step).is_empty() {
            out.push(RegularMove::new(piece, from, one_step, Piece::NONE));

            if !piece.has_moved() {
                if let Some(two_step) = offset_square(from, 0, 2 * forward) {
                    if board.piece_at(two_step).is_empty() {
                        out.push(RegularMove::new(piece, from, two_step, Piece::NONE));
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        let Some(target) = offset_square(from, side, forward) else {
            continue;
        };

        let occupant = board.piece_at(target);
        if !occupant.is_empty() {
            if occupant.color() != color {
                out.push(RegularMove::new(piece, from, target, occupant));
            }
            continue;
        }

        // En passant: the victim sits beside us on our own rank.
        let Some(beside) = offset_square(from, side, 0) else {
            continue;
        };
        let neighbour = board.piece_at(beside);
        if neighbour.is_kind(PieceKind::Pawn)
            && neighbour.is_en_passant_target()
            && neighbour.color() != color
        {
            out.push(RegularMove::new(piece, from, target, neighbour));
        }
    }
}
