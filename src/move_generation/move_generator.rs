//! Pseudo-legal move generation entry point.
//!
//! Dispatches every square owned by the requested color to its per-kind
//! generator. Output is split into three streams: quiet moves, captures, and
//! state fixups that must be applied on this ply regardless of the chosen move.
//! Nothing here checks whether the mover's own king ends up attacked; that
//! filter belongs to the caller.

use crate::game_state::board::Board;
use crate::game_state::chess_move::{RegularMove, StateFixup};
use crate::game_state::chess_types::*;
use crate::move_generation::moves_bishop::generate_bishop_moves;
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_queen::generate_queen_moves;
use crate::move_generation::moves_rook::generate_rook_moves;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedMoves {
    pub moves: Vec<RegularMove>,
    pub captures: Vec<RegularMove>,
    pub fixups: Vec<StateFixup>,
}

impl GeneratedMoves {
    /// Quiet moves followed by captures.
    pub fn iter(&self) -> impl Iterator<Item = &RegularMove> + '_ {
        self.moves.iter().chain(self.captures.iter())
    }

    /// Number of regular (non-fixup) moves.
    pub fn len(&self) -> usize {
        self.moves.len() + self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }

    /// Sort a generated move into the quiet or capture stream.
    #[inline]
    pub(crate) fn push(&mut self, mv: RegularMove) {
        if mv.is_capture() {
            self.captures.push(mv);
        } else {
            self.moves.push(mv);
        }
    }
}

pub fn generate_moves(board: &Board, color: Color) -> GeneratedMoves {
    let mut out = GeneratedMoves {
        moves: Vec::with_capacity(48),
        captures: Vec::with_capacity(16),
        fixups: Vec::new(),
    };

    for from in 0..BOARD_SQUARES as Square {
        let piece = board.piece_at(from);
        if !piece.belongs_to(color) {
            continue;
        }

        match piece.kind() {
            Some(PieceKind::Pawn) => generate_pawn_moves(board, from, piece, &mut out),
            Some(PieceKind::Rook) => generate_rook_moves(board, from, piece, &mut out),
            Some(PieceKind::Knight) => generate_knight_moves(board, from, piece, &mut out),
            Some(PieceKind::Bishop) => generate_bishop_moves(board, from, piece, &mut out),
            Some(PieceKind::Queen) => generate_queen_moves(board, from, piece, &mut out),
            Some(PieceKind::King) => generate_king_moves(board, from, piece, &mut out),
            None => {}
        }
    }

    out
}
