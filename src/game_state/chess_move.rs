//! Move records: the unit of reversibility.
//!
//! A [`RegularMove`] carries everything needed to undo it: the mover's
//! encoding before the move, both squares, and whatever stood on the
//! destination. A [`StateFixup`] is a state-only rewrite of one square (for
//! example expiring an en-passant flag) that must happen on a ply boundary no
//! matter which regular move is chosen.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegularMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Piece,
}

impl RegularMove {
    #[inline]
    pub const fn new(piece: Piece, from: Square, to: Square, captured: Piece) -> Self {
        Self {
            piece,
            from,
            to,
            captured,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// King stepping two files from its home square; the rook moves as a side effect.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.piece.is_kind(PieceKind::King)
            && self.from == square_at(4, self.color().back_rank())
            && rank_of(self.to) == rank_of(self.from)
            && file_of(self.from).abs_diff(file_of(self.to)) == 2
    }

    /// Diagonal pawn step onto the empty square behind a pawn that just double-stepped.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.piece.is_kind(PieceKind::Pawn)
            && self.captured.is_kind(PieceKind::Pawn)
            && self.captured.is_en_passant_target()
            && rank_of(self.to) == self.color().en_passant_capture_rank()
    }

    #[inline]
    pub fn is_double_step(&self) -> bool {
        self.piece.is_kind(PieceKind::Pawn) && self.from.abs_diff(self.to) == 16
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.piece.is_kind(PieceKind::Pawn) && rank_of(self.to) == self.color().promotion_rank()
    }

    /// Square the captured piece stood on. Differs from `to` only for en passant.
    #[inline]
    pub fn captured_square(&self) -> Square {
        if self.is_en_passant() {
            square_at(file_of(self.to), rank_of(self.from))
        } else {
            self.to
        }
    }

    /// Coordinate form such as `e2e4`.
    pub fn long_algebraic(&self) -> String {
        format!("{}{}", square_name(self.from), square_name(self.to))
    }
}

impl fmt::Display for RegularMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.piece.kind().map_or("piece", PieceKind::name);
        write!(
            f,
            "{} {} from {} to {}",
            self.color(),
            kind,
            square_name(self.from).to_ascii_uppercase(),
            square_name(self.to).to_ascii_uppercase()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateFixup {
    pub square: Square,
    pub before: Piece,
    pub after: Piece,
}

/// Anything that can be applied to and taken back from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Regular(RegularMove),
    Fixup(StateFixup),
}

impl From<RegularMove> for Move {
    fn from(mv: RegularMove) -> Self {
        Move::Regular(mv)
    }
}

impl From<StateFixup> for Move {
    fn from(fixup: StateFixup) -> Self {
        Move::Fixup(fixup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light(kind: PieceKind) -> Piece {
        Piece::new(Color::Light, kind)
    }

    fn dark(kind: PieceKind) -> Piece {
        Piece::new(Color::Dark, kind)
    }

    #[test]
    fn castling_is_detected_from_king_geometry_only() {
        let short = RegularMove::new(light(PieceKind::King), 4, 6, Piece::NONE);
        let long = RegularMove::new(dark(PieceKind::King), 60, 58, Piece::NONE);
        let step = RegularMove::new(light(PieceKind::King), 7, 6, Piece::NONE);

        assert!(short.is_castling());
        assert!(long.is_castling());
        assert!(!step.is_castling(), "h1-g1 is an ordinary king step");
    }

    #[test]
    fn en_passant_captures_the_pawn_beside_the_origin() {
        // White pawn e5 takes d6, the black pawn on d5 had just double-stepped.
        let victim = dark(PieceKind::Pawn).with_moved().with_en_passant();
        let mv = RegularMove::new(light(PieceKind::Pawn).with_moved(), 36, 43, victim);

        assert!(mv.is_en_passant());
        assert_eq!(mv.captured_square(), 35);
    }

    #[test]
    fn direct_capture_of_flagged_pawn_is_not_en_passant() {
        // White pawn d3 takes the freshly double-stepped pawn on e4 directly.
        let victim = dark(PieceKind::Pawn).with_moved().with_en_passant();
        let mv = RegularMove::new(light(PieceKind::Pawn).with_moved(), 19, 28, victim);

        assert!(!mv.is_en_passant());
        assert_eq!(mv.captured_square(), 28);
    }

    #[test]
    fn display_reads_like_a_sentence() {
        let mv = RegularMove::new(light(PieceKind::Pawn), 12, 28, Piece::NONE);
        assert_eq!(mv.to_string(), "White pawn from E2 to E4");
        assert_eq!(mv.long_algebraic(), "e2e4");
        assert!(mv.is_double_step());
        assert!(!mv.is_capture());
    }
}
