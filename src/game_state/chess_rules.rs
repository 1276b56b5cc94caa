//! Canonical chess-rule constants.
//!
//! Standard starting position plus the fixed squares involved in castling.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order of the non-pawn pieces, files a through h.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_FILE: u8 = 4;

/// Squares involved in one castling direction for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    /// Where the king lands.
    pub king_to: Square,
    /// Corner the rook starts on.
    pub rook_from: Square,
    /// Where the rook lands (the square the king crosses).
    pub rook_to: Square,
    /// Squares that must be empty and unattacked: crossed and landing squares.
    pub king_path: [Square; 2],
    /// Squares that only need to be empty (the rook's extra passage on the long side).
    pub extra_empty: Option<Square>,
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    square_at(KING_HOME_FILE, color.back_rank())
}

pub const fn short_castling(color: Color) -> CastlingLane {
    let rank = color.back_rank();
    CastlingLane {
        king_to: square_at(6, rank),
        rook_from: square_at(7, rank),
        rook_to: square_at(5, rank),
        king_path: [square_at(5, rank), square_at(6, rank)],
        extra_empty: None,
    }
}

pub const fn long_castling(color: Color) -> CastlingLane {
    let rank = color.back_rank();
    CastlingLane {
        king_to: square_at(2, rank),
        rook_from: square_at(0, rank),
        rook_to: square_at(3, rank),
        king_path: [square_at(3, rank), square_at(2, rank)],
        extra_empty: Some(square_at(1, rank)),
    }
}

/// Castling lane whose king destination is `king_to`, if any.
pub fn castling_lane_for(color: Color, king_to: Square) -> Option<CastlingLane> {
    [short_castling(color), long_castling(color)]
        .into_iter()
        .find(|lane| lane.king_to == king_to)
}
