use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// Whether a piece of `defender` standing on `square` is attacked by the
/// opposite color. Ray scans stop at the first occupied square; knight probes
/// ignore blockers.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    for &(d_file, d_rank) in &ORTHOGONAL_DIRECTIONS {
        if let Some((blocker, distance)) = first_blocker(board, square, d_file, d_rank) {
            if is_enemy(blocker, defender)
                && (blocker.is_kind(PieceKind::Rook)
                    || blocker.is_kind(PieceKind::Queen)
                    || (distance == 1 && blocker.is_kind(PieceKind::King)))
            {
                return true;
            }
        }
    }

    for &(d_file, d_rank) in &DIAGONAL_DIRECTIONS {
        if let Some((blocker, distance)) = first_blocker(board, square, d_file, d_rank) {
            if !is_enemy(blocker, defender) {
                continue;
            }
            if blocker.is_kind(PieceKind::Bishop) || blocker.is_kind(PieceKind::Queen) {
                return true;
            }
            if distance == 1 {
                if blocker.is_kind(PieceKind::King) {
                    return true;
                }
                // Enemy pawns capture toward us, so they sit on our forward side.
                if blocker.is_kind(PieceKind::Pawn) && d_rank == defender.forward() {
                    return true;
                }
            }
        }
    }

    KNIGHT_OFFSETS.iter().any(|&(d_file, d_rank)| {
        offset_square(square, d_file, d_rank).is_some_and(|sq| {
            let piece = board.piece_at(sq);
            is_enemy(piece, defender) && piece.is_kind(PieceKind::Knight)
        })
    })
}

#[inline]
fn is_enemy(piece: Piece, defender: Color) -> bool {
    piece.belongs_to(defender.opposite())
}

/// First occupied square along a ray and how many steps away it is.
fn first_blocker(board: &Board, from: Square, d_file: i8, d_rank: i8) -> Option<(Piece, u8)> {
    let mut cursor = from;
    let mut distance = 0u8;
    while let Some(next) = offset_square(cursor, d_file, d_rank) {
        distance += 1;
        let piece = board.piece_at(next);
        if !piece.is_empty() {
            return Some((piece, distance));
        }
        cursor = next;
    }
    None
}
