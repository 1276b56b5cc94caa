//! FEN-to-Board parser.
//!
//! The board has no separate castling or en-passant fields, so those FEN fields
//! are folded into the per-piece flags instead:
//! - a pawn off its starting rank is marked moved;
//! - a king on its home square is unmoved only if its side keeps some castling right;
//! - a corner rook is unmoved only if the matching castling right is present;
//! - the en-passant square flags the pawn that just double-stepped past it.
//!
//! Only the placement field is required. Side to move defaults to white and
//! missing castling or en-passant fields mean "none". Clocks are checked for
//! shape and otherwise ignored.

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, long_castling, short_castling};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingRights {
    short: [bool; 2],
    long: [bool; 2],
}

impl CastlingRights {
    fn any(&self, color: Color) -> bool {
        self.short[color.index()] || self.long[color.index()]
    }
}

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

/// Parse a FEN string into a board and the side to move.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().unwrap_or("w");
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid move clock '{clock}'")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;

    derive_moved_flags(&mut board, &rights);
    flag_en_passant_pawn(&mut board, en_passant_part)?;

    Ok((board, side_to_move))
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            if piece.is_kind(PieceKind::King) && board.king_square(piece.color()).is_some() {
                return Err(invalid(format!("more than one {} king", piece.color())));
            }

            board.set_piece(square_at(file, rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("invalid side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.short[Color::Light.index()] = true,
            'Q' => rights.long[Color::Light.index()] = true,
            'k' => rights.short[Color::Dark.index()] = true,
            'q' => rights.long[Color::Dark.index()] = true,
            _ => return Err(invalid(format!("invalid castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn derive_moved_flags(board: &mut Board, rights: &CastlingRights) {
    for square in 0..BOARD_SQUARES as Square {
        let piece = board.piece_at(square);
        let Some(kind) = piece.kind() else {
            continue;
        };
        let color = piece.color();

        let unmoved = match kind {
            PieceKind::Pawn => rank_of(square) == color.pawn_start_rank(),
            PieceKind::King => square == king_home(color) && rights.any(color),
            PieceKind::Rook => {
                (square == short_castling(color).rook_from && rights.short[color.index()])
                    || (square == long_castling(color).rook_from && rights.long[color.index()])
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
        };

        if !unmoved {
            board.set_piece(square, piece.with_moved());
        }
    }
}

fn flag_en_passant_pawn(board: &mut Board, en_passant_part: &str) -> Result<(), ChessError> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let target = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square '{en_passant_part}'")))?;

    // The pawn stands one step past the target in its own direction of travel.
    let (color, pawn_square) = match rank_of(target) {
        2 => (Color::Light, target + 8),
        5 => (Color::Dark, target - 8),
        _ => {
            return Err(invalid(format!(
                "en-passant square '{en_passant_part}' is not on rank 3 or 6"
            )))
        }
    };

    let pawn = board.piece_at(pawn_square);
    if !pawn.is_kind(PieceKind::Pawn) || pawn.color() != color {
        return Err(invalid(format!(
            "no pawn behind en-passant square '{en_passant_part}'"
        )));
    }

    board.set_piece(pawn_square, pawn.with_en_passant());
    Ok(())
}
