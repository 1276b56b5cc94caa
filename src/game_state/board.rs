//! Mailbox board: 64 packed squares plus king-location tracking.
//!
//! `Board` is the single mutable resource of the engine. It is created once
//! per game and then mutated in place by real and simulated moves; search
//! never copies it. Algorithms live in `move_generation`, the methods below
//! are thin entry points onto them.

use crate::chess_errors::ChessError;
use crate::game_state::chess_move::RegularMove;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::move_generation::attack_checks::{is_king_attacked, is_square_attacked};
use crate::move_generation::legality::{
    commit_move, legal_moves, player_status, validate_move, CommittedTurn, PlayerStatus,
};
use crate::move_generation::move_generator::{generate_moves, GeneratedMoves};
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Piece; BOARD_SQUARES],
    pub(crate) king_squares: [Option<Square>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [Piece::NONE; BOARD_SQUARES],
            king_squares: [None; 2],
        }
    }

    /// Standard starting position, every piece unmoved.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.set_piece(square_at(file as u8, color.back_rank()), Piece::new(color, *kind));
            }
            for file in 0..8 {
                board.set_piece(
                    square_at(file, color.pawn_start_rank()),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Board part of a FEN string; see [`parse_fen`] for how flags are derived.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen).map(|(board, _)| board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square as usize]
    }

    #[inline]
    pub fn squares(&self) -> &[Piece; BOARD_SQUARES] {
        &self.squares
    }

    /// Place `piece` on `square` (or clear it with `Piece::NONE`), keeping the
    /// king locations in step with the squares.
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        let previous = self.squares[square as usize];
        if previous.is_kind(PieceKind::King)
            && self.king_squares[previous.color().index()] == Some(square)
        {
            self.king_squares[previous.color().index()] = None;
        }
        if piece.is_kind(PieceKind::King) {
            self.king_squares[piece.color().index()] = Some(square);
        }
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    pub fn generate_moves(&self, color: Color) -> GeneratedMoves {
        generate_moves(self, color)
    }

    /// Whether a piece of `defender` standing on `square` could be taken by the other side.
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        is_square_attacked(self, square, defender)
    }

    pub fn is_king_attacked(&self, color: Color) -> bool {
        is_king_attacked(self, color)
    }

    pub fn legal_moves(&mut self, color: Color) -> Vec<RegularMove> {
        legal_moves(self, color)
    }

    pub fn validate_move(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<RegularMove, ChessError> {
        validate_move(self, color, from, to)
    }

    pub fn is_valid_move(&mut self, color: Color, from: Square, to: Square) -> Option<RegularMove> {
        validate_move(self, color, from, to).ok()
    }

    pub fn player_status(&mut self, color: Color) -> PlayerStatus {
        player_status(self, color)
    }

    pub fn commit_move(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<CommittedTurn, ChessError> {
        commit_move(self, color, from, to)
    }

    pub fn render(&self) -> String {
        render_board(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn new_game_places_thirty_two_unmoved_pieces() {
        let board = Board::new_game();
        let occupied: Vec<Piece> = board
            .squares()
            .iter()
            .copied()
            .filter(|p| !p.is_empty())
            .collect();

        assert_eq!(occupied.len(), 32);
        assert!(occupied.iter().all(|p| !p.has_moved()));
        assert_eq!(board.king_square(Color::Light), Some(4));
        assert_eq!(board.king_square(Color::Dark), Some(60));
        assert_eq!(board.piece_at(3), Piece::new(Color::Light, PieceKind::Queen));
        assert_eq!(board.piece_at(59), Piece::new(Color::Dark, PieceKind::Queen));
    }

    #[test]
    fn new_game_equals_parsed_start_fen() {
        let parsed = Board::from_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(parsed, Board::new_game());
    }

    #[test]
    fn set_piece_tracks_king_location() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Dark, PieceKind::King);

        board.set_piece(10, king);
        assert_eq!(board.king_square(Color::Dark), Some(10));

        board.set_piece(10, Piece::NONE);
        assert_eq!(board.king_square(Color::Dark), None);
        assert_eq!(board.king_square(Color::Light), None);
    }
}
