//! Scoped move application.
//!
//! A [`MoveScope`] applies a batch of moves when it is created and takes them
//! back in reverse order when it is dropped, so every exit path of a caller
//! (early `continue`, `return`, `?`, unwinding) leaves the board as it found it.

use std::ops::{Deref, DerefMut};

use crate::game_state::board::Board;
use crate::game_state::chess_move::{Move, RegularMove, StateFixup};
use crate::move_generation::move_apply::{make_fixup, make_move, unmake_fixup, unmake_move};

/// A board mutation that can be exactly reversed.
pub trait Reversible {
    fn apply(&self, board: &mut Board);
    fn revert(&self, board: &mut Board);
}

impl Reversible for RegularMove {
    #[inline]
    fn apply(&self, board: &mut Board) {
        make_move(board, self);
    }

    #[inline]
    fn revert(&self, board: &mut Board) {
        unmake_move(board, self);
    }
}

impl Reversible for StateFixup {
    #[inline]
    fn apply(&self, board: &mut Board) {
        make_fixup(board, self);
    }

    #[inline]
    fn revert(&self, board: &mut Board) {
        unmake_fixup(board, self);
    }
}

impl Reversible for Move {
    fn apply(&self, board: &mut Board) {
        match self {
            Move::Regular(mv) => mv.apply(board),
            Move::Fixup(fixup) => fixup.apply(board),
        }
    }

    fn revert(&self, board: &mut Board) {
        match self {
            Move::Regular(mv) => mv.revert(board),
            Move::Fixup(fixup) => fixup.revert(board),
        }
    }
}

pub struct MoveScope<'b, 'm, M: Reversible> {
    board: &'b mut Board,
    moves: &'m [M],
}

impl<'b, 'm, M: Reversible> MoveScope<'b, 'm, M> {
    pub fn new(board: &'b mut Board, moves: &'m [M]) -> Self {
        for mv in moves {
            mv.apply(board);
        }
        Self { board, moves }
    }
}

impl<M: Reversible> Deref for MoveScope<'_, '_, M> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl<M: Reversible> DerefMut for MoveScope<'_, '_, M> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl<M: Reversible> Drop for MoveScope<'_, '_, M> {
    fn drop(&mut self) {
        for mv in self.moves.iter().rev() {
            mv.revert(self.board);
        }
    }
}

impl Board {
    /// Apply `moves` for the lifetime of the returned scope.
    pub fn scoped<'b, 'm, M: Reversible>(&'b mut self, moves: &'m [M]) -> MoveScope<'b, 'm, M> {
        MoveScope::new(self, moves)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_move::Move;
    use crate::game_state::chess_types::Color;

    #[test]
    fn scope_undoes_on_drop_in_reverse_order() {
        let mut board = Board::new_game();
        let before = board.clone();

        let white = board.generate_moves(Color::Light).moves[0];
        {
            let mut after_white = board.scoped(std::slice::from_ref(&white));
            let black = after_white.generate_moves(Color::Dark).moves[0];
            let after_black = after_white.scoped(std::slice::from_ref(&black));
            assert_ne!(*after_black, before);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn scope_undoes_on_early_return() {
        fn probe(board: &mut Board) -> Option<()> {
            let mv = board.generate_moves(Color::Light).moves[3];
            let scope = board.scoped(std::slice::from_ref(&mv));
            if scope.is_king_attacked(Color::Light) {
                return Some(());
            }
            None
        }

        let mut board = Board::new_game();
        assert_eq!(probe(&mut board), None);
        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn mixed_history_reverts_through_the_move_enum() {
        let mut board = Board::from_fen("4k3/8/8/8/3pP3/8/8/4K3 w - e3 0 1").expect("FEN should parse");
        let before = board.clone();

        let generated = board.generate_moves(Color::Light);
        let mut history: Vec<Move> = generated.fixups.iter().copied().map(Move::from).collect();
        history.push(Move::from(generated.moves[0]));

        {
            let scope = board.scoped(&history);
            // moves[0] is a king step; the e4 pawn stays put with its flag expired.
            assert!(!scope.piece_at(28).is_en_passant_target());
        }
        assert_eq!(board, before);
    }
}
