//! Leaf-node counting over the legal move tree.
//!
//! Walks the tree with the same scoped apply/undo the search uses, so the
//! reference counts below exercise generation, application and reversal
//! together.

use crate::game_state::board::Board;
use crate::game_state::chess_move::RegularMove;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, mv: &RegularMove) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castling() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
    }
}

pub fn perft(board: &mut Board, color: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(board, color, depth, &mut counts);
    counts
}

fn perft_recurse(board: &mut Board, color: Color, depth: u8, counts: &mut PerftCounts) {
    let generated = board.generate_moves(color);
    let mut fixed = board.scoped(&generated.fixups);

    for mv in generated.iter() {
        let mut child = fixed.scoped(std::slice::from_ref(mv));
        if child.is_king_attacked(color) {
            continue;
        }

        if depth == 1 {
            counts.record_leaf(mv);
        } else {
            perft_recurse(&mut child, color.opposite(), depth - 1, counts);
        }
    }
}
