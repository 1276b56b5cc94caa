//! Fixed-depth negamax search with alpha-beta pruning and a capture extension.
//!
//! The whole tree is explored on one board through nested move scopes: each
//! node applies its forced fixups for the duration of its move loop, and each
//! candidate move for the duration of its subtree. Scores are always from the
//! perspective of the side to act at that node.
//!
//! A node whose depth has run out keeps searching while the move that led to it
//! was a capture, so exchanges are not cut off halfway. `quiescence_limit` caps
//! how many plies past the nominal depth that extension may run; `None` leaves
//! it unbounded.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_move::RegularMove;
use crate::game_state::chess_types::Color;
use crate::search::board_scoring::{BoardScorer, KING_VALUE, WIN_VALUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub quiescence_limit: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            quiescence_limit: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<RegularMove>,
    pub best_score: i32,
    /// Moves tied at `best_score`; the best move was drawn from these.
    pub candidate_count: usize,
    pub nodes: u64,
}

/// Per-search state threaded through the recursion.
pub struct SearchContext<'s, S: BoardScorer> {
    scorer: &'s S,
    quiescence_limit: Option<u8>,
    nodes: u64,
}

impl<'s, S: BoardScorer> SearchContext<'s, S> {
    pub fn new(scorer: &'s S, quiescence_limit: Option<u8>) -> Self {
        Self {
            scorer,
            quiescence_limit,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Static evaluation applies once depth is spent, unless the last move was
    /// a capture and the extension budget still allows another ply.
    #[inline]
    fn is_leaf(&self, depth: i32, quiescent: bool) -> bool {
        depth <= 0
            && (!quiescent
                || self
                    .quiescence_limit
                    .is_some_and(|limit| -depth >= i32::from(limit)))
    }
}

/// Pick a move for `color`. Ties at the best score are broken uniformly at
/// random with `rng`.
pub fn search_best_move<S, R>(
    board: &mut Board,
    color: Color,
    config: SearchConfig,
    scorer: &S,
    rng: &mut R,
) -> SearchResult
where
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let mut ctx = SearchContext::new(scorer, config.quiescence_limit);
    let depth = i32::from(config.depth);

    let generated = board.generate_moves(color);
    let mut fixed = board.scoped(&generated.fixups);

    let mut best = -KING_VALUE;
    let mut candidates: Vec<RegularMove> = Vec::new();

    for mv in generated.iter() {
        let mut child = fixed.scoped(std::slice::from_ref(mv));
        if child.is_king_attacked(color) {
            continue;
        }

        let score = -eval_alpha_beta(
            &mut ctx,
            &mut child,
            color.opposite(),
            depth - 1,
            -WIN_VALUE,
            -best,
            mv.is_capture(),
        );

        if score > best {
            best = score;
            candidates.clear();
            candidates.push(*mv);
        } else if score == best {
            candidates.push(*mv);
        }
    }

    let best_move = if best < -WIN_VALUE {
        None
    } else {
        candidates.choose(rng).copied()
    };

    SearchResult {
        best_move,
        best_score: best,
        candidate_count: candidates.len(),
        nodes: ctx.nodes,
    }
}

/// Negamax value of the position for `color` within the window `[alpha, beta]`.
pub fn eval_alpha_beta<S: BoardScorer>(
    ctx: &mut SearchContext<'_, S>,
    board: &mut Board,
    color: Color,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    quiescent: bool,
) -> i32 {
    ctx.nodes += 1;
    if ctx.is_leaf(depth, quiescent) {
        return ctx.scorer.score(board, color);
    }

    let generated = board.generate_moves(color);
    let mut fixed = board.scoped(&generated.fixups);
    let mut best = -WIN_VALUE;

    for mv in generated.iter() {
        if alpha > beta {
            break;
        }

        let mut child = fixed.scoped(std::slice::from_ref(mv));
        if child.is_king_attacked(color) {
            continue;
        }

        let score = -eval_alpha_beta(
            ctx,
            &mut child,
            color.opposite(),
            depth - 1,
            -beta,
            -alpha,
            mv.is_capture(),
        );
        best = best.max(score);
        alpha = alpha.max(best);
    }

    best
}

/// Unpruned negamax over the same tree as [`eval_alpha_beta`].
pub fn eval_minimax<S: BoardScorer>(
    ctx: &mut SearchContext<'_, S>,
    board: &mut Board,
    color: Color,
    depth: i32,
    quiescent: bool,
) -> i32 {
    ctx.nodes += 1;
    if ctx.is_leaf(depth, quiescent) {
        return ctx.scorer.score(board, color);
    }

    let generated = board.generate_moves(color);
    let mut fixed = board.scoped(&generated.fixups);
    let mut best = -WIN_VALUE;

    for mv in generated.iter() {
        let mut child = fixed.scoped(std::slice::from_ref(mv));
        if child.is_king_attacked(color) {
            continue;
        }

        let score = -eval_minimax(ctx, &mut child, color.opposite(), depth - 1, mv.is_capture());
        best = best.max(score);
    }

    best
}
