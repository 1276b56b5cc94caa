//! King-safety filtering on top of pseudo-legal generation.
//!
//! Every probe here goes through a [`MoveScope`](crate::move_generation::move_scope::MoveScope),
//! so validation and status queries leave the board exactly as they found it.
//! `commit_move` is the only function in this module that changes the board
//! permanently.

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_move::{Move, RegularMove, StateFixup};
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{make_fixup, make_move, unmake_fixup, unmake_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Normal,
    InCheck,
    Stalemate,
    Checkmate,
}

/// Fixups and move applied by one committed turn, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedTurn {
    pub fixups: Vec<StateFixup>,
    pub played: RegularMove,
}

impl CommittedTurn {
    /// History entries for this turn, fixups first.
    pub fn history_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.fixups
            .iter()
            .copied()
            .map(Move::from)
            .chain(std::iter::once(Move::from(self.played)))
    }
}

/// Pseudo-legal moves of `color` that do not leave its own king attacked.
///
/// Records are expressed against the board with this ply's fixups applied,
/// which is the state they will be played from.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<RegularMove> {
    let generated = board.generate_moves(color);
    let mut scope = board.scoped(&generated.fixups);

    generated
        .iter()
        .filter(|mv| !leaves_king_attacked(&mut scope, mv))
        .copied()
        .collect()
}

/// Find the pseudo-legal move of `color` from `from` to `to` and check it is safe.
pub fn validate_move(
    board: &mut Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<RegularMove, ChessError> {
    let generated = board.generate_moves(color);
    let mut scope = board.scoped(&generated.fixups);

    let candidate = generated
        .iter()
        .find(|mv| mv.from == from && mv.to == to)
        .copied()
        .ok_or(ChessError::NoSuchMove { from, to })?;

    if leaves_king_attacked(&mut scope, &candidate) {
        return Err(ChessError::LeavesKingAttacked { from, to });
    }
    Ok(candidate)
}

pub fn player_status(board: &mut Board, color: Color) -> PlayerStatus {
    let in_check = board.is_king_attacked(color);
    let can_move = has_legal_move(board, color);

    match (in_check, can_move) {
        (true, true) => PlayerStatus::InCheck,
        (true, false) => PlayerStatus::Checkmate,
        (false, true) => PlayerStatus::Normal,
        (false, false) => PlayerStatus::Stalemate,
    }
}

pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let generated = board.generate_moves(color);
    let mut scope = board.scoped(&generated.fixups);
    let found = generated.iter().any(|mv| !leaves_king_attacked(&mut scope, mv));
    found
}

/// Validate and then permanently play a move, including this ply's fixups.
/// Nothing is changed when validation fails.
pub fn commit_move(
    board: &mut Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<CommittedTurn, ChessError> {
    let played = validate_move(board, color, from, to)?;
    let fixups = board.generate_moves(color).fixups;

    for fixup in &fixups {
        make_fixup(board, fixup);
    }
    make_move(board, &played);

    Ok(CommittedTurn { fixups, played })
}

/// Undo the most recent committed turn recorded in `history`.
///
/// Pops the last regular move together with the fixups that preceded it and
/// returns the move, or `None` if the history holds no regular move.
pub fn take_back(board: &mut Board, history: &mut Vec<Move>) -> Option<RegularMove> {
    let played = loop {
        match history.pop()? {
            Move::Regular(mv) => break mv,
            Move::Fixup(fixup) => unmake_fixup(board, &fixup),
        }
    };
    unmake_move(board, &played);

    while let Some(Move::Fixup(fixup)) = history.last().copied() {
        unmake_fixup(board, &fixup);
        history.pop();
    }
    Some(played)
}

#[inline]
fn leaves_king_attacked(board: &mut Board, mv: &RegularMove) -> bool {
    let scope = board.scoped(std::slice::from_ref(mv));
    scope.is_king_attacked(mv.color())
}
