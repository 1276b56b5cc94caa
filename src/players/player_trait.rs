//! Player abstraction used by the game loop.
//!
//! Anything that can pick a move for one side implements [`Player`]: the
//! search-backed AI, the random mover, and the interactive human adapter.

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_move::RegularMove;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerOutput {
    /// `None` when the player has no legal move.
    pub chosen_move: Option<RegularMove>,
    pub info_lines: Vec<String>,
}

pub trait Player {
    fn name(&self) -> &str;

    fn color(&self) -> Color;

    /// Choose a legal move for [`Player::color`]. The board may be probed but
    /// must be returned unchanged; the caller commits the move.
    fn choose_move(&mut self, board: &mut Board) -> Result<PlayerOutput, ChessError>;
}
