//! Uniform random mover, used for diagnostics and as a sparring partner.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::players::player_trait::{Player, PlayerOutput};

pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<PlayerOutput, ChessError> {
        let legal_moves = board.legal_moves(self.color);

        let mut out = PlayerOutput::default();
        out.info_lines.push(format!(
            "info string random_player legal_moves {}",
            legal_moves.len()
        ));
        out.chosen_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPlayer;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::players::player_trait::Player;

    #[test]
    fn picks_only_legal_moves() {
        // The e2 pawn shields the king from the e8 rook, so it may only push.
        let mut board = Board::from_fen("4r1k1/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let mut player = RandomPlayer::with_seed(Color::Light, 11);

        for _ in 0..32 {
            let mv = player
                .choose_move(&mut board)
                .expect("random player never fails")
                .chosen_move
                .expect("white has moves");
            assert!(board.is_valid_move(Color::Light, mv.from, mv.to).is_some());
        }
    }

    #[test]
    fn stalemated_side_has_nothing_to_pick() {
        let mut board = Board::from_fen("7k/8/8/8/8/1q6/8/K7 w - - 0 1").expect("FEN should parse");
        let mut player = RandomPlayer::with_seed(Color::Light, 5);

        let out = player.choose_move(&mut board).expect("random player never fails");
        assert_eq!(out.chosen_move, None);
        assert_eq!(out.info_lines, vec!["info string random_player legal_moves 0".to_owned()]);
    }
}
