//! Search-backed automated player.
//!
//! Wraps [`search_best_move`] with a material scorer and its own random
//! generator for tie-breaking. Seed it for reproducible games.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::players::player_trait::{Player, PlayerOutput};
use crate::search::alpha_beta::{search_best_move, SearchConfig};
use crate::search::board_scoring::MaterialScorer;

pub struct AiPlayer {
    color: Color,
    config: SearchConfig,
    scorer: MaterialScorer,
    rng: StdRng,
}

impl AiPlayer {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            config,
            scorer: MaterialScorer,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(color: Color, config: SearchConfig, seed: u64) -> Self {
        Self {
            color,
            config,
            scorer: MaterialScorer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Accepts `Depth` (at least 1) and `QuiescenceLimit` (a ply count, or
    /// `none` for unbounded). Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        let value = value.trim();

        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .parse::<u8>()
                .ok()
                .filter(|depth| *depth >= 1)
                .ok_or_else(|| ChessError::InvalidOption(format!("invalid Depth value '{value}'")))?;
            self.config.depth = depth;
            return Ok(());
        }

        if name.eq_ignore_ascii_case("QuiescenceLimit") {
            self.config.quiescence_limit = if value.eq_ignore_ascii_case("none") {
                None
            } else {
                let limit = value.parse::<u8>().map_err(|_| {
                    ChessError::InvalidOption(format!("invalid QuiescenceLimit value '{value}'"))
                })?;
                Some(limit)
            };
            return Ok(());
        }

        Err(ChessError::InvalidOption(format!("unknown option '{name}'")))
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "Backtrack AI"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<PlayerOutput, ChessError> {
        let result = search_best_move(board, self.color, self.config, &self.scorer, &mut self.rng);

        let mut out = PlayerOutput::default();
        match result.best_move {
            Some(mv) => out.info_lines.push(format!(
                "info depth {} score {} nodes {} candidates {} pv {}",
                self.config.depth,
                result.best_score,
                result.nodes,
                result.candidate_count,
                mv.long_algebraic()
            )),
            None => out.info_lines.push(format!(
                "info depth {} nodes {} string no legal move",
                self.config.depth, result.nodes
            )),
        }
        out.chosen_move = result.best_move;
        Ok(out)
    }
}
