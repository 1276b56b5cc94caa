//! Two-player game driver.
//!
//! Alternates two [`Player`]s on one board, commits each chosen move, and
//! writes the board, engine info lines and move descriptions to a writer. A
//! player returning no move ends the game; the board status then tells
//! checkmate, stalemate and resignation apart.

use std::fmt;
use std::io::Write;

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_move::{Move, RegularMove};
use crate::game_state::chess_types::Color;
use crate::move_generation::legality::PlayerStatus;
use crate::players::player_trait::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Stop after this many plies; `None` plays until a player has no move.
    pub max_plies: Option<u32>,
    pub show_board: bool,
    pub first_to_move: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: None,
            show_board: true,
            first_to_move: Color::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate { color: Color },
    Resignation { loser: Color },
    MaxPlies,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate!"),
            GameOutcome::Stalemate { color } => {
                write!(f, "Stalemate: {color} has no legal move.")
            }
            GameOutcome::Resignation { loser } => {
                write!(f, "{loser} resigns, {} wins!", loser.opposite())
            }
            GameOutcome::MaxPlies => write!(f, "Move limit reached."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub final_board: Board,
    pub played_moves: Vec<RegularMove>,
    /// Every fixup and move committed, in order; feed to `take_back` to rewind.
    pub history: Vec<Move>,
}

pub fn play_game<W: Write>(
    mut board: Board,
    white: &mut dyn Player,
    black: &mut dyn Player,
    config: GameConfig,
    out: &mut W,
) -> Result<GameResult, ChessError> {
    let mut turn = config.first_to_move;
    let mut played_moves = Vec::<RegularMove>::new();
    let mut history = Vec::<Move>::new();

    let outcome = loop {
        if config
            .max_plies
            .is_some_and(|max| played_moves.len() >= max as usize)
        {
            break GameOutcome::MaxPlies;
        }

        if config.show_board {
            writeln!(out, "\n{}", board.render())?;
        }

        let player: &mut dyn Player = match turn {
            Color::Light => &mut *white,
            Color::Dark => &mut *black,
        };
        let output = player.choose_move(&mut board)?;
        for line in &output.info_lines {
            writeln!(out, "{line}")?;
        }

        let Some(chosen) = output.chosen_move else {
            break match board.player_status(turn) {
                PlayerStatus::Checkmate => GameOutcome::Checkmate {
                    winner: turn.opposite(),
                },
                PlayerStatus::Stalemate => GameOutcome::Stalemate { color: turn },
                PlayerStatus::Normal | PlayerStatus::InCheck => {
                    GameOutcome::Resignation { loser: turn }
                }
            };
        };

        let committed = board.commit_move(turn, chosen.from, chosen.to)?;
        writeln!(out, "{}", committed.played)?;
        history.extend(committed.history_moves());
        played_moves.push(committed.played);

        turn = turn.opposite();
    };

    Ok(GameResult {
        outcome,
        final_board: board,
        played_moves,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::{play_game, GameConfig, GameOutcome};
    use crate::chess_errors::ChessError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legality::take_back;
    use crate::players::ai_player::AiPlayer;
    use crate::players::player_trait::{Player, PlayerOutput};
    use crate::players::random_player::RandomPlayer;
    use crate::search::alpha_beta::SearchConfig;

    struct Resigner(Color);

    impl Player for Resigner {
        fn name(&self) -> &str {
            "Resigner"
        }

        fn color(&self) -> Color {
            self.0
        }

        fn choose_move(&mut self, _board: &mut Board) -> Result<PlayerOutput, ChessError> {
            Ok(PlayerOutput::default())
        }
    }

    fn quiet() -> GameConfig {
        GameConfig {
            show_board: false,
            ..GameConfig::default()
        }
    }

    #[test]
    fn ai_delivers_mate_in_one() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let mut white = AiPlayer::with_seed(Color::Light, SearchConfig::default(), 1);
        let mut black = RandomPlayer::with_seed(Color::Dark, 1);
        let mut out = Vec::<u8>::new();

        let result = play_game(board, &mut white, &mut black, quiet(), &mut out).expect("game runs");

        assert_eq!(result.outcome, GameOutcome::Checkmate { winner: Color::Light });
        assert_eq!(result.played_moves.len(), 1);
        assert_eq!(result.played_moves[0].long_algebraic(), "a1a8");

        let transcript = String::from_utf8(out).expect("output is UTF-8");
        assert!(transcript.contains("White rook from A1 to A8"));
        assert!(transcript.contains("info depth 2"));
    }

    #[test]
    fn stalemate_and_resignation_are_told_apart() {
        let stalemate = Board::from_fen("7k/8/8/8/8/1q6/8/K7 w - - 0 1").expect("FEN should parse");
        let mut white = RandomPlayer::with_seed(Color::Light, 2);
        let mut black = RandomPlayer::with_seed(Color::Dark, 2);
        let result = play_game(stalemate, &mut white, &mut black, quiet(), &mut std::io::sink())
            .expect("game runs");
        assert_eq!(result.outcome, GameOutcome::Stalemate { color: Color::Light });

        let mut quitter = Resigner(Color::Light);
        let result = play_game(Board::new_game(), &mut quitter, &mut black, quiet(), &mut std::io::sink())
            .expect("game runs");
        assert_eq!(result.outcome, GameOutcome::Resignation { loser: Color::Light });
        assert_eq!(result.outcome.to_string(), "White resigns, Black wins!");
    }

    #[test]
    fn ply_limit_stops_the_game_and_history_rewinds_it() {
        let mut white = RandomPlayer::with_seed(Color::Light, 3);
        let mut black = RandomPlayer::with_seed(Color::Dark, 4);
        let config = GameConfig {
            max_plies: Some(8),
            show_board: true,
            ..GameConfig::default()
        };
        let mut out = Vec::<u8>::new();

        let mut result =
            play_game(Board::new_game(), &mut white, &mut black, config, &mut out).expect("game runs");
        assert_eq!(result.outcome, GameOutcome::MaxPlies);
        assert_eq!(result.played_moves.len(), 8);

        let transcript = String::from_utf8(out).expect("output is UTF-8");
        assert_eq!(transcript.matches("  a b c d e f g h\n8").count(), 8);

        while take_back(&mut result.final_board, &mut result.history).is_some() {}
        assert_eq!(result.final_board, Board::new_game());
    }

    #[test]
    fn black_can_move_first() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").expect("FEN should parse");
        let mut white = RandomPlayer::with_seed(Color::Light, 5);
        let mut black = RandomPlayer::with_seed(Color::Dark, 6);
        let config = GameConfig {
            max_plies: Some(1),
            first_to_move: Color::Dark,
            ..quiet()
        };

        let result = play_game(board, &mut white, &mut black, config, &mut std::io::sink())
            .expect("game runs");
        assert_eq!(result.played_moves[0].color(), Color::Dark);
    }
}
