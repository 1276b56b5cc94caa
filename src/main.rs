//! Interactive chess on the terminal.
//!
//! Run with:
//! `cargo run --release`
//! `cargo run --release -- --white ai --black random --depth 3 --seed 7 --no-board`

use std::io;

use clap::{Parser, ValueEnum};

use backtrack_chess::chess_errors::ChessError;
use backtrack_chess::game_state::board::Board;
use backtrack_chess::game_state::chess_types::Color;
use backtrack_chess::players::ai_player::AiPlayer;
use backtrack_chess::players::human_player::HumanPlayer;
use backtrack_chess::players::player_trait::Player;
use backtrack_chess::players::random_player::RandomPlayer;
use backtrack_chess::search::alpha_beta::SearchConfig;
use backtrack_chess::utils::fen_parser::parse_fen;
use backtrack_chess::utils::game_loop::{play_game, GameConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Ai,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Who plays white.
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    white: PlayerKind,

    /// Who plays black.
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    black: PlayerKind,

    /// Nominal search depth for AI players, in plies.
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Cap on plies searched past the nominal depth while captures continue.
    #[arg(long)]
    quiescence_limit: Option<u8>,

    /// Seed for AI tie-breaking and random players.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the game after this many plies.
    #[arg(long)]
    max_plies: Option<u32>,

    /// Start from this position instead of the initial setup.
    #[arg(short, long)]
    fen: Option<String>,

    /// Do not print the board before each move.
    #[arg(long)]
    no_board: bool,
}

fn build_player(kind: PlayerKind, color: Color, args: &Args) -> Box<dyn Player> {
    let config = SearchConfig {
        depth: args.depth,
        quiescence_limit: args.quiescence_limit,
    };
    let seed = args.seed.map(|seed| seed.wrapping_add(color.index() as u64));

    match (kind, seed) {
        (PlayerKind::Human, _) => Box::new(HumanPlayer::new(color, io::stdin().lock(), io::stdout())),
        (PlayerKind::Ai, Some(seed)) => Box::new(AiPlayer::with_seed(color, config, seed)),
        (PlayerKind::Ai, None) => Box::new(AiPlayer::new(color, config)),
        (PlayerKind::Random, Some(seed)) => Box::new(RandomPlayer::with_seed(color, seed)),
        (PlayerKind::Random, None) => Box::new(RandomPlayer::new(color)),
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (board, first_to_move) = match &args.fen {
        Some(fen) => parse_fen(fen).map_err(|e| e.to_string())?,
        None => (Board::new_game(), Color::Light),
    };

    let mut white = build_player(args.white, Color::Light, &args);
    let mut black = build_player(args.black, Color::Dark, &args);
    let config = GameConfig {
        max_plies: args.max_plies,
        show_board: !args.no_board,
        first_to_move,
    };

    println!("{} (white) vs {} (black)", white.name(), black.name());

    match play_game(board, white.as_mut(), black.as_mut(), config, &mut io::stdout()) {
        Ok(result) => {
            if !args.no_board {
                println!("\n{}", result.final_board.render());
            }
            println!("\n   {}\n", result.outcome);
            Ok(())
        }
        Err(ChessError::InputClosed) => {
            println!("\nInput closed, leaving the game.");
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}
