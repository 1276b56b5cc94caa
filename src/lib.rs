//! Crate root module declarations for the backtracking chess engine.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, players, and utility helpers) so the binary, benches, and tests can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod legality;
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_scope;
    pub mod moves_bishop;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_queen;
    pub mod moves_rook;
    pub mod moves_shared;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod players {
    pub mod ai_player;
    pub mod human_player;
    pub mod player_trait;
    pub mod random_player;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod game_loop;
    pub mod render_board;
}
