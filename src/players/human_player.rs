//! Interactive player reading coordinate moves such as `b1c3`.
//!
//! Generic over its input and output streams so the prompt loop can be driven
//! from stdin/stdout in the binary and from in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::players::player_trait::{Player, PlayerOutput};
use crate::utils::algebraic::algebraic_to_square;

pub struct HumanPlayer<R: BufRead, W: Write> {
    color: Color,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_request(&mut self) -> Result<String, ChessError> {
        write!(self.output, "\n>> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ChessError::InputClosed);
        }
        Ok(line)
    }
}

/// Parse `b1c3`, `B1C3`, `b1 c3` or `b1-c3` into origin and destination squares.
pub fn parse_move_request(text: &str) -> Result<(Square, Square), ChessError> {
    let compact: String = text
        .trim()
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-')
        .collect();

    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidMoveText(text.trim().to_owned()));
    }

    let invalid = |_| ChessError::InvalidMoveText(text.trim().to_owned());
    let from = algebraic_to_square(&compact[..2]).map_err(invalid)?;
    let to = algebraic_to_square(&compact[2..]).map_err(invalid)?;
    Ok((from, to))
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<PlayerOutput, ChessError> {
        if board.legal_moves(self.color).is_empty() {
            return Ok(PlayerOutput::default());
        }

        loop {
            let line = self.read_request()?;

            let (from, to) = match parse_move_request(&line) {
                Ok(squares) => squares,
                Err(_) => {
                    writeln!(self.output, "Error while parsing input. Try again.")?;
                    continue;
                }
            };

            match board.validate_move(self.color, from, to) {
                Ok(mv) => {
                    return Ok(PlayerOutput {
                        chosen_move: Some(mv),
                        info_lines: Vec::new(),
                    })
                }
                Err(ChessError::NoSuchMove { .. }) => {
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
                Err(ChessError::LeavesKingAttacked { .. }) => {
                    writeln!(self.output, "Invalid move, putting your king in jeopardy.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{parse_move_request, HumanPlayer};
    use crate::chess_errors::ChessError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::players::player_trait::Player;

    fn human(script: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Color::Light, Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn move_requests_accept_common_spellings() {
        assert_eq!(parse_move_request("b1c3\n").expect("plain"), (1, 18));
        assert_eq!(parse_move_request("  B1C3 ").expect("upper case"), (1, 18));
        assert_eq!(parse_move_request("b1 c3").expect("spaced"), (1, 18));
        assert_eq!(parse_move_request("b1-c3").expect("dashed"), (1, 18));

        for bad in ["", "b1", "b1c9", "z1c3", "b1c3d4", "ä1c3"] {
            assert!(
                matches!(parse_move_request(bad), Err(ChessError::InvalidMoveText(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn reprompts_until_a_legal_move_is_entered() {
        let mut board = Board::new_game();
        let mut player = human("hello\ne2e5\ne2e4\n");

        let out = player.choose_move(&mut board).expect("a move is eventually entered");
        assert_eq!(out.chosen_move.map(|mv| mv.long_algebraic()), Some("e2e4".to_owned()));
        assert_eq!(board, Board::new_game());

        let transcript = String::from_utf8(player.into_output()).expect("output is UTF-8");
        assert!(transcript.contains("Error while parsing input. Try again."));
        assert!(transcript.contains("Invalid move. Try again."));
        assert_eq!(transcript.matches(">> ").count(), 3);
    }

    #[test]
    fn rejects_moves_that_expose_the_king() {
        let mut board = Board::from_fen("4r1k1/8/8/8/8/8/3P4/3bK3 w - - 0 1").expect("FEN should parse");
        let mut player = human("e1e2\ne1d1\n");

        let out = player.choose_move(&mut board).expect("a move is eventually entered");
        assert_eq!(out.chosen_move.map(|mv| mv.long_algebraic()), Some("e1d1".to_owned()));

        let transcript = String::from_utf8(player.into_output()).expect("output is UTF-8");
        assert!(transcript.contains("Invalid move, putting your king in jeopardy."));
    }

    #[test]
    fn end_of_input_closes_the_session() {
        let mut board = Board::new_game();
        let mut player = human("e2e9\n");

        assert_eq!(player.choose_move(&mut board), Err(ChessError::InputClosed));
    }

    #[test]
    fn mated_human_is_not_prompted() {
        let mut board = Board::from_fen("k6q/6r1/8/8/8/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut player = human("");

        let out = player.choose_move(&mut board).expect("no prompt needed");
        assert_eq!(out.chosen_move, None);
        assert!(player.into_output().is_empty());
    }
}
