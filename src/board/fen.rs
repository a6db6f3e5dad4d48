use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, Coord, GameState, Move, PieceKind, Square, BOARD_SIZE};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Only piece placement and side to move are read. Castling,
    /// en-passant and move-counter fields may be present and are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        // FEN lists rank 8 first, which is row 0
        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= BOARD_SIZE {
                    return Err(FenError::WrongFileCount {
                        rank: BOARD_SIZE - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set(Coord::at(row, col), Square::Occupied(color, kind));
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(FenError::WrongFileCount {
                    rank: BOARD_SIZE - row,
                    files: col,
                });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(GameState::from_board(board, side_to_move)?)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement and side to move; the remaining fields are fixed placeholders.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for cells in self.board.cells() {
            let mut row = String::new();
            let mut empty = 0;
            for square in cells {
                if square.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                    empty = 0;
                }
                row.push(square.to_char());
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!("{} {} - - 0 1", rows.join("/"), active)
    }

    /// Parse a move in coordinate notation (e.g. "e2e4") against the legal set.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::GameState;
    ///
    /// let mut game = GameState::new();
    /// let mv = game.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_coordinate_notation(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if len != 4 {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        if !notation.is_ascii() {
            return Err(invalid());
        }
        let from: Coord = notation[..2].parse().map_err(|_| invalid())?;
        let to: Coord = notation[2..].parse().map_err(|_| invalid())?;

        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a coordinate-notation move and commit it in one call.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::GameState;
    ///
    /// let mut game = GameState::new();
    /// game.play("e2e4").unwrap();
    /// game.play("e7e5").unwrap();
    /// assert_eq!(game.move_log().len(), 2);
    /// ```
    pub fn play(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.commit(mv);
        Ok(mv)
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::PositionError;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn test_start_fen_matches_new_game() {
        let parsed = GameState::from_fen(START_FEN);
        assert_eq!(parsed.board(), GameState::new().board());
        assert_eq!(parsed.side_to_move(), Color::White);
        assert_eq!(GameState::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let with_castling =
            GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let bare = GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(with_castling.board(), bare.board());
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            GameState::try_from_fen("8/8/8").unwrap_err(),
            FenError::TooFewParts { found: 1 }
        );
        assert_eq!(
            GameState::try_from_fen("8/8/8 w").unwrap_err(),
            FenError::WrongRankCount { found: 3 }
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K2X w").unwrap_err(),
            FenError::InvalidPiece { char: 'X' }
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K w").unwrap_err(),
            FenError::WrongFileCount { rank: 1, files: 5 }
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/4K3 x").unwrap_err(),
            FenError::InvalidSideToMove {
                found: "x".to_string()
            }
        );
    }

    #[test]
    fn test_fen_rejects_bad_king_counts() {
        assert_eq!(
            GameState::try_from_fen("8/8/8/8/8/8/8/4K3 w").unwrap_err(),
            FenError::Position(PositionError::KingCount {
                color: Color::Black,
                found: 0
            })
        );
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/3KK3 w").unwrap_err(),
            FenError::Position(PositionError::KingCount {
                color: Color::White,
                found: 2
            })
        );
    }

    #[test]
    fn test_fen_rejects_side_not_to_move_in_check() {
        // White rook attacks the black king but it is White's turn
        assert_eq!(
            GameState::try_from_fen("4k3/8/8/8/8/8/8/K3R3 w").unwrap_err(),
            FenError::Position(PositionError::OpponentInCheck {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_fen_roundtrip_after_moves() {
        let mut game = GameState::new();
        for mv in ["e2e4", "e7e5", "g1f3"] {
            game.play(mv).unwrap();
        }
        let restored: GameState = game.to_fen().parse().unwrap();
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.side_to_move(), Color::Black);
    }

    #[test]
    fn test_parse_move_errors() {
        let mut game = GameState::new();
        assert_eq!(
            game.parse_move("e2e"),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            game.parse_move("e2z4"),
            Err(MoveParseError::InvalidSquare {
                notation: "e2z4".to_string()
            })
        );
        assert_eq!(
            game.parse_move("e2e\u{20ac}"),
            Err(MoveParseError::InvalidSquare {
                notation: "e2e\u{20ac}".to_string()
            })
        );
        assert_eq!(
            game.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove {
                notation: "e2e5".to_string()
            })
        );
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn test_play_commits() {
        let mut game = GameState::new();
        let mv = game.play("g1f3").unwrap();
        assert_eq!(mv.from(), Coord::at(7, 6));
        assert_eq!(mv.to(), Coord::at(5, 5));
        assert_eq!(
            game.piece_at(Coord::at(5, 5)),
            Square::Occupied(Color::White, PieceKind::Knight)
        );
        assert_eq!(game.side_to_move(), Color::Black);
    }
}
