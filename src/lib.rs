pub mod board;

pub use board::{
    Board, BoardBuilder, Color, Coord, GameError, GameState, GameStatus, Move, MoveMode,
    PieceKind, Square,
};
