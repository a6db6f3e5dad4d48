//! Error types for game state operations.

use std::fmt;

use super::Color;

/// Error type for requests made against a running game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested move is not in the current legal-move set
    IllegalMove { notation: String },
    /// Coordinates outside the 8x8 grid
    OutOfBounds { row: usize, col: usize },
    /// Undo requested with no prior moves
    EmptyUndoLog,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) is off the board (must be 0-7)")
            }
            GameError::EmptyUndoLog => write!(f, "No move to undo"),
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for coordinate construction and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Not a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            CoordError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            CoordError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for coordinate-notation move parsing ("e2e4")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// A placement that cannot start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Each color needs exactly one king
    KingCount { color: Color, found: usize },
    /// The side that just moved would have its king capturable
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s move")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string needs at least placement and side to move
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Placement must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank must describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement parsed but is not playable
    Position(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::Position(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(err: PositionError) -> Self {
        FenError::Position(err)
    }
}
