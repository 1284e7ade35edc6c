//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is out of range (must be 0-8)")]
    OutOfRange { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    Occupied { position: usize },

    #[error("invalid move: it is not {player}'s turn")]
    OutOfTurn { player: String },

    #[error("invalid move: no game in progress")]
    NotInProgress,

    #[error("automated move superseded by a newer game")]
    Superseded,

    #[error("move selector invoked with no empty cells")]
    NoAvailableCells,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a recoverable move rejection.
    ///
    /// Rejections leave the session unchanged; the host may simply report
    /// them and let the player re-attempt. Everything else signals misuse
    /// of the API or a host-side failure.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. }
                | Error::Occupied { .. }
                | Error::OutOfTurn { .. }
                | Error::NotInProgress
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_classification() {
        assert!(Error::OutOfRange { position: 12 }.is_invalid_move());
        assert!(Error::Occupied { position: 4 }.is_invalid_move());
        assert!(
            Error::OutOfTurn {
                player: "Player 1".to_string()
            }
            .is_invalid_move()
        );
        assert!(Error::NotInProgress.is_invalid_move());

        assert!(!Error::Superseded.is_invalid_move());
        assert!(!Error::NoAvailableCells.is_invalid_move());
    }
}
