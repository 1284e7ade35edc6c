//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::{self, Line};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// The state value a participant writes into a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to the cell state it writes
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The 3x3 grid of cells.
///
/// Fixed at 9 cells, never resized. Each cell transitions at most once per
/// game (empty to owned); [`Board::clear`] resets all cells for a new game.
/// The board only records occupancy; win checking lives in the line queries
/// so move application stays side-effect free beyond the single cell write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from a 9-character string ('.' or ' ' empty, 'X', 'O').
    ///
    /// Whitespace between rows is filtered out, so multi-line layouts parse
    /// too. Mostly useful for tests and hosts that construct positions.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-newline characters remain or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|&c| c != '\n' && c != '\r').collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Write `mark` into the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] if `position >= 9` and
    /// [`crate::Error::Occupied`] if the target cell is not empty. The board
    /// is unchanged on error.
    pub fn apply(&mut self, position: usize, mark: Mark) -> Result<(), crate::Error> {
        if position >= 9 {
            return Err(crate::Error::OutOfRange { position });
        }
        if self.cells[position] != Cell::Empty {
            return Err(crate::Error::Occupied { position });
        }

        self.cells[position] = mark.to_cell();
        Ok(())
    }

    /// Reset all cells to empty
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Get cell at position (0-8)
    pub fn get(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, position: usize) -> bool {
        self.cells[position] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if all 9 cells are occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Find the first winning line for `mark`, if any
    pub fn winning_line(&self, mark: Mark) -> Option<Line> {
        lines::winning_line(&self.cells, mark)
    }

    /// Check if `mark` has won
    pub fn has_won(&self, mark: Mark) -> bool {
        lines::has_won(&self.cells, mark)
    }

    /// Read-only view of all 9 cells, for rendering
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
