//! Move-selection policy for the automated player
//!
//! The policy does not observe the board directly. It tracks two disjoint
//! index sets (its own cells and the opponent's cells) plus the remaining
//! empty cells, and the turn controller keeps them synchronized with every
//! accepted move from either side.

use std::collections::HashSet;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::lines::{WINNING_LINES, line_completion};

/// Win/block/random move selection state.
///
/// Selection order:
/// 1. Complete an own line (two claimed cells, third empty) - winning move.
/// 2. Complete an opponent line - blocking move.
/// 3. Uniformly-random choice among the empty cells.
///
/// Lines are evaluated in [`WINNING_LINES`] table order and the first match
/// wins, making steps 1 and 2 deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSelector {
    claimed: HashSet<usize>,
    opponent: HashSet<usize>,
    available: Vec<usize>,
}

impl MoveSelector {
    /// Create a selector for a fresh game: all 9 cells available
    pub fn new() -> Self {
        MoveSelector {
            claimed: HashSet::new(),
            opponent: HashSet::new(),
            available: (0..9).collect(),
        }
    }

    /// Rebuild the fresh-game state, discarding all tracked moves
    pub fn reset(&mut self) {
        self.claimed.clear();
        self.opponent.clear();
        self.available = (0..9).collect();
    }

    /// Record a cell claimed by the automated player itself
    pub fn record_own(&mut self, position: usize) {
        debug_assert!(!self.opponent.contains(&position));
        self.claimed.insert(position);
        self.available.retain(|&p| p != position);
    }

    /// Record a cell claimed by the opponent
    pub fn record_opponent(&mut self, position: usize) {
        debug_assert!(!self.claimed.contains(&position));
        self.opponent.insert(position);
        self.available.retain(|&p| p != position);
    }

    /// Cells the automated player has claimed
    pub fn claimed(&self) -> &HashSet<usize> {
        &self.claimed
    }

    /// Cells the opponent has claimed
    pub fn opponent_cells(&self) -> &HashSet<usize> {
        &self.opponent
    }

    /// Currently empty cells
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    /// Pick the next cell for the automated player.
    ///
    /// Pure apart from the random fallback; the caller records the selected
    /// cell via [`record_own`] once the move is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoAvailableCells`] when no empty cells remain.
    /// Callers must not invoke the selector on a finished board; this is a
    /// programmer error, not a recoverable game condition.
    ///
    /// [`record_own`]: Self::record_own
    pub fn select_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, crate::Error> {
        if self.available.is_empty() {
            return Err(crate::Error::NoAvailableCells);
        }

        for side in [&self.claimed, &self.opponent] {
            for line in &WINNING_LINES {
                if let Some(position) = line_completion(line, side)
                    && self.available.contains(&position)
                {
                    return Ok(position);
                }
            }
        }

        self.available
            .choose(rng)
            .copied()
            .ok_or(crate::Error::NoAvailableCells)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn selector(own: &[usize], opponent: &[usize]) -> MoveSelector {
        let mut selector = MoveSelector::new();
        for &position in own {
            selector.record_own(position);
        }
        for &position in opponent {
            selector.record_opponent(position);
        }
        selector
    }

    #[test]
    fn test_new_selector_tracks_all_cells() {
        let selector = MoveSelector::new();
        assert_eq!(selector.available().len(), 9);
        assert!(selector.claimed().is_empty());
        assert!(selector.opponent_cells().is_empty());
    }

    #[test]
    fn test_recording_keeps_sets_disjoint() {
        let selector = selector(&[0, 4], &[1, 5]);
        assert!(selector.claimed().is_disjoint(selector.opponent_cells()));
        assert_eq!(selector.available().len(), 5);
        assert!(!selector.available().contains(&0));
        assert!(!selector.available().contains(&5));
    }

    #[test]
    fn test_winning_move_selected() {
        let selector = selector(&[0, 1], &[3, 4]);
        let mut rng = StdRng::seed_from_u64(0);
        // Completing the top row wins; blocking 5 would be too late
        assert_eq!(selector.select_move(&mut rng).unwrap(), 2);
    }

    #[test]
    fn test_blocking_move_selected() {
        let selector = selector(&[8], &[0, 1]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(selector.select_move(&mut rng).unwrap(), 2);
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        // Both sides threaten the middle row and top row respectively
        let selector = selector(&[3, 4], &[0, 1]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(selector.select_move(&mut rng).unwrap(), 5);
    }

    #[test]
    fn test_diagonal_completion() {
        let selector = selector(&[4, 8], &[1, 5]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(selector.select_move(&mut rng).unwrap(), 0);
    }

    #[test]
    fn test_occupied_completion_skipped() {
        // Own cells 0 and 1 would complete at 2, but the opponent holds it
        let selector = selector(&[0, 1, 4], &[2, 3, 5]);
        let mut rng = StdRng::seed_from_u64(0);
        // 1 + 4 threaten 7 via the middle column instead
        assert_eq!(selector.select_move(&mut rng).unwrap(), 7);
    }

    #[test]
    fn test_table_order_tie_break() {
        // Two winning completions exist: row (3,4) -> 5 and column (1,4) -> 7.
        // The middle row precedes the middle column in the table.
        let selector = selector(&[3, 4, 1], &[0, 2, 6]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(selector.select_move(&mut rng).unwrap(), 5);
    }

    #[test]
    fn test_random_fallback_stays_within_available() {
        let selector = MoveSelector::new();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let position = selector.select_move(&mut rng).unwrap();
            assert!(selector.available().contains(&position));
        }
    }

    #[test]
    fn test_random_fallback_reaches_every_cell() {
        let selector = MoveSelector::new();
        let mut seen = HashSet::new();
        for seed in 0..512 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(selector.select_move(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 9, "uniform fallback must cover all cells");
    }

    #[test]
    fn test_random_fallback_reaches_last_of_two_cells() {
        // No completion points at an available cell, so selection is random
        // over exactly {1, 7}. Both must be reachable.
        let selector = selector(&[0, 4, 5, 6], &[2, 3, 8]);
        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(selector.select_move(&mut rng).unwrap());
        }
        assert_eq!(seen, [1, 7].into_iter().collect());
    }

    #[test]
    fn test_select_on_full_board_is_error() {
        let mut full = MoveSelector::new();
        for position in 0..9 {
            if position % 2 == 0 {
                full.record_own(position);
            } else {
                full.record_opponent(position);
            }
        }

        let mut rng = StdRng::seed_from_u64(0);
        let err = full.select_move(&mut rng).unwrap_err();
        assert!(matches!(err, crate::Error::NoAvailableCells));
    }

    #[test]
    fn test_reset() {
        let mut selector = selector(&[0, 4], &[1]);
        selector.reset();
        assert_eq!(selector, MoveSelector::new());
    }
}
