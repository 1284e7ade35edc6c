//! Participant records
//!
//! A participant is either interactive (moves arrive from the host's input
//! layer) or automated (moves come from the selection policy). The kind is a
//! tagged variant carrying the policy state, so there is no dispatch beyond
//! a match.

use serde::{Deserialize, Serialize};

use crate::board::Mark;
use crate::policy::MoveSelector;

/// How a participant produces moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are supplied by the host (human-equivalent input)
    Interactive,
    /// Moves are computed by the win/block/random policy
    Automated(MoveSelector),
}

/// A participant: display name, assigned mark, and move source.
///
/// Players are created once per session and reused across games; a new game
/// resets their per-game state instead of recreating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
}

impl Player {
    /// Create an interactive participant
    pub fn interactive(name: impl Into<String>, mark: Mark) -> Self {
        Player {
            name: name.into(),
            mark,
            kind: PlayerKind::Interactive,
        }
    }

    /// Create an automated participant with a fresh move selector
    pub fn automated(name: impl Into<String>, mark: Mark) -> Self {
        Player {
            name: name.into(),
            mark,
            kind: PlayerKind::Automated(MoveSelector::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, PlayerKind::Interactive)
    }

    /// Clear per-game state ahead of a new game
    pub fn reset(&mut self) {
        if let PlayerKind::Automated(selector) = &mut self.kind {
            selector.reset();
        }
    }

    /// The move selector, when this participant is automated
    pub fn selector(&self) -> Option<&MoveSelector> {
        match &self.kind {
            PlayerKind::Automated(selector) => Some(selector),
            PlayerKind::Interactive => None,
        }
    }

    pub(crate) fn selector_mut(&mut self) -> Option<&mut MoveSelector> {
        match &mut self.kind {
            PlayerKind::Automated(selector) => Some(selector),
            PlayerKind::Interactive => None,
        }
    }
}
