//! Semantic game events for host presentation layers
//!
//! The core never renders, plays audio, or writes UI text. Instead it emits
//! these events and the host implements the effects: a [`GameObserver`] is
//! the boundary between the game core and whatever presentation mechanism
//! the host uses (HUD text, sprite highlights, sound cues, logs).

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::board::Mark;
use crate::lines::Line;
use crate::session::Seat;

/// An event emitted by the turn controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game started; `first` is the opening participant
    GameStarted { first: Seat },
    /// A move was validated and applied to the board
    MoveApplied {
        seat: Seat,
        mark: Mark,
        position: usize,
    },
    /// The game ended with a completed line; `line` supports host highlights
    GameWon { winner: Seat, line: Line },
    /// The game ended with a full board and no winner
    GameDraw,
}

/// Observer trait for monitoring a game session.
///
/// Observers can be composed: each registered observer receives every event
/// in emission order, immediately after the corresponding state change.
/// Returning an error aborts the operation that emitted the event and
/// surfaces the error to the session caller.
pub trait GameObserver: Send {
    /// Called for every emitted event
    fn on_event(&mut self, event: &GameEvent) -> Result<()>;
}
