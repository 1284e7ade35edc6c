//! Noughts-and-crosses game core for host applications
//!
//! This crate provides:
//! - Complete board representation with win and draw queries
//! - The fixed table of 8 winning lines
//! - A win/block/random move-selection policy for the automated player
//! - A turn-controller state machine that validates moves and emits game events
//!
//! Rendering, audio, UI text, and input capture are host concerns. A host
//! drives a [`Session`], forwards cell indices from its input layer via
//! [`Session::request_move`], schedules the opponent's turn through
//! [`Session::play_automated`], and subscribes a [`GameObserver`] for
//! presentation effects. See `src/bin/noughts.rs` for a console host.

pub mod board;
pub mod error;
pub mod events;
pub mod lines;
pub mod player;
pub mod policy;
pub mod session;

pub use board::{Board, Cell, Mark};
pub use error::{Error, Result};
pub use events::{GameEvent, GameObserver};
pub use lines::{Line, WINNING_LINES};
pub use player::{Player, PlayerKind};
pub use policy::MoveSelector;
pub use session::{MoveOutcome, Phase, Seat, Session, TurnTicket};
