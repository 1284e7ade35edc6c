//! Turn controller: the game state machine
//!
//! A [`Session`] owns the board, both participants, and the RNG, and is the
//! single entry point for hosts. It validates move requests, applies them,
//! keeps the automated player's selector synchronized with every accepted
//! move, detects terminal conditions, and emits [`GameEvent`]s.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::board::{Board, Cell, Mark};
use crate::events::{GameEvent, GameObserver};
use crate::lines::Line;
use crate::player::{Player, PlayerKind};

/// One of the two participant slots; no more than two are ever supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Machine,
}

impl Seat {
    /// The opposing seat
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Machine,
            Seat::Machine => Seat::Human,
        }
    }
}

/// Lifecycle phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game running; before the first start or after an explicit reset
    Idle,
    InProgress,
    Won,
    Draw,
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game continues; `next` is now the active participant
    Continued { next: Seat },
    /// The move completed `line`; the game is over
    Won { winner: Seat, line: Line },
    /// The move filled the board with no winner; the game is over
    Draw,
}

/// Capability to apply one automated move for the current game.
///
/// The ticket captures the session generation at issue time. Starting a new
/// game or resetting invalidates outstanding tickets, so a "thinking" move
/// the host deferred before the reset can never apply to the wrong game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    generation: u64,
}

/// The game session: board, participants, and turn state.
///
/// The human seat plays [`Mark::X`] interactively; the machine seat plays
/// [`Mark::O`] through the move-selection policy and opens every game.
/// Everything is owned exclusively by the session, so exactly one move is
/// ever in flight.
pub struct Session {
    board: Board,
    human: Player,
    machine: Player,
    active: Seat,
    move_count: usize,
    phase: Phase,
    generation: u64,
    rng: StdRng,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Session {
    /// Create a session with an OS-seeded RNG
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a session with a fixed RNG seed for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Session {
            board: Board::new(),
            human: Player::interactive("Player 1", Mark::X),
            machine: Player::automated("AI", Mark::O),
            active: Seat::Machine,
            move_count: 0,
            phase: Phase::Idle,
            generation: 0,
            rng,
            observers: Vec::new(),
        }
    }

    /// Register an observer for game events
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    fn emit(&mut self, event: &GameEvent) -> Result<()> {
        for observer in &mut self.observers {
            observer.on_event(event)?;
        }
        Ok(())
    }

    /// Start a new game, superseding any game in progress.
    ///
    /// Clears the board, resets both participants, zeroes the move count,
    /// and invalidates outstanding [`TurnTicket`]s. The machine opens, so
    /// the returned initial active seat is always [`Seat::Machine`].
    ///
    /// # Errors
    ///
    /// Only observer failures propagate; the session itself cannot reject a
    /// new game.
    pub fn start_new_game(
        &mut self,
        human_name: impl Into<String>,
        machine_name: impl Into<String>,
    ) -> Result<Seat> {
        self.generation += 1;
        self.board.clear();
        self.human.set_name(human_name);
        self.human.reset();
        self.machine.set_name(machine_name);
        self.machine.reset();
        self.move_count = 0;
        self.active = Seat::Machine;
        self.phase = Phase::InProgress;
        self.emit(&GameEvent::GameStarted {
            first: Seat::Machine,
        })?;
        Ok(self.active)
    }

    /// Return to [`Phase::Idle`] without starting a game.
    ///
    /// Terminal phases never leave automatically; this is the explicit way
    /// out. Outstanding [`TurnTicket`]s are invalidated.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.board.clear();
        self.human.reset();
        self.machine.reset();
        self.move_count = 0;
        self.active = Seat::Machine;
        self.phase = Phase::Idle;
    }

    /// Request a move for `seat` at `position`.
    ///
    /// On success the move is applied, the automated player's tracked sets
    /// are updated with whichever side moved, and a [`GameEvent`] is emitted
    /// before the outcome is returned.
    ///
    /// # Errors
    ///
    /// Rejected with no state change when the session is not in progress,
    /// it is not `seat`'s turn, or the cell is out of range or occupied.
    /// All rejections satisfy [`Error::is_invalid_move`].
    ///
    /// [`Error::is_invalid_move`]: crate::Error::is_invalid_move
    pub fn request_move(&mut self, seat: Seat, position: usize) -> Result<MoveOutcome> {
        if self.phase != Phase::InProgress {
            return Err(crate::Error::NotInProgress);
        }
        if seat != self.active {
            return Err(crate::Error::OutOfTurn {
                player: self.player(seat).name().to_string(),
            });
        }

        let mark = self.player(seat).mark();
        self.board.apply(position, mark)?;
        self.move_count += 1;

        if let Some(selector) = self.machine.selector_mut() {
            match seat {
                Seat::Machine => selector.record_own(position),
                Seat::Human => selector.record_opponent(position),
            }
        }

        self.emit(&GameEvent::MoveApplied {
            seat,
            mark,
            position,
        })?;

        if let Some(line) = self.board.winning_line(mark) {
            self.phase = Phase::Won;
            self.emit(&GameEvent::GameWon { winner: seat, line })?;
            return Ok(MoveOutcome::Won { winner: seat, line });
        }

        if self.move_count == 9 {
            self.phase = Phase::Draw;
            self.emit(&GameEvent::GameDraw)?;
            return Ok(MoveOutcome::Draw);
        }

        self.active = seat.other();
        Ok(MoveOutcome::Continued { next: self.active })
    }

    /// Issue a ticket for deferring the machine's move.
    ///
    /// Hosts that simulate a thinking delay take a ticket when the machine's
    /// turn begins and redeem it with [`play_automated`] after the delay.
    ///
    /// [`play_automated`]: Self::play_automated
    pub fn turn_ticket(&self) -> TurnTicket {
        TurnTicket {
            generation: self.generation,
        }
    }

    /// Select and apply the machine's move.
    ///
    /// Consults the move-selection policy and funnels the chosen cell
    /// through [`request_move`], so validation, selector bookkeeping, and
    /// event emission are identical for both seats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Superseded`] when `ticket` predates a reset or a new
    /// game, and the usual move rejections when no game is in progress or it
    /// is the human's turn.
    ///
    /// [`request_move`]: Self::request_move
    /// [`Error::Superseded`]: crate::Error::Superseded
    pub fn play_automated(&mut self, ticket: TurnTicket) -> Result<(usize, MoveOutcome)> {
        if ticket.generation != self.generation {
            return Err(crate::Error::Superseded);
        }
        if self.phase != Phase::InProgress {
            return Err(crate::Error::NotInProgress);
        }
        if self.active != Seat::Machine {
            return Err(crate::Error::OutOfTurn {
                player: self.machine.name().to_string(),
            });
        }

        let position = match self.machine.kind() {
            PlayerKind::Automated(selector) => selector.select_move(&mut self.rng)?,
            PlayerKind::Interactive => {
                return Err(crate::Error::OutOfTurn {
                    player: self.machine.name().to_string(),
                });
            }
        };

        let outcome = self.request_move(Seat::Machine, position)?;
        Ok((position, outcome))
    }

    /// Read-only copy of the 9 cell states, for rendering
    pub fn board_snapshot(&self) -> [Cell; 9] {
        *self.board.cells()
    }

    /// The board itself, for hosts that render via `Display`
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the session reached a terminal phase
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Draw)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of accepted moves in the current game (0-9)
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The seat whose move is expected next
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// The participant in `seat`
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Machine => &self.machine,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
