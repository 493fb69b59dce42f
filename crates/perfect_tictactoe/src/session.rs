//! One human-versus-engine game and the events it reports.
//!
//! A [`Session`] turns input signals (side selection, cell activation,
//! reset) into state changes and pushes everything a front end needs to
//! draw into an [`EventSink`]. The core never renders anything itself.

use crate::action::Placement;
use crate::error::{GameError, MoveError};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::search::Engine;
use crate::state::GameState;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who placed a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Actor {
    /// The person at the keyboard, including the opening O they place
    /// on the engine's behalf.
    #[display("You")]
    Human,
    /// The search engine.
    #[display("Computer")]
    Engine,
}

/// Status line shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum StatusMessage {
    /// No side chosen yet.
    #[display("Select who the computer is playing as.")]
    ChooseSide,

    /// Side chosen; the engine plays this mark.
    #[display("Computer will make the best plays for {}", _0)]
    SideChosen(Mark),

    /// The human places the engine's first O.
    #[display("Place the computer's opening O.")]
    PlaceOpeningMove,

    /// Whose turn it is.
    #[display("{}'s turn", _0)]
    Turn(Mark),

    /// A mark completed a line.
    #[display("{} has won the game!", _0)]
    Won(Mark),

    /// Board full without a line.
    #[display("It's a draw.")]
    Draw,

    /// An input was rejected.
    #[display("{}", _0)]
    Warning(String),
}

/// Notification sent from a session to its front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MarkPlaced {
        /// The applied move and resulting board.
        placement: Placement,
        /// Who placed it.
        by: Actor,
    },
    /// An input was refused; nothing changed.
    MoveRejected {
        /// Why it was refused.
        reason: GameError,
    },
    /// Replace the status line.
    Status(StatusMessage),
    /// Show or hide the restart control.
    RestartControl {
        /// Whether the control should be visible.
        visible: bool,
    },
    /// Clear every cell.
    BoardCleared,
}

/// Output side of a session.
pub trait EventSink {
    /// Receives one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// A single human-versus-engine game.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    engine: Engine,
}

impl Session {
    /// Creates a session in the initial state.
    pub fn new(engine: Engine) -> Self {
        Self {
            state: GameState::new(),
            engine,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Emits the prompt a fresh session starts with.
    pub fn start(&self, sink: &mut impl EventSink) {
        sink.emit(GameEvent::Status(StatusMessage::ChooseSide));
        sink.emit(GameEvent::RestartControl { visible: false });
    }

    /// Handles a side-selection signal: the engine will play `mark`.
    ///
    /// # Errors
    ///
    /// Any [`crate::SideError`], also reported to `sink` as a warning.
    #[instrument(skip(self, sink))]
    pub fn choose_side(&mut self, mark: Mark, sink: &mut impl EventSink) -> Result<(), GameError> {
        if let Err(e) = self.state.choose_side(mark) {
            return Err(self.reject(e.into(), sink));
        }

        sink.emit(GameEvent::RestartControl { visible: false });
        sink.emit(GameEvent::Status(StatusMessage::SideChosen(mark)));
        if self.state.awaits_opening_move() {
            sink.emit(GameEvent::Status(StatusMessage::PlaceOpeningMove));
        } else {
            sink.emit(GameEvent::Status(StatusMessage::Turn(self.state.current_turn())));
        }
        Ok(())
    }

    /// Handles a cell-activation signal carrying a 1-based cell id.
    ///
    /// Applies the human's move, then lets the engine answer if it is now
    /// the engine's turn. The opening O placed for the engine does not
    /// trigger a reply.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] for the human's move, also reported to `sink`.
    /// `SearchError` cannot occur for a running game.
    #[instrument(skip(self, sink))]
    pub fn activate_cell(&mut self, cell_id: usize, sink: &mut impl EventSink) -> Result<(), GameError> {
        let Some(pos) = Position::from_cell_id(cell_id) else {
            return Err(self.reject(MoveError::InvalidCellId(cell_id).into(), sink));
        };
        self.place(pos, sink)
    }

    /// Handles a cell-activation signal carrying `(row, col)`.
    ///
    /// # Errors
    ///
    /// As [`Session::activate_cell`].
    pub fn activate_at(&mut self, row: usize, col: usize, sink: &mut impl EventSink) -> Result<(), GameError> {
        let Some(pos) = Position::from_row_col(row, col) else {
            return Err(self.reject(MoveError::InvalidCell { row, col }.into(), sink));
        };
        self.place(pos, sink)
    }

    /// Handles a reset signal.
    #[instrument(skip(self, sink))]
    pub fn reset(&mut self, sink: &mut impl EventSink) {
        self.state.reset();
        info!("Session reset");
        sink.emit(GameEvent::BoardCleared);
        self.start(sink);
    }

    fn place(&mut self, pos: Position, sink: &mut impl EventSink) -> Result<(), GameError> {
        let placement = match self.state.apply_move(pos) {
            Ok(placement) => placement,
            Err(e) => return Err(self.reject(e.into(), sink)),
        };
        self.announce(placement, Actor::Human, sink);

        if self.state.engine_to_move() {
            let mark = self.state.current_turn();
            let reply = self.engine.best_move(self.state.board(), mark)?;
            debug!(position = ?reply, %mark, "Engine reply");
            let placement = self.state.apply_move(reply)?;
            self.announce(placement, Actor::Engine, sink);
        }
        Ok(())
    }

    fn announce(&self, placement: Placement, by: Actor, sink: &mut impl EventSink) {
        sink.emit(GameEvent::MarkPlaced { placement, by });
        match placement.outcome {
            Outcome::Won(mark) => {
                sink.emit(GameEvent::Status(StatusMessage::Won(mark)));
                sink.emit(GameEvent::RestartControl { visible: true });
            }
            Outcome::Draw => {
                sink.emit(GameEvent::Status(StatusMessage::Draw));
                sink.emit(GameEvent::RestartControl { visible: true });
            }
            Outcome::InProgress => {
                sink.emit(GameEvent::Status(StatusMessage::Turn(self.state.current_turn())));
            }
        }
    }

    fn reject(&self, reason: GameError, sink: &mut impl EventSink) -> GameError {
        warn!(%reason, "Input rejected");
        sink.emit(GameEvent::MoveRejected { reason });
        sink.emit(GameEvent::Status(StatusMessage::Warning(reason.to_string())));
        reason
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Engine::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn placements(events: &[GameEvent]) -> Vec<(Position, Mark, Actor)> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::MarkPlaced { placement, by } => Some((
                    placement.applied.position,
                    placement.applied.mark,
                    *by,
                )),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_click_before_side_warns() {
        let mut session = Session::default();
        let mut events = Vec::new();

        let result = session.activate_cell(5, &mut events);

        assert_eq!(result, Err(GameError::Move(MoveError::SideNotChosen)));
        assert_eq!(session.state(), &GameState::new());
        assert!(events.contains(&GameEvent::Status(StatusMessage::Warning(
            "Choose to play as X or O first".to_string()
        ))));
    }

    #[test]
    fn test_engine_answers_human_move() {
        let mut session = Session::default();
        let mut events = Vec::new();
        session.choose_side(Mark::X, &mut events).unwrap();
        events.clear();

        session.activate_cell(1, &mut events).unwrap();

        assert_eq!(
            placements(&events),
            vec![
                (Position::TopLeft, Mark::O, Actor::Human),
                (Position::Center, Mark::X, Actor::Engine),
            ]
        );
        assert_eq!(
            events.last(),
            Some(&GameEvent::Status(StatusMessage::Turn(Mark::O)))
        );
    }

    #[test]
    fn test_opening_o_is_not_answered() {
        let mut session = Session::default();
        let mut events = Vec::new();
        session.choose_side(Mark::O, &mut events).unwrap();
        assert!(events.contains(&GameEvent::Status(StatusMessage::PlaceOpeningMove)));
        events.clear();

        session.activate_cell(5, &mut events).unwrap();
        assert_eq!(
            placements(&events),
            vec![(Position::Center, Mark::O, Actor::Human)]
        );
        assert_eq!(session.state().current_turn(), Mark::X);

        // Human X in a corner; the engine answers from the book
        events.clear();
        session.activate_cell(1, &mut events).unwrap();
        assert_eq!(
            placements(&events),
            vec![
                (Position::TopLeft, Mark::X, Actor::Human),
                (Position::BottomRight, Mark::O, Actor::Engine),
            ]
        );
    }

    #[test]
    fn test_invalid_cell_id_rejected() {
        let mut session = Session::default();
        let mut events = Vec::new();
        session.choose_side(Mark::X, &mut events).unwrap();

        assert_eq!(
            session.activate_cell(0, &mut events),
            Err(GameError::Move(MoveError::InvalidCellId(0)))
        );
        assert_eq!(
            session.activate_at(3, 0, &mut events),
            Err(GameError::Move(MoveError::InvalidCell { row: 3, col: 0 }))
        );
        assert_eq!(session.state().board(), &Board::new());
    }

    #[test]
    fn test_game_over_shows_restart_and_reset_hides_it() {
        let mut session = Session::default();
        let mut events = Vec::new();
        session.choose_side(Mark::X, &mut events).unwrap();

        // Always take the first free cell until the game ends
        while !session.state().is_terminal() {
            let id = Position::valid_moves(session.state().board())[0].cell_id();
            session.activate_cell(id, &mut events).unwrap();
        }
        assert!(events.contains(&GameEvent::RestartControl { visible: true }));

        events.clear();
        session.reset(&mut events);
        assert_eq!(
            events,
            vec![
                GameEvent::BoardCleared,
                GameEvent::Status(StatusMessage::ChooseSide),
                GameEvent::RestartControl { visible: false },
            ]
        );
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(StatusMessage::Turn(Mark::X).to_string(), "X's turn");
        assert_eq!(StatusMessage::Won(Mark::O).to_string(), "O has won the game!");
        assert_eq!(StatusMessage::Draw.to_string(), "It's a draw.");
    }
}
