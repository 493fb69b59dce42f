//! Text rendering of session events.

use perfect_tictactoe::{EventSink, GameEvent};

/// Collects session events as printable lines.
///
/// The interactive loop drains the lines after every command, so the
/// sink itself never touches the terminal.
#[derive(Debug, Default)]
pub struct TextSink {
    lines: Vec<String>,
    restart_visible: bool,
}

impl TextSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every line rendered so far.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Whether the last event asked for the restart control.
    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }
}

impl EventSink for TextSink {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::MarkPlaced { placement, by } => {
                self.lines.push(format!(
                    "{} placed {} at {} ({})",
                    by,
                    placement.applied.mark,
                    placement.applied.position,
                    placement.applied.position.cell_id()
                ));
                self.lines.push(placement.board.display());
            }
            // The warning status that follows carries the message
            GameEvent::MoveRejected { .. } => {}
            GameEvent::Status(status) => self.lines.push(format!("> {}", status)),
            GameEvent::RestartControl { visible } => {
                if visible && !self.restart_visible {
                    self.lines.push("Type `reset` for a new game.".to_string());
                }
                self.restart_visible = visible;
            }
            GameEvent::BoardCleared => self.lines.push("Board cleared.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfect_tictactoe::{Mark, Session};

    #[test]
    fn test_renders_moves_and_status() {
        let mut session = Session::default();
        let mut sink = TextSink::new();
        session.choose_side(Mark::X, &mut sink).unwrap();
        sink.drain();

        session.activate_cell(1, &mut sink).unwrap();
        let lines = sink.drain();

        assert_eq!(lines[0], "You placed O at Top-left (1)");
        assert_eq!(lines[2], "> X's turn");
        assert_eq!(lines[3], "Computer placed X at Center (5)");
        assert_eq!(lines[4], "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
        assert_eq!(lines[5], "> O's turn");
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn test_restart_hint_once() {
        let mut sink = TextSink::new();
        sink.emit(GameEvent::RestartControl { visible: true });
        sink.emit(GameEvent::RestartControl { visible: true });
        assert!(sink.restart_visible());
        assert_eq!(sink.drain().len(), 1);
    }
}
