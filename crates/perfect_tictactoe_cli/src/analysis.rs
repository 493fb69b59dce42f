//! Single-position analysis for the `best-move` command.

use perfect_tictactoe::{Board, Engine, Mark, Position, ScoredMove, SearchError};
use serde::Serialize;
use tracing::instrument;

/// The engine's verdict on one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact form (`.` for empty).
    pub board: String,
    /// Side to play.
    pub mark: Mark,
    /// The chosen cell.
    pub best: Position,
    /// 1-based id of the chosen cell.
    pub cell_id: usize,
    /// Every legal move in preference order.
    pub scores: Vec<ScoredMove>,
}

impl Analysis {
    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Best move for {}: {} (cell {})\n",
            self.mark, self.best, self.cell_id
        );
        for scored in &self.scores {
            out.push_str(&format!(
                "  {:>2} {:<14} {:>4}\n",
                scored.position.cell_id(),
                scored.position.label(),
                scored.score
            ));
        }
        out
    }
}

/// Runs the engine on `board` for `mark`.
#[instrument(skip(engine))]
pub fn analyze(engine: &Engine, board: &Board, mark: Mark) -> Result<Analysis, SearchError> {
    let best = engine.best_move(board, mark)?;
    let scores = engine.score_moves(board, mark)?;
    Ok(Analysis {
        board: board.to_string(),
        mark,
        best,
        cell_id: best.cell_id(),
        scores,
    })
}
