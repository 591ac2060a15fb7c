use std::collections::VecDeque;

use quarterturn_core::Move;
use web_time::Duration;

/// Runs an ordered list of moves strictly one at a time.
///
/// The sequencer never starts a turn itself; [`crate::CubeSim`] drains it,
/// starting the next queued turn only once the engine reports idle. Double
/// tokens are expanded at enqueue time into two sequential quarter turns with
/// no pause between. There is no cancellation: a queued sequence always runs
/// to completion.
#[derive(Debug, Default, Clone)]
pub struct MoveSequencer {
    queue: VecDeque<(Move, Duration)>,
}
impl MoveSequencer {
    /// Constructs an empty sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any turns are still waiting to start.
    pub fn is_running(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Appends `moves`, each played over `per_move`, expanding double tokens
    /// into two quarter turns.
    pub fn enqueue(&mut self, moves: impl IntoIterator<Item = Move>, per_move: Duration) {
        for mv in moves {
            for quarter in mv.quarter_turns() {
                self.queue.push_back((quarter, per_move));
            }
        }
    }

    /// Removes and returns the next turn to start.
    pub(crate) fn pop(&mut self) -> Option<(Move, Duration)> {
        self.queue.pop_front()
    }
}
