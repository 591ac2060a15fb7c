//! Collaborator boundaries: the camera-navigation toggle, the external
//! solver, and the turn-start observer.

use quarterturn_core::Move;

/// Camera/orbit-navigation collaborator. Only the enable toggle is visible
/// here: the gesture layer disables navigation on drag-start so that turning
/// a slice does not also rotate the camera, and re-enables it unconditionally
/// on pointer-up.
pub trait CameraNav {
    /// Enables or disables orbit navigation.
    fn set_enabled(&mut self, enabled: bool);
}

/// External cube-state solver collaborator.
///
/// The simulation reports every started quarter turn through
/// [`Solver::apply_move`] (via [`TwistListener`]), so the solver's logical
/// state tracks the visual cube in lock-step. Replaying the exact sequence
/// returned by [`Solver::solve`] must bring the solver back to its solved
/// state.
pub trait Solver {
    /// Records one quarter turn applied to the cube.
    fn apply_move(&mut self, mv: Move);
    /// Computes a move sequence that solves the current state.
    fn solve(&mut self) -> Result<Vec<Move>, SolveError>;
}

/// Failure reported by the external solver. Surfaced to the user as a no-op;
/// the grid is never modified on failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The cube is already solved.
    #[error("already solved")]
    AlreadySolved,
    /// The tracked state cannot be reached by legal moves.
    #[error("state is unreachable by legal moves")]
    Unreachable,
}

/// Observer notified synchronously when a quarter turn starts.
///
/// Notification happens at turn *start*, not completion, so logical state
/// (the solver) and visual state stay in lock-step even while an animation is
/// mid-flight. A double move notifies twice, once per quarter turn.
pub trait TwistListener {
    /// Called once per quarter turn, at turn start.
    fn twist_started(&mut self, mv: Move);
}
impl<F: FnMut(Move)> TwistListener for F {
    fn twist_started(&mut self, mv: Move) {
        self(mv);
    }
}
