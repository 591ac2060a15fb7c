//! Interactive layer for the 3×3×3 puzzle: the slice-rotation engine, move
//! sequencing, and drag-gesture classification.
//!
//! Everything runs on one render/update loop. A turn is started, advanced by
//! [`CubeSim::step`] each frame, and committed (with a lattice snap) when its
//! timed interpolation reaches 1.0. The engine's `is_animating` query is the
//! sole mutual-exclusion mechanism, consulted by UI buttons, gestures, and
//! sequenced playback alike; requests that arrive while a turn is in flight
//! are silently dropped, never queued.

mod engine;
mod gesture;
mod prefs;
mod sequencer;
mod sim;
mod traits;

pub use engine::TwistEngine;
pub use gesture::{DRAG_THRESHOLD_PX, DragController, GrabInfo, classify_drag};
pub use prefs::{AnimationPreferences, InterpolateFn};
pub use sequencer::MoveSequencer;
pub use sim::CubeSim;
pub use traits::{CameraNav, SolveError, Solver, TwistListener};

#[cfg(test)]
use {proptest as _, rand_chacha as _};
