//! Discrete model of a 3×3×3 twisty puzzle: the 27-piece grid, move
//! notation, and slice selection.
//!
//! This crate only knows about lattice positions, 90° orientations, and move
//! tokens. Continuous animation (the pivot frame, timing, gestures) lives in
//! `quarterturn_view`.

mod axis;
mod grid;
mod moves;
mod scramble;
mod slice;

pub use axis::{Axis, Sign};
pub use grid::{CELL_SPACING, CUBE_SIZE, CubeGrid, FaceColor, GAP, Piece, PieceId, Transform};
pub use moves::{Face, Move, ParseMoveError, TwistDirection};
pub use scramble::{SCRAMBLE_LENGTH, random_move, scramble};
pub use slice::{Slice, select_layer};
