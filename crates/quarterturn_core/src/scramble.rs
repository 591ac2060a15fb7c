use rand::Rng;

use crate::{Face, Move, TwistDirection};

/// Number of moves in a scramble.
pub const SCRAMBLE_LENGTH: usize = 20;

const FACES: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

/// Uniformly-random quarter-turn move (one of the 12 basic moves).
pub fn random_move(rng: &mut impl Rng) -> Move {
    let face = FACES[rng.random_range(0..FACES.len())];
    let direction = if rng.random_bool(0.5) {
        TwistDirection::Cw
    } else {
        TwistDirection::Ccw
    };
    Move::new(face, direction)
}

/// Scramble sequence: [`SCRAMBLE_LENGTH`] uniformly-random quarter turns.
pub fn scramble(rng: &mut impl Rng) -> Vec<Move> {
    (0..SCRAMBLE_LENGTH).map(|_| random_move(rng)).collect()
}
