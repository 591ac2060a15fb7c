//! End-to-end turn laws: animated turns, once committed, must behave exactly
//! like the discrete group operations they represent.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::{assert_eq, assert_ne};
use proptest::prelude::*;
use quarterturn_core::{CubeGrid, Face, Move, TwistDirection, random_move};
use quarterturn_view::{CubeSim, SolveError, Solver};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use web_time::Duration;

use {cgmath as _, eyre as _, float_ord as _, log as _, serde as _, thiserror as _};

/// Steps the simulation at ~60 FPS until every queued turn has committed.
fn run_to_idle(sim: &mut CubeSim) {
    let frame = Duration::from_millis(16);
    for _ in 0..100_000 {
        if !sim.is_busy() {
            return;
        }
        sim.step(frame);
    }
    panic!("simulation never went idle");
}

/// Applies a whitespace-separated move sequence, waiting out each animation.
fn apply(sim: &mut CubeSim, notation: &str) {
    for token in notation.split_whitespace() {
        let mv: Move = token.parse().unwrap();
        assert!(sim.twist(mv), "twist {mv} rejected while idle");
        run_to_idle(sim);
    }
}

#[test]
fn turn_then_inverse_restores_state() {
    let solved = CubeGrid::new();
    for face in Face::iter() {
        for direction in [TwistDirection::Cw, TwistDirection::Ccw] {
            let mv = Move::new(face, direction);
            let mut sim = CubeSim::new();
            apply(&mut sim, &mv.to_string());
            assert_ne!(*sim.grid(), solved, "{mv} should change the state");
            apply(&mut sim, &mv.inverse().to_string());
            assert_eq!(*sim.grid(), solved, "{mv} then inverse");
        }
    }
}

#[test]
fn four_quarter_turns_close() {
    let mut sim = CubeSim::new();
    apply(&mut sim, "F F F F");
    assert_eq!(*sim.grid(), CubeGrid::new());
}

#[test]
fn double_move_equals_two_singles() {
    let mut doubled = CubeSim::new();
    apply(&mut doubled, "R2");
    let mut singles = CubeSim::new();
    apply(&mut singles, "R R");
    assert_eq!(doubled.grid(), singles.grid());
    assert_ne!(*doubled.grid(), CubeGrid::new());
}

#[test]
fn sexy_move_has_order_six() {
    let mut sim = CubeSim::new();
    apply(&mut sim, "U R U' R'");
    assert_ne!(*sim.grid(), CubeGrid::new());
    for _ in 0..5 {
        apply(&mut sim, "U R U' R'");
    }
    assert_eq!(*sim.grid(), CubeGrid::new());
}

#[test]
fn turn_request_while_animating_is_ignored() {
    let mut reference = CubeSim::new();
    apply(&mut reference, "R");

    let mut sim = CubeSim::new();
    assert!(sim.twist("R".parse().unwrap()));
    // Mid-animation requests must be dropped, not queued.
    sim.step(Duration::from_millis(16));
    assert!(sim.is_animating());
    assert!(!sim.twist("U".parse().unwrap()));
    assert!(!sim.scramble(&mut ChaCha8Rng::seed_from_u64(1)));
    run_to_idle(&mut sim);

    assert_eq!(sim.grid(), reference.grid());
}

#[test]
fn listener_sees_every_quarter_turn_at_start() {
    let history = Rc::new(RefCell::new(Vec::new()));
    let mut sim = CubeSim::new();
    let sink = Rc::clone(&history);
    sim.set_twist_listener(move |mv| sink.borrow_mut().push(mv));

    apply(&mut sim, "R U2 F'");

    let expected: Vec<Move> = ["R", "U", "U", "F'"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(*history.borrow(), expected);
}

/// Solver stub that trusts the notification stream: it replays the recorded
/// history backwards, inverted, which is always a valid solution.
struct RecordingSolver {
    history: Rc<RefCell<Vec<Move>>>,
}
impl Solver for RecordingSolver {
    fn apply_move(&mut self, mv: Move) {
        self.history.borrow_mut().push(mv);
    }
    fn solve(&mut self) -> Result<Vec<Move>, SolveError> {
        let history = self.history.borrow();
        if history.is_empty() {
            return Err(SolveError::AlreadySolved);
        }
        Ok(history.iter().rev().map(|mv| mv.inverse()).collect())
    }
}

#[test]
fn scramble_then_solve_restores_the_grid() {
    let history = Rc::new(RefCell::new(Vec::new()));
    let mut sim = CubeSim::new();
    let sink = Rc::clone(&history);
    sim.set_twist_listener(move |mv| sink.borrow_mut().push(mv));

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    assert!(sim.scramble(&mut rng));
    run_to_idle(&mut sim);
    assert_ne!(*sim.grid(), CubeGrid::new());

    let mut solver = RecordingSolver {
        history: Rc::clone(&history),
    };
    sim.solve(&mut solver).unwrap();
    run_to_idle(&mut sim);
    assert_eq!(*sim.grid(), CubeGrid::new());
}

#[test]
fn solve_failure_leaves_the_grid_alone() {
    let mut sim = CubeSim::new();
    let mut solver = RecordingSolver {
        history: Rc::new(RefCell::new(Vec::new())),
    };
    assert!(sim.solve(&mut solver).is_err());
    assert!(!sim.is_busy());
    assert_eq!(*sim.grid(), CubeGrid::new());
}

#[test]
fn committed_state_stays_on_the_lattice() {
    let mut sim = CubeSim::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        apply(&mut sim, &random_move(&mut rng).to_string());
    }

    let pieces = sim.grid().pieces();
    let mut positions: Vec<[i32; 3]> =
        pieces.iter().map(|piece| piece.grid_pos().into()).collect();
    positions.sort_unstable();
    positions.dedup();
    assert_eq!(positions.len(), 27, "pieces must occupy distinct cells");

    for piece in pieces {
        let pos: [i32; 3] = piece.grid_pos().into();
        assert!(pos.iter().all(|c| (-1..=1).contains(c)), "{pos:?}");
        for axis_vec in piece.rotated_axes() {
            let v: [i32; 3] = axis_vec.into();
            assert_eq!(
                v.iter().map(|c| c.abs()).sum::<i32>(),
                1,
                "orientation axis {v:?} is not a signed unit vector",
            );
        }
    }
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    (0..6usize, any::<bool>(), any::<bool>()).prop_map(|(face, ccw, double)| Move {
        face: Face::iter().nth(face).unwrap(),
        direction: if ccw {
            TwistDirection::Ccw
        } else {
            TwistDirection::Cw
        },
        double,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_sequence_undone_in_reverse_is_solved(moves in prop::collection::vec(arbitrary_move(), 0..30)) {
        let mut sim = CubeSim::new();
        for &mv in &moves {
            apply(&mut sim, &mv.to_string());
        }
        for mv in moves.iter().rev() {
            apply(&mut sim, &mv.inverse().to_string());
        }
        prop_assert_eq!(sim.grid(), &CubeGrid::new());
    }
}
