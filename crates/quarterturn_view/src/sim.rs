use std::fmt;

use eyre::Result;
use quarterturn_core::{CubeGrid, Move, Transform, scramble};
use rand::Rng;
use web_time::{Duration, Instant};

use crate::engine::TwistEngine;
use crate::prefs::AnimationPreferences;
use crate::sequencer::MoveSequencer;
use crate::traits::{Solver, TwistListener};

/// Simulation facade: owns the grid, the twist engine, and the pending move
/// queue, and funnels every entry point (buttons, gestures, scramble, solve)
/// through the same concurrency gate.
pub struct CubeSim {
    grid: CubeGrid,
    engine: TwistEngine,
    sequencer: MoveSequencer,
    /// Animation preferences.
    pub prefs: AnimationPreferences,
    listener: Option<Box<dyn TwistListener>>,
    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}
impl Default for CubeSim {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for CubeSim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeSim")
            .field("grid", &self.grid)
            .field("engine", &self.engine)
            .field("sequencer", &self.sequencer)
            .field("prefs", &self.prefs)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
impl CubeSim {
    /// Constructs a simulation with a fresh solved grid.
    pub fn new() -> Self {
        Self {
            grid: CubeGrid::new(),
            engine: TwistEngine::new(),
            sequencer: MoveSequencer::new(),
            prefs: AnimationPreferences::default(),
            listener: None,
            last_frame_time: None,
        }
    }

    /// Latest committed grid state, not including any transient rotation.
    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    /// World transforms for all pieces this frame, for the rendering
    /// collaborator. Geometry is registered once at construction; only these
    /// transforms change per frame.
    pub fn piece_transforms(&self) -> Vec<Transform> {
        self.engine.piece_transforms(&self.grid)
    }

    /// Whether a turn is in flight.
    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }
    /// Whether a turn is in flight or queued.
    pub fn is_busy(&self) -> bool {
        self.is_animating() || self.sequencer.is_running()
    }

    /// Registers the observer notified at each turn start. The embedding
    /// application wires this to the external solver's `apply_move`.
    pub fn set_twist_listener(&mut self, listener: impl TwistListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Requests a single move at the standard duration. Returns `false` (and
    /// changes nothing) while a turn is in flight or queued.
    pub fn twist(&mut self, mv: Move) -> bool {
        if self.is_busy() {
            log::debug!("twist {mv} ignored: turn in flight");
            return false;
        }
        let duration = self.twist_duration();
        self.sequencer.enqueue([mv], duration);
        self.pump();
        true
    }

    /// Queues a scramble of random quarter turns at the fast scramble
    /// duration. Returns `false` while a turn is in flight or queued.
    pub fn scramble(&mut self, rng: &mut impl Rng) -> bool {
        if self.is_busy() {
            log::debug!("scramble ignored: turn in flight");
            return false;
        }
        let duration = Duration::from_secs_f32(self.prefs.scramble_twist_duration);
        self.sequencer.enqueue(scramble(rng), duration);
        self.pump();
        true
    }

    /// Asks the external solver for a solution and queues it for playback at
    /// the standard duration. Solver failure leaves the grid untouched; a
    /// request while busy is silently ignored.
    pub fn solve(&mut self, solver: &mut dyn Solver) -> Result<()> {
        if self.is_busy() {
            log::debug!("solve ignored: turn in flight");
            return Ok(());
        }
        let solution = solver.solve()?;
        log::info!("solver returned {} moves", solution.len());
        let duration = self.twist_duration();
        self.sequencer.enqueue(solution, duration);
        self.pump();
        Ok(())
    }

    /// Advances animations by `delta` and starts the next queued turn when
    /// the engine goes idle. Returns whether a redraw is needed.
    pub fn step(&mut self, delta: Duration) -> bool {
        let mut needs_redraw = self.engine.proceed(&mut self.grid, delta);
        needs_redraw |= self.pump();
        needs_redraw
    }

    /// Frame-loop entry point: computes the delta from the previous call and
    /// advances by it.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::ZERO,
        };
        let needs_redraw = self.step(delta);
        self.last_frame_time = needs_redraw.then_some(now);
        needs_redraw
    }

    /// Starts the next queued turn if nothing is in flight. Emits the
    /// turn-start notification so logical and visual state stay in
    /// lock-step.
    fn pump(&mut self) -> bool {
        if self.engine.is_animating() {
            return false;
        }
        let Some((mv, duration)) = self.sequencer.pop() else {
            return false;
        };
        if let Some(listener) = &mut self.listener {
            listener.twist_started(mv);
        }
        self.engine
            .start_turn(&self.grid, mv, duration, self.prefs.twist_interpolation)
    }

    fn twist_duration(&self) -> Duration {
        Duration::from_secs_f32(self.prefs.twist_duration)
    }
}
