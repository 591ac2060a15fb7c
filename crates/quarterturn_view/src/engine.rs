use std::f32::consts::FRAC_PI_2;

use cgmath::{Quaternion, Rad, Rotation, Rotation3};
use quarterturn_core::{Axis, CubeGrid, Move, PieceId, Slice, Transform, select_layer};
use web_time::Duration;

use crate::prefs::InterpolateFn;

/// Ephemeral grouping frame for one turn.
///
/// While live, the pivot owns the gripped pieces' placement: each piece is
/// expressed relative to the pivot (captured exactly at attach time, so there
/// is no visual jump) and composed back to world space at detach. A piece's
/// transform is always relative to exactly one frame at any instant;
/// switching frames always recomputes the absolute transform at the moment of
/// transfer.
#[derive(Debug, Clone)]
struct PivotFrame {
    axis: Axis,
    /// Signed final rotation angle, counter-clockwise positive per the
    /// right-hand rule.
    target_angle: Rad<f32>,
    /// Gripped pieces with their pivot-relative transforms.
    grip: Vec<(PieceId, Transform)>,
}
impl PivotFrame {
    /// Grips a slice at the shared rotation center. The pivot starts with
    /// identity orientation at the origin, so each pivot-relative transform
    /// equals the piece's world transform at attach time.
    fn attach(grid: &CubeGrid, slice: &Slice, target_angle: Rad<f32>) -> Self {
        let grip = slice
            .pieces
            .iter()
            .map(|&id| (id, grid[id].transform()))
            .collect();
        Self {
            axis: slice.axis,
            target_angle,
            grip,
        }
    }

    /// Pivot orientation at animation fraction `t`.
    fn rotation(&self, t: f32) -> Quaternion<f32> {
        Quaternion::from_axis_angle(self.axis.unit_vec3(), self.target_angle * t)
    }

    /// Absolute world transform of a gripped piece at fraction `t`.
    fn world_transform(&self, relative: Transform, t: f32) -> Transform {
        let rotation = self.rotation(t);
        Transform {
            position: rotation.rotate_vector(relative.position),
            rotation: rotation * relative.rotation,
        }
    }
}

/// One in-flight quarter turn.
#[derive(Debug, Clone)]
struct TwistAnimation {
    /// Move being animated.
    mv: Move,
    /// Pivot frame owning the turning layer.
    pivot: PivotFrame,
    /// Total duration of the turn.
    duration: Duration,
    /// Progress of the animation, from 0.0 to 1.0.
    progress: f32,
    interpolation: InterpolateFn,
}

/// Executes slice turns as timed rigid-group rotations, at most one in
/// flight.
#[derive(Debug, Default, Clone)]
pub struct TwistEngine {
    anim: Option<TwistAnimation>,
}
impl TwistEngine {
    /// Constructs an idle engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a turn is in flight. Every entry point (UI buttons, gestures,
    /// the sequencer) must consult this accessor before starting work.
    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Starts one quarter turn. Returns `false` (and changes nothing) if a
    /// turn is already in flight.
    ///
    /// The engine only animates quarter turns; callers expand double tokens
    /// with [`Move::quarter_turns`] before starting. The `double` flag on
    /// `mv` is ignored here.
    pub fn start_turn(
        &mut self,
        grid: &CubeGrid,
        mv: Move,
        duration: Duration,
        interpolation: InterpolateFn,
    ) -> bool {
        if self.anim.is_some() {
            log::debug!("turn {mv} ignored: another turn is in flight");
            return false;
        }
        debug_assert!(!mv.double, "double tokens are expanded before the engine");

        let slice = select_layer(grid, mv);
        let target_angle = Rad(FRAC_PI_2 * mv.turn_sign().float());
        self.anim = Some(TwistAnimation {
            mv,
            pivot: PivotFrame::attach(grid, &slice, target_angle),
            duration,
            progress: 0.0,
            interpolation,
        });
        true
    }

    /// Advances the animation by `delta` and commits the turn into the grid
    /// when the interpolation reaches 1.0: each gripped piece's absolute
    /// transform is recomputed from the pivot's final orientation, snapped to
    /// the lattice, and written back; then the pivot frame is destroyed.
    ///
    /// Returns whether the pieces must be redrawn.
    pub fn proceed(&mut self, grid: &mut CubeGrid, delta: Duration) -> bool {
        let Some(anim) = &mut self.anim else {
            return false;
        };

        let mut step = delta.as_secs_f32() / anim.duration.as_secs_f32();
        // Complete instantly on a zero or otherwise degenerate duration.
        if !(0.0..1.0).contains(&step) {
            step = 1.0;
        }
        anim.progress += step;
        let finished = anim.progress >= 1.0;

        if finished && let Some(anim) = self.anim.take() {
            for &(id, relative) in &anim.pivot.grip {
                // Detach: compose out of the pivot at the exact final angle,
                // then snap. The logical grid position only changes here, so
                // readers never observe a piece mid-turn.
                grid.commit(id, anim.pivot.world_transform(relative, 1.0));
            }
            log::trace!("committed turn {}", anim.mv);
        }
        true
    }

    /// World transforms for all pieces this frame, in the grid's enumeration
    /// order. Gripped pieces are composed through the live pivot at the
    /// current eased angle; everything else reads straight from the grid.
    pub fn piece_transforms(&self, grid: &CubeGrid) -> Vec<Transform> {
        let mut transforms: Vec<Transform> =
            grid.pieces().iter().map(|piece| piece.transform()).collect();
        if let Some(anim) = &self.anim {
            let t = anim.interpolation.interpolate(anim.progress.min(1.0));
            for &(id, relative) in &anim.pivot.grip {
                transforms[id.0 as usize] = anim.pivot.world_transform(relative, t);
            }
        }
        transforms
    }
}
