use std::ops::Index;

use cgmath::{Matrix3, One, Quaternion, Rotation, Vector3};
use itertools::iproduct;
use strum::IntoEnumIterator;

use crate::Face;

/// Edge length of one piece.
pub const CUBE_SIZE: f32 = 1.0;
/// Gap between adjacent pieces.
pub const GAP: f32 = 0.05;
/// Distance between the centers of adjacent pieces.
pub const CELL_SPACING: f32 = CUBE_SIZE + GAP;

/// Sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceColor {
    /// Up face.
    White,
    /// Down face.
    Yellow,
    /// Left face.
    Orange,
    /// Right face.
    Red,
    /// Front face.
    Green,
    /// Back face.
    Blue,
    /// Interior-facing faces.
    Core,
}
impl FaceColor {
    /// Standard color for stickers on `face`.
    pub fn of_face(face: Face) -> Self {
        match face {
            Face::U => Self::White,
            Face::D => Self::Yellow,
            Face::L => Self::Orange,
            Face::R => Self::Red,
            Face::F => Self::Green,
            Face::B => Self::Blue,
        }
    }
    /// sRGB value for the rendering collaborator.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [0xff, 0xff, 0xff],
            Self::Yellow => [0xff, 0xff, 0x00],
            Self::Orange => [0xff, 0x88, 0x00],
            Self::Red => [0xff, 0x00, 0x00],
            Self::Green => [0x00, 0xff, 0x00],
            Self::Blue => [0x00, 0x00, 0xff],
            Self::Core => [0x22, 0x22, 0x22],
        }
    }
}

/// World-space placement of a piece: a position and an orientation.
#[derive(Debug, Copy, Clone)]
pub struct Transform {
    /// Center position.
    pub position: Vector3<f32>,
    /// Orientation.
    pub rotation: Quaternion<f32>,
}
impl Transform {
    /// Identity transform at the origin.
    pub fn ident() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
        }
    }

    /// Nearest transform on the discrete lattice: each position component
    /// rounds to a multiple of [`CELL_SPACING`] and the orientation rounds to
    /// the nearest 90° lattice rotation. Mandatory after every turn so that
    /// float error cannot accumulate across turns.
    ///
    /// The orientation is rounded by snapping the images of the three basis
    /// vectors to integer unit vectors and rebuilding the quaternion from the
    /// snapped frame. Euler-angle rounding would hit the ±90°-pitch
    /// ambiguity, which is exactly where every rest orientation lives.
    #[must_use]
    pub fn snapped(self) -> Self {
        let position = self
            .position
            .map(|x| (x / CELL_SPACING).round() * CELL_SPACING);
        let basis = Matrix3::from_cols(
            round_unit(self.rotation.rotate_vector(Vector3::unit_x())),
            round_unit(self.rotation.rotate_vector(Vector3::unit_y())),
            round_unit(self.rotation.rotate_vector(Vector3::unit_z())),
        );
        Self {
            position,
            rotation: Quaternion::from(basis),
        }
    }
}

fn round_unit(v: Vector3<f32>) -> Vector3<f32> {
    v.map(|x| x.round())
}

/// Index of a piece in the grid's stable enumeration order.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceId(pub u8);

/// One of the 27 rigid sub-cubes.
#[derive(Debug, Clone)]
pub struct Piece {
    grid_pos: Vector3<i32>,
    transform: Transform,
    colors: [FaceColor; 6],
}
impl Piece {
    /// Current lattice coordinate; each component is in `-1..=1`.
    pub fn grid_pos(&self) -> Vector3<i32> {
        self.grid_pos
    }
    /// Current world transform. At rest this is always on the lattice.
    pub fn transform(&self) -> Transform {
        self.transform
    }
    /// Creation-time color of the sticker on `face` of this piece. Stickers
    /// rotate rigidly with the piece and are never reassigned.
    pub fn color(&self, face: Face) -> FaceColor {
        self.colors[face as usize]
    }

    /// Images of the three positive axes under the current orientation, as
    /// integer unit vectors. This is the exact, float-noise-free form of the
    /// piece's 90°-lattice orientation.
    pub fn rotated_axes(&self) -> [Vector3<i32>; 3] {
        [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()]
            .map(|u| self.transform.rotation.rotate_vector(u).map(|x| x.round() as i32))
    }
}

/// Canonical ordered collection of the 27 pieces.
///
/// Pieces are created once and live for the lifetime of the grid; only their
/// lattice coordinate and world transform change, and only through
/// [`CubeGrid::commit`].
#[derive(Debug, Clone)]
pub struct CubeGrid {
    pieces: Vec<Piece>,
}
impl Default for CubeGrid {
    fn default() -> Self {
        Self::new()
    }
}
impl CubeGrid {
    /// Constructs the solved grid: one piece at each coordinate of
    /// `{-1,0,1}³`. Outward faces get the standard color for their face;
    /// interior-facing faces get the core color.
    pub fn new() -> Self {
        let pieces = iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| {
                let grid_pos = Vector3::new(x, y, z);
                let mut colors = [FaceColor::Core; 6];
                for face in Face::iter() {
                    if grid_pos[face.axis() as usize] == face.sign().int() {
                        colors[face as usize] = FaceColor::of_face(face);
                    }
                }
                Piece {
                    grid_pos,
                    transform: Transform {
                        position: Vector3::new(x as f32, y as f32, z as f32) * CELL_SPACING,
                        rotation: Quaternion::one(),
                    },
                    colors,
                }
            })
            .collect();
        Self { pieces }
    }

    /// All 27 pieces, in stable enumeration order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Piece currently at the given lattice coordinate, if any.
    pub fn piece_at(&self, grid_pos: Vector3<i32>) -> Option<(PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .find(|(_, piece)| piece.grid_pos == grid_pos)
            .map(|(i, piece)| (PieceId(i as u8), piece))
    }

    /// Commits a completed turn for one piece: snaps the world transform to
    /// the lattice and recomputes the lattice coordinate from the snapped
    /// position. This is the only mutation path for piece state.
    pub fn commit(&mut self, id: PieceId, world: Transform) {
        let snapped = world.snapped();
        let piece = &mut self.pieces[id.0 as usize];
        piece.transform = snapped;
        piece.grid_pos = snapped.position.map(|x| (x / CELL_SPACING).round() as i32);
        log::trace!("piece {} now at {:?}", id.0, piece.grid_pos);
    }
}
impl Index<PieceId> for CubeGrid {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0 as usize]
    }
}
/// Discrete state equality: two grids compare equal iff every piece has the
/// same lattice coordinate and the same 90°-lattice orientation. Transient
/// float noise never participates (rest transforms are snapped).
impl PartialEq for CubeGrid {
    fn eq(&self, other: &Self) -> bool {
        self.pieces.len() == other.pieces.len()
            && std::iter::zip(&self.pieces, &other.pieces).all(|(a, b)| {
                a.grid_pos == b.grid_pos && a.rotated_axes() == b.rotated_axes()
            })
    }
}
impl Eq for CubeGrid {}
