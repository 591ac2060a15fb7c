use crate::{Axis, CubeGrid, Move, PieceId, Sign};

/// The pieces of one rotating layer.
#[derive(Debug, Clone)]
pub struct Slice {
    /// Rotation axis.
    pub axis: Axis,
    /// Which side of the axis the layer sits on.
    pub layer: Sign,
    /// Pieces currently in the layer.
    pub pieces: Vec<PieceId>,
}

/// Resolves the layer a move affects: the rotation axis, the layer sign, and
/// the 9 pieces whose *current* lattice coordinate along that axis matches
/// the sign. Selecting from current positions (not face identity) is what
/// makes repeated turns compose correctly.
pub fn select_layer(grid: &CubeGrid, mv: Move) -> Slice {
    let axis = mv.face.axis();
    let layer = mv.face.sign();
    let pieces = grid
        .pieces()
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.grid_pos()[axis as usize] == layer.int())
        .map(|(i, _)| PieceId(i as u8))
        .collect();
    Slice {
        axis,
        layer,
        pieces,
    }
}
