use std::ops::Mul;

use cgmath::Vector3;
use strum::EnumIter;

/// 3-dimensional axis.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Sign of a coordinate or rotation; `Pos` is `+1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}
impl Sign {
    /// Sign of a nonzero lattice coordinate, or `None` for zero.
    pub fn of(x: i32) -> Option<Self> {
        match x {
            _ if x > 0 => Some(Self::Pos),
            _ if x < 0 => Some(Self::Neg),
            _ => None,
        }
    }

    /// `+1` or `-1`.
    pub fn int(self) -> i32 {
        match self {
            Self::Pos => 1,
            Self::Neg => -1,
        }
    }
    /// `+1.0` or `-1.0`.
    pub fn float(self) -> f32 {
        self.int() as f32
    }

    /// Opposite sign.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Pos => Self::Neg,
            Self::Neg => Self::Pos,
        }
    }
}
impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs { Sign::Pos } else { Sign::Neg }
    }
}
