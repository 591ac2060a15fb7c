use std::fmt;
use std::str::FromStr;

use smallvec::{SmallVec, smallvec};
use strum::EnumIter;

use crate::{Axis, Sign};

/// Face of the cube, named per standard cube notation.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// Right (X+).
    R = 0,
    /// Left (X-).
    L = 1,
    /// Up (Y+).
    U = 2,
    /// Down (Y-).
    D = 3,
    /// Front (Z+).
    F = 4,
    /// Back (Z-).
    B = 5,
}
impl Face {
    /// Axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Which side of its axis the face sits on.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }
    /// Face on the given side of the given axis.
    pub fn from_axis_sign(axis: Axis, sign: Sign) -> Self {
        use Face::*;

        match (axis, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => U,
            (Axis::Y, Sign::Neg) => D,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }

    /// Notation symbol for this face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }
    fn from_symbol(c: char) -> Option<Self> {
        use Face::*;

        match c {
            'R' => Some(R),
            'L' => Some(L),
            'U' => Some(U),
            'D' => Some(D),
            'F' => Some(F),
            'B' => Some(B),
            _ => None,
        }
    }
}

/// Direction of a turn, as seen looking at the turned face head-on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    Cw,
    /// Counter-clockwise.
    Ccw,
}
impl TwistDirection {
    /// Opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
        }
    }
    /// Rotation sign about the face's outward normal, counter-clockwise
    /// positive per the right-hand rule.
    pub fn sign(self) -> Sign {
        match self {
            Self::Cw => Sign::Neg,
            Self::Ccw => Sign::Pos,
        }
    }
    /// Notation suffix for this direction.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Cw => "",
            Self::Ccw => "'",
        }
    }
}

/// One move token: a face, a direction, and whether the turn is a double
/// (180°) move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face whose layer turns.
    pub face: Face,
    /// Turn direction, viewed facing the turned face.
    pub direction: TwistDirection,
    /// Whether this is a double (180°) move.
    pub double: bool,
}
impl Move {
    /// Constructs a quarter-turn move.
    pub const fn new(face: Face, direction: TwistDirection) -> Self {
        Self {
            face,
            direction,
            double: false,
        }
    }

    /// Move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }

    /// Expands this token into one or two quarter turns. A double move is
    /// always executed as two sequential single turns, never one 180°
    /// interpolation.
    pub fn quarter_turns(self) -> SmallVec<[Move; 2]> {
        let single = Move {
            double: false,
            ..self
        };
        if self.double {
            smallvec![single, single]
        } else {
            smallvec![single]
        }
    }

    /// Sign of one quarter turn of this token about `self.face.axis()`,
    /// counter-clockwise positive per the right-hand rule. Slice selection
    /// and the turn angle must both use this convention so that turns on
    /// opposite layers of the same axis rotate the right way.
    pub fn turn_sign(self) -> Sign {
        self.face.sign() * self.direction.sign()
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.symbol())?;
        if self.double {
            write!(f, "2")?;
        }
        write!(f, "{}", self.direction.symbol())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let face_char = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = Face::from_symbol(face_char).ok_or(ParseMoveError::BadFace(face_char))?;
        let (double, direction) = match chars.as_str() {
            "" => (false, TwistDirection::Cw),
            "'" => (false, TwistDirection::Ccw),
            "2" => (true, TwistDirection::Cw),
            "2'" | "'2" => (true, TwistDirection::Ccw),
            _ => return Err(ParseMoveError::BadSuffix(s.trim().to_string())),
        };
        Ok(Self {
            face,
            direction,
            double,
        })
    }
}

/// Error from parsing a move token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Empty string.
    #[error("empty move string")]
    Empty,
    /// Unknown face letter.
    #[error("unknown face {0:?}")]
    BadFace(char),
    /// Unknown characters after the face letter.
    #[error("bad move suffix in {0:?}")]
    BadSuffix(String),
}
