use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Vector;

/// Discrete rotation in quarter turns, counterclockwise.
/// Shape transforms only support these four rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Wraps around, so `5` quarter turns is [`Orientation::Deg90`]
    pub fn from_quarter_turns(n: u8) -> Self {
        Orientation::ALL[(n % 4) as usize]
    }

    pub fn quarter_turns(&self) -> u8 {
        *self as u8
    }

    pub fn radians(&self) -> f64 {
        self.quarter_turns() as f64 * std::f64::consts::FRAC_PI_2
    }

    /// Exact quarter-turn rotation about the origin, no trigonometry involved
    pub fn rotate(&self, v: &Vector) -> Vector {
        let Vector { x, y } = *v;
        match self {
            Orientation::Deg0 => Vector::new(x, y),
            Orientation::Deg90 => Vector::new(-y, x),
            Orientation::Deg180 => Vector::new(-x, -y),
            Orientation::Deg270 => Vector::new(y, -x),
        }
    }
}

impl Add for Orientation {
    type Output = Orientation;

    fn add(self, rhs: Orientation) -> Orientation {
        Orientation::from_quarter_turns(self.quarter_turns() + rhs.quarter_turns())
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> Self {
        o.quarter_turns()
    }
}

impl From<u8> for Orientation {
    fn from(n: u8) -> Self {
        Orientation::from_quarter_turns(n)
    }
}
