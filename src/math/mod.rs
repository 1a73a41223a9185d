use cgmath::BaseFloat;
use num::{Num, NumCast};
use std::fmt;

pub mod angle;
pub mod wrap;

pub use self::angle::{d2r, r2d, wrap_deg, wrap_rad};
pub use self::wrap::{try_wrap_value, wrap_value};

/// Point with three coordinates along the X, Y and Z axes.
pub type Point3<T> = na::Point3<T>;

/// Index triple `(x, y, z)` into a 3D lattice.
pub type Index3 = (usize, usize, usize);

/// Coordinate type usable for grid points (all primitive integers and floats).
pub trait Scalar: na::Scalar + Copy + PartialOrd + Num + NumCast {
    /// Converts a lattice index into a coordinate multiplier.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not representable in `Self`.
    fn from_index(index: usize) -> Self {
        match NumCast::from(index) {
            Some(value) => value,
            None => panic!("index {} is not representable in the coordinate type", index),
        }
    }

    /// Whether `Self` is an integer type (division truncates).
    fn is_integral() -> bool {
        let one = Self::one();
        one / (one + one) == Self::zero()
    }
}

impl<T> Scalar for T where T: na::Scalar + Copy + PartialOrd + Num + NumCast {}

/// Floating point type for angle math (`f32` and `f64`).
pub trait Real: BaseFloat {}
impl<T> Real for T where T: BaseFloat {}

/// Coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All axes, in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}
