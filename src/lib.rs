extern crate cgmath;
#[macro_use]
extern crate log;
extern crate nalgebra as na;
extern crate ndarray;
extern crate num;
extern crate thiserror;

pub mod error;
pub mod grid;
pub mod math;

pub use error::{Error, Result};
pub use grid::GridPointGenerator;
pub use math::{d2r, r2d, try_wrap_value, wrap_deg, wrap_rad, wrap_value};
pub use math::{Axis, Index3, Point3};
