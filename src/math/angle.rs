use cgmath::{Angle, Deg, Rad};
use super::wrap::wrap_value;
use super::Real;

/// Convert an angle from radians to degrees.
pub fn r2d<S: Real>(rad: S) -> S {
    Deg::from(Rad(rad)).0
}

/// Convert an angle from degrees to radians.
pub fn d2r<S: Real>(deg: S) -> S {
    Rad::from(Deg(deg)).0
}

/// Wrap an angle in degrees into `[-180, 180)`.
pub fn wrap_deg<S: Real>(deg: S) -> S {
    let half_turn = Deg::<S>::turn_div_2().0;
    wrap_value(deg, -half_turn, half_turn)
}

/// Wrap an angle in radians into `[-π, π)`.
pub fn wrap_rad<S: Real>(rad: S) -> S {
    let half_turn = Rad::<S>::turn_div_2().0;
    wrap_value(rad, -half_turn, half_turn)
}
