use crate::math::Axis;
use std::result;
use thiserror::Error;

/// Errors raised when constructing grids or wrapping values with invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Step along an axis is zero, negative or NaN.
    #[error("step along the {axis} axis must be positive")]
    NonPositiveStep { axis: Axis },

    /// End corner lies before the start corner along an axis.
    #[error("end corner lies before the start corner along the {axis} axis")]
    InvertedBounds { axis: Axis },

    /// Number of points along an axis does not fit into `usize`.
    #[error("number of points along the {axis} axis is not representable")]
    UnrepresentableSize { axis: Axis },

    /// Total number of grid points does not fit into `usize`.
    #[error("total number of grid points is not representable")]
    TooManyPoints,

    /// Wrapping range `[min, max)` is empty.
    #[error("wrapping range is empty: min must be less than max")]
    EmptyRange,

    /// Value cannot be ordered against the range bounds (NaN).
    #[error("value cannot be compared against the wrapping range")]
    Unordered,

    /// Value is too large for the range width to move it (e.g. infinity).
    #[error("value is too far outside the wrapping range to be wrapped")]
    Unbounded,
}

pub type Result<T> = result::Result<T, Error>;
