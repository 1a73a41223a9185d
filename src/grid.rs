//! Equally spaced points on an axis-aligned 3D grid.

use crate::error::{Error, Result};
use crate::math::{Axis, Index3, Point3, Scalar};
use ndarray::Array3;
use num::{NumCast, ToPrimitive};
use std::iter::FusedIterator;

/// Point count above which bulk materialization logs a warning.
const LARGE_GRID: usize = 1 << 24;

/// Generates equally spaced points on a 3D grid.
///
/// The grid spans from `from` to `to` (both inclusive) with a fixed `step`
/// per axis. Along each axis there are `floor((to - from) / step) + 1`
/// points, so `to` itself is only hit when the range is a multiple of the
/// step.
///
/// The generator is an iterator: points are produced with Z varying
/// fastest, then Y, then X. Every point is computed from its lattice
/// index, so iterated points are identical to [`at`](Self::at) and
/// [`as_vector`](Self::as_vector) and no floating point error accumulates.
///
/// ```rust
/// # use latticekit::{GridPointGenerator, Point3};
/// let mut grid = GridPointGenerator::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 2.0, 2.0),
///     Point3::new(1.0, 1.0, 1.0),
/// );
/// assert_eq!(grid.size(), (3, 3, 3));
/// assert_eq!(grid.next(), Some(Point3::new(0.0, 0.0, 0.0)));
/// assert_eq!(grid.next(), Some(Point3::new(0.0, 0.0, 1.0)));
/// ```
#[derive(Clone, Debug)]
pub struct GridPointGenerator<T: Scalar> {
    from: Point3<T>,
    to: Point3<T>,
    step: Point3<T>,
    size: [usize; 3],
    integral: bool,

    // index of the next point to yield
    cursor: [usize; 3],
    end_reached: bool,
}

impl<T: Scalar> GridPointGenerator<T> {
    /// Creates a new grid point generator.
    ///
    /// # Panics
    ///
    /// Panics if the grid is invalid, see [`try_new`](Self::try_new).
    pub fn new(from: Point3<T>, to: Point3<T>, step: Point3<T>) -> Self {
        match Self::try_new(from, to, step) {
            Ok(grid) => grid,
            Err(err) => panic!("Invalid grid: {}", err),
        }
    }

    /// Creates a new grid point generator, validating the input.
    ///
    /// Each axis needs a positive step and `to >= from`. NaN coordinates
    /// fail one of these checks.
    pub fn try_new(from: Point3<T>, to: Point3<T>, step: Point3<T>) -> Result<Self> {
        let integral = T::is_integral();
        let mut size = [0; 3];
        for &axis in &Axis::ALL {
            let i = axis.index();
            if !(step[i] > T::zero()) {
                return Err(Error::NonPositiveStep { axis });
            }
            if !(to[i] >= from[i]) {
                return Err(Error::InvertedBounds { axis });
            }

            let ratio = if integral {
                // narrow integer types may not hold `to - from`
                match (from[i].to_i128(), to[i].to_i128(), step[i].to_i128()) {
                    (Some(start), Some(end), Some(step)) => end
                        .checked_sub(start)
                        .map(|range| range / step)
                        .and_then(|n| n.to_usize()),
                    _ => None,
                }
            } else {
                // `to_usize` truncates, which is floor for non-negative ratios.
                ((to[i] - from[i]) / step[i]).to_usize()
            };
            size[i] = ratio
                .and_then(|n| n.checked_add(1))
                .ok_or(Error::UnrepresentableSize { axis })?;
        }

        let num_elements = size[0]
            .checked_mul(size[1])
            .and_then(|n| n.checked_mul(size[2]))
            .ok_or(Error::TooManyPoints)?;

        debug!(
            "grid {:?} -> {:?} (step {:?}): {} x {} x {} = {} points",
            from, to, step, size[0], size[1], size[2], num_elements
        );

        Ok(GridPointGenerator {
            from,
            to,
            step,
            size,
            integral,
            cursor: [0; 3],
            end_reached: false,
        })
    }

    /// Restart iteration from the first point.
    pub fn reset(&mut self) {
        trace!("grid iteration reset");
        self.cursor = [0; 3];
        self.end_reached = false;
    }

    /// Number of points along each axis.
    pub fn size(&self) -> Index3 {
        (self.size[0], self.size[1], self.size[2])
    }

    /// Total number of points.
    pub fn number_of_elements(&self) -> usize {
        self.size[0] * self.size[1] * self.size[2]
    }

    pub fn from(&self) -> Point3<T> {
        self.from
    }

    pub fn to(&self) -> Point3<T> {
        self.to
    }

    pub fn step(&self) -> Point3<T> {
        self.step
    }

    /// Point at the lattice index `(x, y, z)`.
    ///
    /// Indices are not checked against [`size`](Self::size); indices past
    /// the end extrapolate beyond `to`.
    ///
    /// # Panics
    ///
    /// Panics if a resulting coordinate is not representable in `T`. This
    /// cannot happen for indices inside the grid.
    pub fn at(&self, index: Index3) -> Point3<T> {
        let (x, y, z) = index;
        Point3::new(
            self.coordinate(0, x),
            self.coordinate(1, y),
            self.coordinate(2, z),
        )
    }

    fn coordinate(&self, axis: usize, index: usize) -> T {
        if !self.integral {
            return self.from[axis] + T::from_index(index) * self.step[axis];
        }

        // `index * step` may exceed `T` even when the sum with `from` fits
        let value = self.from[axis]
            .to_i128()
            .zip(self.step[axis].to_i128())
            .and_then(|(from, step)| (index as i128).checked_mul(step)?.checked_add(from))
            .and_then(|value| <T as NumCast>::from(value));
        match value {
            Some(value) => value,
            None => panic!("grid coordinate at index {} is not representable", index),
        }
    }

    /// Lattice indices in iteration order.
    ///
    /// Independent of the iteration state of the generator.
    pub fn indices(&self) -> impl Iterator<Item = Index3> {
        let [nx, ny, nz] = self.size;
        (0..nx).flat_map(move |x| (0..ny).flat_map(move |y| (0..nz).map(move |z| (x, y, z))))
    }

    /// All points at once, nested as `[x][y][z]`.
    ///
    /// Independent of the iteration state. This might require a lot of memory!
    pub fn as_vector(&self) -> Vec<Vec<Vec<Point3<T>>>> {
        self.check_materialize();
        let [nx, ny, nz] = self.size;
        (0..nx)
            .map(|x| {
                (0..ny)
                    .map(|y| (0..nz).map(|z| self.at((x, y, z))).collect())
                    .collect()
            })
            .collect()
    }

    /// All points at once as a dense array of shape `size()`.
    ///
    /// Independent of the iteration state. This might require a lot of memory!
    pub fn as_array(&self) -> Array3<Point3<T>> {
        self.check_materialize();
        Array3::from_shape_fn(self.size(), |index| self.at(index))
    }

    fn check_materialize(&self) {
        let num_elements = self.number_of_elements();
        if num_elements > LARGE_GRID {
            warn!("materializing {} grid points", num_elements);
        }
    }

    /// Advance the cursor along `axis`; rolls over to the start and returns
    /// `false` once the axis is exhausted.
    fn advance(&mut self, axis: Axis) -> bool {
        let i = axis.index();
        self.cursor[i] += 1;
        if self.cursor[i] >= self.size[i] {
            self.cursor[i] = 0;
            return false;
        }
        true
    }

    fn remaining(&self) -> usize {
        if self.end_reached {
            return 0;
        }
        let [x, y, z] = self.cursor;
        let consumed = (x * self.size[1] + y) * self.size[2] + z;
        self.number_of_elements() - consumed
    }
}

impl<T: Scalar> Iterator for GridPointGenerator<T> {
    type Item = Point3<T>;

    fn next(&mut self) -> Option<Point3<T>> {
        if self.end_reached {
            return None;
        }

        let [x, y, z] = self.cursor;
        let point = self.at((x, y, z));

        // odometer: z is the fastest digit, carries go z -> y -> x
        if !self.advance(Axis::Z) && !self.advance(Axis::Y) && !self.advance(Axis::X) {
            trace!("grid iteration finished after {} points", self.number_of_elements());
            self.end_reached = true;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Scalar> ExactSizeIterator for GridPointGenerator<T> {}

impl<T: Scalar> FusedIterator for GridPointGenerator<T> {}
