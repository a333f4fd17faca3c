//! A wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.

use std::fmt;

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Dim, U1};
use nalgebra::storage::RawStorage;
use nalgebra::{DefaultAllocator, Matrix, OVector, Owned, RealField, Scalar, Storage};
use smallvec::SmallVec;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.
///
/// The curve's control points are stored as the matrix' columns.
pub struct BezierCurve<T, R, C, S>(pub Matrix<T, R, C, S>);

/// Wrapper around [`nalgebra::OMatrix`] interpreting it as a bezier curve.
pub type OBezierCurve<T, R, C> = BezierCurve<T, R, C, Owned<T, R, C>>;

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S> {
    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points
    pub fn degree(&self) -> usize {
        self.0.ncols() - 1
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    // Column arithemtic required in each step
    DefaultAllocator: Allocator<T, R, U1>,
{
    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de castlejau's algorithm, reducing a working copy of the control points
    /// in place until a single point is left. `t` is neither checked nor clamped.
    ///
    /// Curves with up to 8 control points don't touch the heap.
    ///
    /// # Panics
    ///
    /// If the curve has no control points.
    pub fn castlejau_eval(&self, t: T) -> OVector<T, R> {
        let mut points: SmallVec<[OVector<T, R>; 8]> = self
            .0
            .column_iter()
            .map(|column| column.clone_owned())
            .collect();

        while points.len() > 1 {
            castlejau_step(&mut points[..], t.clone());
            points.pop();
        }

        points.swap_remove(0)
    }

    /// Get every intermediate level of de castlejau's algorithm at position `t`.
    ///
    /// The first level are the control points themselves, each following level has one point
    /// less than its predecessor and the last one contains only [`castlejau_eval`]'s result.
    ///
    /// [`castlejau_eval`]: BezierCurve::castlejau_eval
    pub fn castlejau_levels(&self, t: T) -> Vec<Vec<OVector<T, R>>> {
        let mut points: Vec<_> = self
            .0
            .column_iter()
            .map(|column| column.clone_owned())
            .collect();

        let mut levels = Vec::with_capacity(points.len());
        levels.push(points.clone());
        while points.len() > 1 {
            castlejau_step(&mut points[..], t.clone());
            points.pop();
            levels.push(points.clone());
        }
        levels
    }
}

/// Runs a single step of de castlejau's algorithm in place.
///
/// Every point is replaced by the point at `t` on the line towards its successor,
/// i.e. `p + (q - p) * t`. Afterwards the first `points.len() - 1` entries form the next level.
/// The last entry is left untouched and should be dropped by the caller.
pub fn castlejau_step<T: RealField, R: Dim>(points: &mut [OVector<T, R>], t: T)
where
    DefaultAllocator: Allocator<T, R, U1>,
{
    for i in 1..points.len() {
        let column = &points[i - 1] + (&points[i] - &points[i - 1]) * t.clone();
        points[i - 1] = column;
    }
}

/* Common traits */
impl<T: RealField, R: Dim, C: Dim> Clone for OBezierCurve<T, R, C>
where
    DefaultAllocator: Allocator<T, R, C>,
{
    fn clone(&self) -> Self {
        BezierCurve(self.0.clone_owned())
    }
}
impl<T: Scalar, R: Dim, R2: Dim, C: Dim, C2: Dim, S, S2> PartialEq<BezierCurve<T, R2, C2, S2>>
    for BezierCurve<T, R, C, S>
where
    S: RawStorage<T, R, C>,
    S2: RawStorage<T, R2, C2>,
{
    #[inline]
    fn eq(&self, rhs: &BezierCurve<T, R2, C2, S2>) -> bool {
        self.0 == rhs.0
    }
}
impl<T, R, C, S: fmt::Debug> fmt::Debug for BezierCurve<T, R, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.data.fmt(formatter)
    }
}
