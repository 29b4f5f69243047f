use planar_types::{Ring, Scalar, Triangle};

use crate::algorithm::bool_ops::BooleanResult;
use crate::algorithm::kernel::orientation_det;
use crate::algorithm::winding_order::twice_signed_ring_area;

/// Signed and unsigned planar area.
///
/// # Examples
///
/// ```
/// use planar::{ring, Area};
///
/// let mut square = ring![
///     (x: 0., y: 0.),
///     (x: 5., y: 0.),
///     (x: 5., y: 6.),
///     (x: 0., y: 6.),
/// ];
///
/// assert_eq!(square.signed_area(), 30.);
///
/// square.reverse();
/// assert_eq!(square.signed_area(), -30.);
/// assert_eq!(square.unsigned_area(), 30.);
/// ```
pub trait Area<T: Scalar> {
    /// The area with the sign of the winding: positive for counter-clockwise.
    fn signed_area(&self) -> T;

    /// The absolute area.
    fn unsigned_area(&self) -> T {
        self.signed_area().abs()
    }
}

impl<T: Scalar> Area<T> for Ring<T> {
    fn signed_area(&self) -> T {
        twice_signed_ring_area(self) / (T::one() + T::one())
    }
}

impl<T: Scalar> Area<T> for Triangle<T> {
    fn signed_area(&self) -> T {
        orientation_det(&self.a, &self.b, &self.c) / (T::one() + T::one())
    }
}

impl<T: Scalar> Area<T> for BooleanResult<T> {
    /// The covered area: the outer rings' area minus the holes' area. All
    /// rings contribute their absolute area, since outers are wound
    /// counter-clockwise and holes clockwise by invariant.
    fn signed_area(&self) -> T {
        let outer_total = self
            .outers
            .iter()
            .fold(T::zero(), |total, ring| total + ring.unsigned_area());
        self.holes
            .iter()
            .fold(outer_total, |total, ring| total - ring.unsigned_area())
    }
}
