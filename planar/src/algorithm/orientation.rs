use planar_types::{Coord, Line, Scalar};

use crate::algorithm::kernel::{cross_tolerance, dot_tolerance};

/// The position of a point relative to a directed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Strictly to the right of the segment's direction, or collinear but
    /// before the start.
    Right = -1,
    /// On the segment, endpoints included (within tolerance).
    OnSegment = 0,
    /// Strictly to the left of the segment's direction, or collinear but
    /// past the end.
    Left = 1,
}

impl Orientation {
    /// The classification as seen from the reversed segment: `Left` and
    /// `Right` swap, `OnSegment` is fixed.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::OnSegment => Orientation::OnSegment,
            Orientation::Right => Orientation::Left,
        }
    }
}

/// Classify the position of `point` relative to the directed `segment`.
///
/// The cross product of the segment direction with the vector to the point
/// decides left/right; when it falls within the scale-aware tolerance the
/// point is collinear, and the dot product decides whether it lies on the
/// segment, before its start (`Right`) or past its end (`Left`).
///
/// # Degenerate segments
///
/// A segment shorter than `epsilon` classifies a coincident point (within
/// `epsilon`) as `OnSegment` and **any other point as `Right`**. The `Right`
/// half of that convention is arbitrary; callers should avoid degenerate
/// segments.
///
/// # Examples
///
/// ```
/// use planar::{classify_point, coord, Line, Orientation};
///
/// let segment = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
///
/// assert_eq!(
///     classify_point(&segment, &coord! { x: 0.0, y: 5.0 }, &1e-9),
///     Orientation::Left
/// );
/// assert_eq!(
///     classify_point(&segment, &coord! { x: 5.0, y: 0.0 }, &1e-9),
///     Orientation::OnSegment
/// );
/// ```
pub fn classify_point<T: Scalar>(segment: &Line<T>, point: &Coord<T>, epsilon: &T) -> Orientation {
    let ab = segment.delta();
    let ac = point - &segment.start;

    let ab_squared_length = ab.magnitude_squared();
    let ac_squared_length = ac.magnitude_squared();

    let epsilon_squared = epsilon.clone() * epsilon.clone();

    if ab_squared_length <= epsilon_squared {
        return if ac_squared_length <= epsilon_squared {
            Orientation::OnSegment
        } else {
            Orientation::Right
        };
    }

    let cross_value = ab.cross_product(&ac);
    let allowed_cross_error = cross_tolerance(epsilon, &ab_squared_length, &ac_squared_length);

    if cross_value.abs() <= allowed_cross_error {
        let dot_value = ab.dot_product(&ac);
        let allowed_dot_error =
            dot_tolerance(epsilon, &ab_squared_length, &ac_squared_length, &dot_value);

        let lower = -allowed_dot_error.clone();
        let upper = ab_squared_length + allowed_dot_error;
        if dot_value >= lower && dot_value <= upper {
            return Orientation::OnSegment;
        }

        return if dot_value < T::zero() {
            Orientation::Right
        } else {
            Orientation::Left
        };
    }

    if cross_value > T::zero() {
        Orientation::Left
    } else {
        Orientation::Right
    }
}
