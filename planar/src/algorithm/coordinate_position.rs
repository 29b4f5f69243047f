use planar_types::{Coord, Ring, Scalar};

use crate::algorithm::kernel::cross_tolerance;
use crate::algorithm::orientation::{classify_point, Orientation};
use crate::error::Error;

/// The position of a coordinate relative to a polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoordPos {
    Outside = -1,
    OnBoundary = 0,
    Inside = 1,
}

/// Determine whether `coord` lies inside, outside, or on the boundary of a
/// **convex** ring.
///
/// Boundary containment is decided first, edge by edge, with the tolerance
/// semantics of [`classify_point`]. An interior verdict requires the signs
/// of all edge cross products to agree, near-zero crosses (under the
/// scale-aware tolerance) being ignored, so the test works for either
/// winding.
///
/// Fewer than three vertices is an error; a non-convex ring gives
/// unspecified results.
///
/// # Examples
///
/// ```
/// use planar::{coord, ring, locate_in_convex_ring, CoordPos};
///
/// let square = ring![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
///
/// assert_eq!(
///     locate_in_convex_ring(&square, &coord! { x: 1.0, y: 1.0 }, &1e-9),
///     Ok(CoordPos::Inside)
/// );
/// assert_eq!(
///     locate_in_convex_ring(&square, &coord! { x: 0.0, y: 1.0 }, &1e-9),
///     Ok(CoordPos::OnBoundary)
/// );
/// assert_eq!(
///     locate_in_convex_ring(&square, &coord! { x: 5.0, y: 5.0 }, &1e-9),
///     Ok(CoordPos::Outside)
/// );
/// ```
pub fn locate_in_convex_ring<T: Scalar>(
    ring: &Ring<T>,
    coord: &Coord<T>,
    epsilon: &T,
) -> Result<CoordPos, Error> {
    if ring.len() < 3 {
        return Err(Error::InsufficientVertices {
            required: 3,
            found: ring.len(),
        });
    }
    Ok(convex_position(ring, coord, epsilon))
}

/// Determine whether `coord` lies inside, outside, or on the boundary of an
/// arbitrary simple ring, by winding number.
///
/// Fewer than three vertices is an error.
pub fn locate_in_ring<T: Scalar>(
    ring: &Ring<T>,
    coord: &Coord<T>,
    epsilon: &T,
) -> Result<CoordPos, Error> {
    if ring.len() < 3 {
        return Err(Error::InsufficientVertices {
            required: 3,
            found: ring.len(),
        });
    }
    Ok(winding_position(ring, coord, epsilon))
}

/// Sign-walk test for convex rings. Callers guarantee at least three
/// vertices.
pub(crate) fn convex_position<T: Scalar>(ring: &Ring<T>, coord: &Coord<T>, epsilon: &T) -> CoordPos {
    for line in ring.lines() {
        if classify_point(&line, coord, epsilon) == Orientation::OnSegment {
            return CoordPos::OnBoundary;
        }
    }

    let mut has_positive = false;
    let mut has_negative = false;

    for line in ring.lines() {
        let edge = line.delta();
        let to_coord = coord - &line.start;

        let cross_value = edge.cross_product(&to_coord);
        let tolerance = cross_tolerance(
            epsilon,
            &edge.magnitude_squared(),
            &to_coord.magnitude_squared(),
        );

        if cross_value.abs() <= tolerance {
            continue;
        }
        if cross_value > T::zero() {
            has_positive = true;
        } else {
            has_negative = true;
        }
    }

    if has_positive && has_negative {
        CoordPos::Outside
    } else {
        CoordPos::Inside
    }
}

/// Winding-number test for arbitrary simple rings. Callers guarantee at
/// least three vertices.
pub(crate) fn winding_position<T: Scalar>(
    ring: &Ring<T>,
    coord: &Coord<T>,
    epsilon: &T,
) -> CoordPos {
    for line in ring.lines() {
        if classify_point(&line, coord, epsilon) == Orientation::OnSegment {
            return CoordPos::OnBoundary;
        }
    }

    let mut winding = 0i32;
    for line in ring.lines() {
        let edge = line.delta();
        let to_coord = coord - &line.start;
        let cross_value = edge.cross_product(&to_coord);
        let tolerance = cross_tolerance(
            epsilon,
            &edge.magnitude_squared(),
            &to_coord.magnitude_squared(),
        );

        if line.start.y <= coord.y {
            // upward crossing with the coordinate strictly to the left
            if line.end.y > coord.y && cross_value > tolerance {
                winding += 1;
            }
        } else {
            // downward crossing with the coordinate strictly to the right
            if line.end.y <= coord.y && cross_value < -tolerance {
                winding -= 1;
            }
        }
    }

    if winding != 0 {
        CoordPos::Inside
    } else {
        CoordPos::Outside
    }
}
