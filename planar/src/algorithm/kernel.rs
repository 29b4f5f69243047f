//! Scale-aware numeric predicates shared by every algorithm in this crate.
//!
//! Cross and dot products of coordinate differences are *bilinear*: they
//! grow with the square of a uniform scale factor applied to the inputs. A
//! fixed epsilon therefore cannot decide "is this cross product zero?" across
//! scales. The tolerances here multiply the caller's epsilon by the squared
//! lengths involved, plus one to guard the near-zero-length regime, so the
//! comparison behaves the same whether coordinates live in `[0, 1]` or
//! `[0, 10⁶]`.

use std::cmp::Ordering;

use planar_types::{Coord, Scalar};

/// Tolerance for comparing a cross product of vectors with the given squared
/// lengths against zero: `ε · (|u|² + |v|² + 1)`.
pub fn cross_tolerance<T: Scalar>(epsilon: &T, lhs_squared_length: &T, rhs_squared_length: &T) -> T {
    epsilon.clone() * (lhs_squared_length.clone() + rhs_squared_length.clone() + T::one())
}

/// Tolerance for comparing a dot product against zero:
/// `ε · (|u|² + |v|² + |u·v| + 1)`.
pub fn dot_tolerance<T: Scalar>(
    epsilon: &T,
    lhs_squared_length: &T,
    rhs_squared_length: &T,
    dot_value: &T,
) -> T {
    epsilon.clone()
        * (lhs_squared_length.clone() + rhs_squared_length.clone() + dot_value.abs() + T::one())
}

/// Whether `value` lies within `tolerance` of zero.
pub fn nearly_zero<T: Scalar>(value: &T, tolerance: &T) -> bool {
    value.abs() <= *tolerance
}

/// Per-coordinate equality: `|Δx| ≤ ε` and `|Δy| ≤ ε`.
pub fn points_equal<T: Scalar>(lhs: &Coord<T>, rhs: &Coord<T>, epsilon: &T) -> bool {
    (lhs.x.clone() - rhs.x.clone()).abs() <= *epsilon
        && (lhs.y.clone() - rhs.y.clone()).abs() <= *epsilon
}

/// Tolerance-aware lexicographic order on (x, y): coordinates within `ε` of
/// one another tie, and the comparison falls through to the next coordinate.
pub fn lex_less<T: Scalar>(lhs: &Coord<T>, rhs: &Coord<T>, epsilon: &T) -> bool {
    if (lhs.x.clone() - rhs.x.clone()).abs() > *epsilon {
        return lhs.x < rhs.x;
    }
    if (lhs.y.clone() - rhs.y.clone()).abs() > *epsilon {
        return lhs.y < rhs.y;
    }
    false
}

/// Total order induced by [`lex_less`], for sorting.
pub fn lex_cmp<T: Scalar>(lhs: &Coord<T>, rhs: &Coord<T>, epsilon: &T) -> Ordering {
    if lex_less(lhs, rhs, epsilon) {
        Ordering::Less
    } else if lex_less(rhs, lhs, epsilon) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// The orientation determinant `(b − a) × (c − a)`: positive when the turn
/// `a → b → c` is counter-clockwise, negative when clockwise, near zero when
/// collinear.
pub fn orientation_det<T: Scalar>(a: &Coord<T>, b: &Coord<T>, c: &Coord<T>) -> T {
    (b - a).cross_product(&(c - a))
}

/// The midpoint of the segment `a`–`b`.
pub fn mid_point<T: Scalar>(a: &Coord<T>, b: &Coord<T>) -> Coord<T> {
    let two = T::one() + T::one();
    Coord {
        x: (a.x.clone() + b.x.clone()) / two.clone(),
        y: (a.y.clone() + b.y.clone()) / two,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{coord, ExactScalar};

    #[test]
    fn cross_tolerance_scales_with_squared_length() {
        // A kilometer-scale pair of vectors admits a proportionally larger
        // cross product as "zero" than a unit-scale pair.
        let eps = 1e-9;
        let small = cross_tolerance(&eps, &1.0, &1.0);
        let large = cross_tolerance(&eps, &1e6, &1e6);
        assert!(large / small > 1e5);
    }

    #[test]
    fn near_zero_length_guard() {
        // The "+1" keeps the tolerance meaningful when both lengths vanish.
        let tol = cross_tolerance(&1e-9, &0.0, &0.0);
        assert_eq!(tol, 1e-9);
    }

    #[test]
    fn points_equal_is_per_coordinate() {
        let a = coord! { x: 0.0, y: 0.0 };
        let b = coord! { x: 1e-10, y: -1e-10 };
        let c = coord! { x: 1e-8, y: 0.0 };
        assert!(points_equal(&a, &b, &1e-9));
        assert!(!points_equal(&a, &c, &1e-9));
    }

    #[test]
    fn lex_order_ties_within_epsilon() {
        let a = coord! { x: 0.0, y: 0.0 };
        let b = coord! { x: 1e-12, y: 5.0 };
        // x ties, y decides
        assert!(lex_less(&a, &b, &1e-9));
        assert!(!lex_less(&b, &a, &1e-9));

        let c = coord! { x: 1e-12, y: 1e-12 };
        assert_eq!(lex_cmp(&a, &c, &1e-9), std::cmp::Ordering::Equal);
    }

    #[test]
    fn orientation_det_signs() {
        let a = coord! { x: 0.0, y: 0.0 };
        let b = coord! { x: 1.0, y: 0.0 };
        let left = coord! { x: 0.0, y: 1.0 };
        let right = coord! { x: 0.0, y: -1.0 };
        assert!(orientation_det(&a, &b, &left) > 0.0);
        assert!(orientation_det(&a, &b, &right) < 0.0);
    }

    #[test]
    fn mid_point_exact() {
        let a: Coord<ExactScalar> = coord! { x: "1".parse().unwrap(), y: "0".parse().unwrap() };
        let b: Coord<ExactScalar> = coord! { x: "2".parse().unwrap(), y: "3".parse().unwrap() };
        let mid = mid_point(&a, &b);
        assert_eq!(mid.x, "1.5".parse::<ExactScalar>().unwrap());
        assert_eq!(mid.y, "1.5".parse::<ExactScalar>().unwrap());
    }
}
