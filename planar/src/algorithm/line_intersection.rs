use planar_types::{Coord, Line, Scalar};

use crate::algorithm::kernel::{cross_tolerance, nearly_zero};
use crate::algorithm::orientation::{classify_point, Orientation};

/// The intersection of two line segments, when there is one.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection<T: Scalar> {
    /// The segments meet in a single point.
    Point(Coord<T>),
    /// The segments are collinear and share more than a point; the shared
    /// stretch is materialised along the *first* segment, in its direction.
    Overlap(Line<T>),
}

/// Returns the intersection of two segments, or `None` when they do not
/// meet.
///
/// The first segment is parameterised as `p + t·r`, `t ∈ [0, 1]`, the second
/// as `q + u·s`. Parallelism and collinearity are decided by cross products
/// under the scale-aware tolerances of the [`kernel`](crate::algorithm::kernel)
/// module; the in-range tests on `t` and `u` are inflated by a parameter
/// tolerance `ε · (|r| + |s| + 1)`, which keeps the predicate stable when one
/// segment is much longer than the other and near the endpoints of collinear
/// overlap.
///
/// Zero-length segments degrade gracefully: a pair of coincident point-like
/// segments meets in a `Point`, a single point-like segment meets a proper
/// one where it lies on it.
///
/// # Examples
///
/// ```
/// use planar::{coord, intersect_segments, Line, SegmentIntersection};
///
/// let horizontal = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
/// let vertical = Line::new(coord! { x: 5.0, y: -5.0 }, coord! { x: 5.0, y: 5.0 });
///
/// let hit = intersect_segments(&horizontal, &vertical, &1e-9);
/// assert_eq!(hit, Some(SegmentIntersection::Point(coord! { x: 5.0, y: 0.0 })));
///
/// let parallel = Line::new(coord! { x: 0.0, y: 5.0 }, coord! { x: 10.0, y: 5.0 });
/// assert_eq!(intersect_segments(&horizontal, &parallel, &1e-9), None);
/// ```
pub fn intersect_segments<T: Scalar>(
    first: &Line<T>,
    second: &Line<T>,
    epsilon: &T,
) -> Option<SegmentIntersection<T>> {
    let p = &first.start;
    let r = first.delta();
    let q = &second.start;
    let s = second.delta();
    let qp = q - p;

    let r_squared_length = r.magnitude_squared();
    let s_squared_length = s.magnitude_squared();
    let qp_squared_length = qp.magnitude_squared();

    let parallel_tolerance = cross_tolerance(epsilon, &r_squared_length, &s_squared_length);
    let qpxr_tolerance = cross_tolerance(epsilon, &r_squared_length, &qp_squared_length);

    let rxs = r.cross_product(&s);
    let qpxr = qp.cross_product(&r);

    let epsilon_squared = epsilon.clone() * epsilon.clone();

    if nearly_zero(&rxs, &parallel_tolerance) && nearly_zero(&qpxr, &qpxr_tolerance) {
        // Parallel and collinear.
        if r_squared_length <= epsilon_squared && s_squared_length <= epsilon_squared {
            // Two point-like segments: a Point iff they coincide.
            return if qp_squared_length <= epsilon_squared {
                Some(SegmentIntersection::Point(first.start.clone()))
            } else {
                None
            };
        }

        if r_squared_length <= epsilon_squared {
            return match classify_point(second, &first.start, epsilon) {
                Orientation::OnSegment => Some(SegmentIntersection::Point(first.start.clone())),
                _ => None,
            };
        }

        if s_squared_length <= epsilon_squared {
            return match classify_point(first, &second.start, epsilon) {
                Orientation::OnSegment => Some(SegmentIntersection::Point(second.start.clone())),
                _ => None,
            };
        }

        // Project the second segment's endpoints onto the first's parameter
        // axis and intersect the resulting interval with [0, 1].
        let t0 = qp.dot_product(&r) / r_squared_length.clone();
        let t1 = t0.clone() + s.dot_product(&r) / r_squared_length.clone();

        let (t_min, t_max) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };

        let parameter_tolerance = parameter_tolerance(epsilon, &r_squared_length, &s_squared_length);

        if t_min > T::one() + parameter_tolerance.clone()
            || t_max < T::zero() - parameter_tolerance.clone()
        {
            return None;
        }

        let t_clamped_start = if t_min < T::zero() { T::zero() } else { t_min };
        let t_clamped_end = if t_max > T::one() { T::one() } else { t_max };

        if (t_clamped_start.clone() - t_clamped_end.clone()).abs() <= parameter_tolerance {
            return Some(SegmentIntersection::Point(interpolate(
                p,
                &r,
                &t_clamped_start,
            )));
        }

        return Some(SegmentIntersection::Overlap(Line::new(
            interpolate(p, &r, &t_clamped_start),
            interpolate(p, &r, &t_clamped_end),
        )));
    }

    if nearly_zero(&rxs, &parallel_tolerance) {
        // Parallel, not collinear.
        return None;
    }

    let t = qp.cross_product(&s) / rxs.clone();
    let u = qpxr / rxs;

    let parameter_tolerance = parameter_tolerance(epsilon, &r_squared_length, &s_squared_length);
    let lower = T::zero() - parameter_tolerance.clone();
    let upper = T::one() + parameter_tolerance;

    if t >= lower && t <= upper && u >= lower && u <= upper {
        return Some(SegmentIntersection::Point(interpolate(p, &r, &t)));
    }

    None
}

/// `ε · (|r| + |s| + 1)`: a tolerance in parameter units, derived from the
/// segment lengths.
fn parameter_tolerance<T: Scalar>(epsilon: &T, r_squared_length: &T, s_squared_length: &T) -> T {
    epsilon.clone() * (r_squared_length.sqrt() + s_squared_length.sqrt() + T::one())
}

fn interpolate<T: Scalar>(origin: &Coord<T>, direction: &Coord<T>, t: &T) -> Coord<T> {
    Coord {
        x: origin.x.clone() + t.clone() * direction.x.clone(),
        y: origin.y.clone() + t.clone() * direction.y.clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{coord, ExactScalar};

    fn exact(s: &str) -> ExactScalar {
        s.parse().unwrap()
    }

    #[test]
    fn crossing_segments_meet_in_a_point() {
        let first = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
        let second = Line::new(coord! { x: 5.0, y: -5.0 }, coord! { x: 5.0, y: 5.0 });

        match intersect_segments(&first, &second, &f64::default_epsilon()) {
            Some(SegmentIntersection::Point(point)) => {
                assert!((point.x - 5.0).abs() < 1e-9);
                assert!(point.y.abs() < 1e-9);
            }
            other => panic!("expected a point intersection, got {other:?}"),
        }
    }

    #[test]
    fn parallel_segments_do_not_meet() {
        let first = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
        let second = Line::new(coord! { x: 0.0, y: 5.0 }, coord! { x: 10.0, y: 5.0 });

        assert_eq!(
            intersect_segments(&first, &second, &f64::default_epsilon()),
            None
        );
    }

    #[test]
    fn collinear_overlap_exact() {
        let first = Line::new(
            coord! { x: exact("-10"), y: exact("0") },
            coord! { x: exact("10"), y: exact("0") },
        );
        let second = Line::new(
            coord! { x: exact("-5"), y: exact("0") },
            coord! { x: exact("15"), y: exact("0") },
        );

        match intersect_segments(&first, &second, &exact("1e-40")) {
            Some(SegmentIntersection::Overlap(overlap)) => {
                assert_eq!(overlap.start, coord! { x: exact("-5"), y: exact("0") });
                assert_eq!(overlap.end, coord! { x: exact("10"), y: exact("0") });
            }
            other => panic!("expected an overlap, got {other:?}"),
        }
    }

    #[test]
    fn collinear_touch_collapses_to_a_point() {
        let first = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
        let second = Line::new(coord! { x: 1.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 });

        match intersect_segments(&first, &second, &f64::default_epsilon()) {
            Some(SegmentIntersection::Point(point)) => {
                assert!((point.x - 1.0).abs() < 1e-9);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn collinear_disjoint_segments_do_not_meet() {
        let first = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
        let second = Line::new(coord! { x: 2.0, y: 0.0 }, coord! { x: 3.0, y: 0.0 });

        assert_eq!(
            intersect_segments(&first, &second, &f64::default_epsilon()),
            None
        );
    }

    #[test]
    fn point_like_segments() {
        let eps = f64::default_epsilon();
        let dot_a = Line::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 1.0, y: 1.0 });
        let dot_b = dot_a.clone();
        let dot_c = Line::new(coord! { x: 2.0, y: 2.0 }, coord! { x: 2.0, y: 2.0 });
        let proper = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 4.0 });

        assert_eq!(
            intersect_segments(&dot_a, &dot_b, &eps),
            Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
        );
        assert_eq!(intersect_segments(&dot_a, &dot_c, &eps), None);
        // a point on a proper segment, both argument orders
        assert_eq!(
            intersect_segments(&dot_a, &proper, &eps),
            Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
        );
        assert_eq!(
            intersect_segments(&proper, &dot_a, &eps),
            Some(SegmentIntersection::Point(coord! { x: 1.0, y: 1.0 }))
        );
    }

    #[test]
    fn symmetry_of_argument_order() {
        let first = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 });
        let second = Line::new(coord! { x: 0.0, y: 10.0 }, coord! { x: 10.0, y: 0.0 });
        let eps = f64::default_epsilon();

        let forward = intersect_segments(&first, &second, &eps);
        let backward = intersect_segments(&second, &first, &eps);
        assert_eq!(forward, backward);
    }

    #[test]
    fn near_miss_beyond_endpoint() {
        let first = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
        let second = Line::new(coord! { x: 11.0, y: -5.0 }, coord! { x: 11.0, y: 5.0 });

        assert_eq!(
            intersect_segments(&first, &second, &f64::default_epsilon()),
            None
        );
    }
}
