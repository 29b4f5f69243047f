use planar_types::{Coord, Ring, Scalar};

use crate::algorithm::cleanup::cleanup_ring;
use crate::algorithm::kernel::{lex_cmp, orientation_det, points_equal};

/// Returns the convex hull of a point set. The hull is always oriented
/// counter-clockwise.
///
/// This implementation uses Andrew's monotone chain algorithm.
///
/// # Examples
///
/// ```
/// use planar::{coord, ring, ConvexHull};
///
/// let points = [
///     coord! { x: 0.0, y: 0.0 },
///     coord! { x: 1.0, y: 0.0 },
///     coord! { x: 1.0, y: 1.0 },
///     coord! { x: 0.0, y: 1.0 },
///     coord! { x: 0.5, y: 0.5 },
/// ];
///
/// assert_eq!(
///     points.convex_hull(),
///     ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)],
/// );
/// ```
pub trait ConvexHull<T: Scalar> {
    fn convex_hull(&self) -> Ring<T>;
}

impl<T: Scalar> ConvexHull<T> for [Coord<T>] {
    fn convex_hull(&self) -> Ring<T> {
        monotone_chain_hull(self, &T::default_epsilon())
    }
}

impl<T: Scalar> ConvexHull<T> for Ring<T> {
    fn convex_hull(&self) -> Ring<T> {
        monotone_chain_hull(&self.0, &T::default_epsilon())
    }
}

/// Andrew's monotone chain: sort lexicographically (tolerance-aware),
/// deduplicate, build the lower then the upper chain, popping while the last
/// turn is right or straight.
///
/// Degenerate inputs yield degenerate hulls rather than errors: fewer than
/// two distinct points give the empty ring, a fully collinear set gives the
/// two extreme points.
pub fn monotone_chain_hull<T: Scalar>(points: &[Coord<T>], epsilon: &T) -> Ring<T> {
    let mut sorted: Vec<Coord<T>> = points.to_vec();
    sorted.sort_by(|a, b| lex_cmp(a, b, epsilon));
    sorted.dedup_by(|a, b| points_equal(a, b, epsilon));

    if sorted.len() < 2 {
        return Ring::new(vec![]);
    }

    let mut lower = chain(sorted.iter(), epsilon);
    let mut upper = chain(sorted.iter().rev(), epsilon);

    // the last element of each chain duplicates the other chain's start
    lower.pop();
    upper.pop();
    lower.extend(upper);

    let hull = Ring::new(lower);
    if hull.len() < 3 {
        // collinear input: the two extreme points
        return hull;
    }
    cleanup_ring(&hull, epsilon)
}

fn chain<'a, T: Scalar>(
    points: impl Iterator<Item = &'a Coord<T>>,
    epsilon: &T,
) -> Vec<Coord<T>> {
    let mut output: Vec<Coord<T>> = vec![];
    for point in points {
        while output.len() >= 2 {
            let turn = orientation_det(&output[output.len() - 2], &output[output.len() - 1], point);
            if turn <= *epsilon {
                output.pop();
            } else {
                break;
            }
        }
        output.push(point.clone());
    }
    output
}
