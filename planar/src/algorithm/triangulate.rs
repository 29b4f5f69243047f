use log::trace;
use planar_types::{Coord, Line, Scalar, Triangle};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::algorithm::kernel::{orientation_det, points_equal};

/// Returns the Delaunay triangulation of a point set, computed with the
/// incremental Bowyer–Watson algorithm.
///
/// Input points are deduplicated under the default epsilon; fewer than three
/// distinct points yield the empty triangulation. The insertion order is
/// randomly permuted (a performance hedge against cascading re-triangulation,
/// not a correctness requirement), so cocircular inputs may triangulate
/// differently between calls. Use [`delaunay_triangulation_with_seed`] for
/// reproducible output.
///
/// The result covers the convex hull of the input, every triangle is wound
/// counter-clockwise, and no input point lies strictly inside any triangle's
/// circumcircle (up to the default epsilon).
pub fn delaunay_triangulation<T: Scalar>(points: &[Coord<T>]) -> Vec<Triangle<T>> {
    bowyer_watson(points, &mut SmallRng::from_entropy())
}

/// [`delaunay_triangulation`] with a caller-supplied shuffle seed, for
/// reproducible output.
pub fn delaunay_triangulation_with_seed<T: Scalar>(
    points: &[Coord<T>],
    seed: u64,
) -> Vec<Triangle<T>> {
    bowyer_watson(points, &mut SmallRng::seed_from_u64(seed))
}

fn bowyer_watson<T: Scalar, R: Rng>(points: &[Coord<T>], rng: &mut R) -> Vec<Triangle<T>> {
    let epsilon = T::default_epsilon();

    let mut unique: Vec<Coord<T>> = vec![];
    for point in points {
        if !unique.iter().any(|seen| points_equal(seen, point, &epsilon)) {
            unique.push(point.clone());
        }
    }
    if unique.len() < 3 {
        return vec![];
    }
    unique.shuffle(rng);

    let super_triangle = enclosing_super_triangle(&unique);
    let super_vertices = super_triangle.to_array();

    let mut triangles: Vec<Triangle<T>> = vec![super_triangle];

    for point in &unique {
        let (bad, good): (Vec<Triangle<T>>, Vec<Triangle<T>>) = triangles
            .drain(..)
            .partition(|triangle| circumcircle_contains(triangle, point, &epsilon));
        trace!("inserting point re-triangulates {} triangles", bad.len());

        // The boundary of the carved cavity: the edges of the bad region
        // that appear exactly once.
        let mut boundary: Vec<Line<T>> = vec![];
        for (index, triangle) in bad.iter().enumerate() {
            for edge in triangle.to_lines() {
                let shared = bad.iter().enumerate().any(|(other_index, other)| {
                    other_index != index
                        && other
                            .to_lines()
                            .iter()
                            .any(|other_edge| same_undirected_edge(&edge, other_edge, &epsilon))
                });
                if !shared {
                    boundary.push(edge);
                }
            }
        }

        triangles = good;
        for edge in boundary {
            let mut triangle = Triangle::new(edge.start, edge.end, point.clone());
            if orientation_det(&triangle.a, &triangle.b, &triangle.c) < T::zero() {
                std::mem::swap(&mut triangle.b, &mut triangle.c);
            }
            triangles.push(triangle);
        }
    }

    triangles.retain(|triangle| {
        !triangle.to_array().iter().any(|vertex| {
            super_vertices
                .iter()
                .any(|super_vertex| points_equal(vertex, super_vertex, &epsilon))
        })
    });
    triangles
}

/// A counter-clockwise triangle that comfortably encloses every input point:
/// an equilateral triangle around the bounding box's center with a slack
/// radius of `max(extent, 1) · 20`.
fn enclosing_super_triangle<T: Scalar>(points: &[Coord<T>]) -> Triangle<T> {
    let mut min_x = points[0].x.clone();
    let mut max_x = points[0].x.clone();
    let mut min_y = points[0].y.clone();
    let mut max_y = points[0].y.clone();
    for point in points.iter().skip(1) {
        if point.x < min_x {
            min_x = point.x.clone();
        }
        if point.x > max_x {
            max_x = point.x.clone();
        }
        if point.y < min_y {
            min_y = point.y.clone();
        }
        if point.y > max_y {
            max_y = point.y.clone();
        }
    }

    let width = max_x.clone() - min_x.clone();
    let height = max_y.clone() - min_y.clone();
    let extent = if width >= height { width } else { height };
    let extent = if extent >= T::one() { extent } else { T::one() };

    // from_u8 is total for both scalar families
    let twenty = T::from_u8(20).unwrap();
    let radius = extent * twenty;

    let two = T::one() + T::one();
    let center_x = (min_x + max_x) / two.clone();
    let center_y = (min_y + max_y) / two.clone();

    let sqrt_three = (T::one() + T::one() + T::one()).sqrt();
    let side_reach = sqrt_three * radius.clone();

    Triangle::new(
        Coord {
            x: center_x.clone(),
            y: center_y.clone() + two * radius.clone(),
        },
        Coord {
            x: center_x.clone() - side_reach.clone(),
            y: center_y.clone() - radius.clone(),
        },
        Coord {
            x: center_x + side_reach,
            y: center_y - radius,
        },
    )
}

/// Whether `point` lies strictly inside the circumcircle of `triangle`, via
/// the 3×3 in-circle determinant with its sign corrected for the triangle's
/// orientation.
fn circumcircle_contains<T: Scalar>(triangle: &Triangle<T>, point: &Coord<T>, epsilon: &T) -> bool {
    let ax = triangle.a.x.clone() - point.x.clone();
    let ay = triangle.a.y.clone() - point.y.clone();
    let bx = triangle.b.x.clone() - point.x.clone();
    let by = triangle.b.y.clone() - point.y.clone();
    let cx = triangle.c.x.clone() - point.x.clone();
    let cy = triangle.c.y.clone() - point.y.clone();

    let a_sq = ax.clone() * ax.clone() + ay.clone() * ay.clone();
    let b_sq = bx.clone() * bx.clone() + by.clone() * by.clone();
    let c_sq = cx.clone() * cx.clone() + cy.clone() * cy.clone();

    let det = ax * (by.clone() * c_sq.clone() - cy.clone() * b_sq.clone())
        - ay * (bx.clone() * c_sq - cx.clone() * b_sq)
        + a_sq * (bx * cy - cx * by);

    let det = if orientation_det(&triangle.a, &triangle.b, &triangle.c) < T::zero() {
        -det
    } else {
        det
    };

    det > *epsilon
}

fn same_undirected_edge<T: Scalar>(lhs: &Line<T>, rhs: &Line<T>, epsilon: &T) -> bool {
    (points_equal(&lhs.start, &rhs.start, epsilon) && points_equal(&lhs.end, &rhs.end, epsilon))
        || (points_equal(&lhs.start, &rhs.end, epsilon)
            && points_equal(&lhs.end, &rhs.start, epsilon))
}
