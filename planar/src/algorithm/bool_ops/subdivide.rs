//! Boundary subdivision for the Boolean engine: split each polygon's edges
//! at their intersections with the other polygon, and prune coincident
//! duplicates from the surviving piece set.

use planar_types::{Coord, Line, Ring, Scalar};

use crate::algorithm::kernel::points_equal;
use crate::algorithm::line_intersection::{intersect_segments, SegmentIntersection};

/// Split both rings' boundaries at every mutual intersection point. Pieces
/// keep their original direction; piece endpoints are the original vertices
/// plus the recorded cuts, ordered along each edge.
pub(super) fn boundary_pieces<T: Scalar>(
    a: &Ring<T>,
    b: &Ring<T>,
    epsilon: &T,
) -> (Vec<Line<T>>, Vec<Line<T>>) {
    let a_edges: Vec<Line<T>> = a.lines().collect();
    let b_edges: Vec<Line<T>> = b.lines().collect();

    let mut a_cuts: Vec<Vec<Coord<T>>> = vec![vec![]; a_edges.len()];
    let mut b_cuts: Vec<Vec<Coord<T>>> = vec![vec![]; b_edges.len()];

    for (i, edge_a) in a_edges.iter().enumerate() {
        for (j, edge_b) in b_edges.iter().enumerate() {
            match intersect_segments(edge_a, edge_b, epsilon) {
                Some(SegmentIntersection::Point(point)) => {
                    a_cuts[i].push(point.clone());
                    b_cuts[j].push(point);
                }
                Some(SegmentIntersection::Overlap(overlap)) => {
                    a_cuts[i].push(overlap.start.clone());
                    a_cuts[i].push(overlap.end.clone());
                    b_cuts[j].push(overlap.start);
                    b_cuts[j].push(overlap.end);
                }
                None => {}
            }
        }
    }

    (
        split_edges(&a_edges, a_cuts, epsilon),
        split_edges(&b_edges, b_cuts, epsilon),
    )
}

fn split_edges<T: Scalar>(
    edges: &[Line<T>],
    cuts: Vec<Vec<Coord<T>>>,
    epsilon: &T,
) -> Vec<Line<T>> {
    let mut pieces: Vec<Line<T>> = vec![];

    for (edge, cut_points) in edges.iter().zip(cuts) {
        let direction = edge.delta();
        let squared_length = direction.magnitude_squared();
        if squared_length <= epsilon.clone() * epsilon.clone() {
            pieces.push(edge.clone());
            continue;
        }

        // order the cuts by their parameter along the edge
        let mut parameterized: Vec<(T, Coord<T>)> = cut_points
            .into_iter()
            .map(|point| {
                let t = (&point - &edge.start).dot_product(&direction) / squared_length.clone();
                (t, point)
            })
            .collect();
        parameterized.sort_by(|(s, _), (t, _)| s.partial_cmp(t).unwrap());

        let mut cursor = edge.start.clone();
        for (_, point) in parameterized {
            if points_equal(&point, &cursor, epsilon) || points_equal(&point, &edge.end, epsilon) {
                continue;
            }
            pieces.push(Line::new(cursor.clone(), point.clone()));
            cursor = point;
        }
        if !points_equal(&cursor, &edge.end, epsilon) {
            pieces.push(Line::new(cursor, edge.end.clone()));
        }
    }

    pieces
}

/// Group the segments into undirected edges (tolerance-equal endpoints,
/// either direction) and drop every edge whose multiplicity is not exactly
/// one. Coincident boundary stretches would otherwise be traversed twice.
pub(super) fn prune_duplicate_edges<T: Scalar>(segments: Vec<Line<T>>, epsilon: &T) -> Vec<Line<T>> {
    let mut keep = vec![true; segments.len()];
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if undirected_equal(&segments[i], &segments[j], epsilon) {
                keep[i] = false;
                keep[j] = false;
            }
        }
    }
    segments
        .into_iter()
        .zip(keep)
        .filter_map(|(segment, kept)| kept.then_some(segment))
        .collect()
}

fn undirected_equal<T: Scalar>(lhs: &Line<T>, rhs: &Line<T>, epsilon: &T) -> bool {
    (points_equal(&lhs.start, &rhs.start, epsilon) && points_equal(&lhs.end, &rhs.end, epsilon))
        || (points_equal(&lhs.start, &rhs.end, epsilon)
            && points_equal(&lhs.end, &rhs.start, epsilon))
}
