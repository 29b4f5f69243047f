//! Boolean operations on convex polygons.
//!
//! Intersection exploits convexity directly: the intersection of two convex
//! sets is convex, so it is the hull of a candidate vertex pool. Union and
//! difference run the general subdivision-and-reassembly scheme: subdivide
//! each boundary at its intersections with the other, keep the pieces that
//! belong to the result (classified by their midpoint), prune coincident
//! stretches, and reassemble the survivors into closed loops whose signed
//! area tells outer rings from holes.

use log::debug;
use planar_types::{Coord, Line, Ring, Scalar};

use crate::algorithm::cleanup::{
    cleanup_ring, normalize_ring, remove_collinear_spikes, remove_duplicate_vertices,
};
use crate::algorithm::convex_hull::monotone_chain_hull;
use crate::algorithm::coordinate_position::{convex_position, winding_position, CoordPos};
use crate::algorithm::kernel::{mid_point, points_equal};
use crate::algorithm::line_intersection::{intersect_segments, SegmentIntersection};
use crate::algorithm::winding_order::{Winding, WindingOrder};

mod assembly;
mod subdivide;

use assembly::LoopAssembly;
use subdivide::{boundary_pieces, prune_duplicate_edges};

/// The outcome of a Boolean operation on polygons.
///
/// Every outer ring is wound counter-clockwise, every hole clockwise, and
/// every hole lies strictly inside one of the outers. Disjoint inputs under
/// union legitimately produce multiple outers.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanResult<T: Scalar> {
    pub outers: Vec<Ring<T>>,
    pub holes: Vec<Ring<T>>,
}

impl<T: Scalar> BooleanResult<T> {
    pub fn empty() -> Self {
        Self {
            outers: vec![],
            holes: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outers.is_empty() && self.holes.is_empty()
    }

    fn single(outer: Ring<T>) -> Self {
        if outer.is_empty() {
            Self::empty()
        } else {
            Self {
                outers: vec![outer],
                holes: vec![],
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoolOp {
    Union,
    Difference,
}

/// Returns the intersection of two convex polygons as a single
/// counter-clockwise ring, or `None` when the intersection is empty or
/// collapses to nothing measurable.
///
/// The candidate pool is: vertices of either polygon not outside the other,
/// plus all boundary–boundary intersection points. Its convex hull, cleaned
/// up, is the answer.
///
/// # Examples
///
/// ```
/// use planar::{ring, intersect_convex, Area};
///
/// let a = ring![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
/// let b = ring![(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)];
///
/// let overlap = intersect_convex(&a, &b, &1e-9).unwrap();
/// assert!((overlap.signed_area() - 1.0).abs() < 1e-9);
/// ```
pub fn intersect_convex<T: Scalar>(a: &Ring<T>, b: &Ring<T>, epsilon: &T) -> Option<Ring<T>> {
    let a = normalize_ring(a, epsilon);
    let b = normalize_ring(b, epsilon);
    if a.len() < 3 || b.len() < 3 {
        return None;
    }

    let mut candidates: Vec<Coord<T>> = vec![];
    let consider = |candidates: &mut Vec<Coord<T>>, coord: Coord<T>| {
        if !candidates
            .iter()
            .any(|seen| points_equal(seen, &coord, epsilon))
        {
            candidates.push(coord);
        }
    };

    for vertex in a.coords() {
        if convex_position(&b, vertex, epsilon) != CoordPos::Outside {
            consider(&mut candidates, vertex.clone());
        }
    }
    for vertex in b.coords() {
        if convex_position(&a, vertex, epsilon) != CoordPos::Outside {
            consider(&mut candidates, vertex.clone());
        }
    }
    for edge_a in a.lines() {
        for edge_b in b.lines() {
            match intersect_segments(&edge_a, &edge_b, epsilon) {
                Some(SegmentIntersection::Point(point)) => consider(&mut candidates, point),
                Some(SegmentIntersection::Overlap(overlap)) => {
                    consider(&mut candidates, overlap.start);
                    consider(&mut candidates, overlap.end);
                }
                None => {}
            }
        }
    }

    if candidates.len() < 3 {
        return None;
    }

    let hull = cleanup_ring(&monotone_chain_hull(&candidates, epsilon), epsilon);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}

/// Returns the union of two convex polygons.
///
/// # Examples
///
/// ```
/// use planar::{ring, union_convex, Area};
///
/// let a = ring![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
/// let b = ring![(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)];
///
/// let union = union_convex(&a, &b, &1e-9);
/// assert_eq!(union.outers.len(), 1);
/// assert!(union.holes.is_empty());
/// assert!((union.signed_area() - 7.0).abs() < 1e-9);
/// ```
pub fn union_convex<T: Scalar>(a: &Ring<T>, b: &Ring<T>, epsilon: &T) -> BooleanResult<T> {
    boolean_op(a, b, epsilon, BoolOp::Union)
}

/// Returns the difference `a \ b` of two convex polygons.
///
/// When `b` punches a hole through the interior of `a`, the result is one
/// outer ring (counter-clockwise) and one hole (clockwise).
pub fn difference_convex<T: Scalar>(a: &Ring<T>, b: &Ring<T>, epsilon: &T) -> BooleanResult<T> {
    boolean_op(a, b, epsilon, BoolOp::Difference)
}

fn boolean_op<T: Scalar>(a: &Ring<T>, b: &Ring<T>, epsilon: &T, op: BoolOp) -> BooleanResult<T> {
    let a = normalize_ring(a, epsilon);
    let b = normalize_ring(b, epsilon);

    // short-circuits on degenerate inputs
    if a.len() < 3 && b.len() < 3 {
        return BooleanResult::empty();
    }
    if a.len() < 3 {
        return match op {
            BoolOp::Union => BooleanResult::single(cleanup_ring(&b, epsilon)),
            BoolOp::Difference => BooleanResult::empty(),
        };
    }
    if b.len() < 3 {
        return BooleanResult::single(cleanup_ring(&a, epsilon));
    }

    // short-circuits on containment and disjointness
    if contains_ring(&b, &a, epsilon) {
        debug!("first operand contained in second");
        return match op {
            BoolOp::Union => BooleanResult::single(cleanup_ring(&b, epsilon)),
            BoolOp::Difference => BooleanResult::empty(),
        };
    }
    if contains_ring(&a, &b, epsilon) {
        debug!("second operand contained in first");
        return match op {
            BoolOp::Union => BooleanResult::single(cleanup_ring(&a, epsilon)),
            BoolOp::Difference => {
                let outer = cleanup_ring(&a, epsilon);
                let mut hole = cleanup_ring(&b, epsilon);
                if outer.is_empty() || hole.is_empty() {
                    return BooleanResult::single(outer);
                }
                hole.make_cw_winding();
                BooleanResult {
                    outers: vec![outer],
                    holes: vec![hole],
                }
            }
        };
    }
    if disjoint_rings(&a, &b, epsilon) {
        debug!("operands are disjoint");
        return match op {
            BoolOp::Union => BooleanResult {
                outers: vec![cleanup_ring(&a, epsilon), cleanup_ring(&b, epsilon)],
                holes: vec![],
            },
            // the subtrahend removes nothing
            BoolOp::Difference => BooleanResult::single(cleanup_ring(&a, epsilon)),
        };
    }

    // subdivide both boundaries at their mutual intersections
    let (pieces_a, pieces_b) = boundary_pieces(&a, &b, epsilon);

    // keep the pieces that belong to the result, classified by midpoint
    let mut kept: Vec<Line<T>> = vec![];
    for piece in pieces_a {
        let midpoint = mid_point(&piece.start, &piece.end);
        if convex_position(&b, &midpoint, epsilon) == CoordPos::Outside {
            kept.push(piece);
        }
    }
    for piece in pieces_b {
        let midpoint = mid_point(&piece.start, &piece.end);
        match op {
            BoolOp::Union => {
                if convex_position(&a, &midpoint, epsilon) == CoordPos::Outside {
                    kept.push(piece);
                }
            }
            BoolOp::Difference => {
                // interior pieces of the subtrahend bound the carved region,
                // traversed in the opposite direction
                if convex_position(&a, &midpoint, epsilon) == CoordPos::Inside {
                    kept.push(piece.reversed());
                }
            }
        }
    }

    // coincident boundary stretches would be traversed twice; drop them
    let kept = prune_duplicate_edges(kept, epsilon);

    // reassemble the surviving segments into closed loops
    let mut assembly = LoopAssembly::new(epsilon.clone());
    for segment in kept {
        assembly.add_edge(segment);
    }
    let loops = assembly.finish();

    // classify each loop by its signed area
    let mut outers: Vec<Ring<T>> = vec![];
    let mut raw_holes: Vec<Ring<T>> = vec![];
    for traced in loops {
        let deduped = remove_duplicate_vertices(&traced, epsilon);
        let ring = remove_collinear_spikes(&deduped, epsilon);
        if ring.len() < 3 {
            continue;
        }
        match ring.winding_order() {
            Some(WindingOrder::CounterClockwise) => outers.push(ring),
            Some(WindingOrder::Clockwise) => raw_holes.push(ring),
            None => {}
        }
    }

    // a hole must lie strictly inside one of the outers
    let holes = raw_holes
        .into_iter()
        .filter(|hole| {
            let anchor = &hole[0];
            let attributed = outers
                .iter()
                .any(|outer| winding_position(outer, anchor, epsilon) == CoordPos::Inside);
            if !attributed {
                debug!("dropping unattributed hole loop");
            }
            attributed
        })
        .collect();

    BooleanResult { outers, holes }
}

/// Whether every vertex of `inner` lies inside or on the convex ring
/// `outer`.
fn contains_ring<T: Scalar>(outer: &Ring<T>, inner: &Ring<T>, epsilon: &T) -> bool {
    inner
        .coords()
        .all(|vertex| convex_position(outer, vertex, epsilon) != CoordPos::Outside)
}

/// Whether the rings share no area and no boundary: all vertices strictly
/// outside the other ring, and no edge pair intersects.
fn disjoint_rings<T: Scalar>(a: &Ring<T>, b: &Ring<T>, epsilon: &T) -> bool {
    a.coords()
        .all(|vertex| convex_position(b, vertex, epsilon) == CoordPos::Outside)
        && b.coords()
            .all(|vertex| convex_position(a, vertex, epsilon) == CoordPos::Outside)
        && a.lines()
            .all(|edge_a| {
                b.lines()
                    .all(|edge_b| intersect_segments(&edge_a, &edge_b, epsilon).is_none())
            })
}

#[cfg(test)]
mod tests;
