//! Assemble closed loops from the boundary segments that survive
//! classification.
//!
//! The segments are keyed into a directed multigraph on tolerance-merged
//! vertices. Tracing repeatedly follows the "left-most next" rule: at each
//! vertex, among the unused outgoing edges, take the one with the smallest
//! forward angular turn relative to the reversal of the arriving direction.
//! This walks the faces of the planar subdivision in a predictable
//! orientation: counter-clockwise loops enclose result area, clockwise
//! loops are holes.

use std::f64::consts::{PI, TAU};

use log::{debug, trace};
use planar_types::{Coord, Line, Ring, Scalar};

use crate::algorithm::kernel::points_equal;

/// The smallest admissible forward turn. Anything below this is treated as
/// an immediate reversal and never followed.
const MIN_FORWARD_TURN: f64 = 1e-12;

#[derive(Debug)]
struct DirectedEdge {
    from: usize,
    to: usize,
    /// Direction angle in `[0, 2π)`.
    angle: f64,
    used: bool,
    /// Seed edges of aborted traces are retired so scanning terminates.
    retired: bool,
}

/// Builds loops from directed segments; see the module docs.
#[derive(Debug)]
pub(super) struct LoopAssembly<T: Scalar> {
    epsilon: T,
    vertices: Vec<Coord<T>>,
    edges: Vec<DirectedEdge>,
}

impl<T: Scalar> LoopAssembly<T> {
    pub(super) fn new(epsilon: T) -> Self {
        Self {
            epsilon,
            vertices: vec![],
            edges: vec![],
        }
    }

    /// Adds a directed segment to the graph. Segments collapsing to a point
    /// under the tolerance are ignored.
    pub(super) fn add_edge(&mut self, segment: Line<T>) {
        let from = self.vertex_id(segment.start);
        let to = self.vertex_id(segment.end);
        if from == to {
            trace!("skipping segment collapsed under tolerance");
            return;
        }
        let angle = edge_angle(&self.vertices[from], &self.vertices[to]);
        self.edges.push(DirectedEdge {
            from,
            to,
            angle,
            used: false,
            retired: false,
        });
    }

    /// Traces every loop and returns them as open vertex sequences.
    pub(super) fn finish(mut self) -> Vec<Ring<T>> {
        let mut loops: Vec<Ring<T>> = vec![];
        loop {
            // scanning: seed a new loop from any edge not yet used or retired
            let seed = self
                .edges
                .iter()
                .position(|edge| !edge.used && !edge.retired);
            let Some(seed) = seed else {
                break;
            };
            match self.trace(seed) {
                Some(ring) => {
                    trace!("closed a loop with {} vertices", ring.len());
                    loops.push(ring);
                }
                None => {
                    debug!("trace from edge {seed} could not close; edges released");
                }
            }
        }
        loops
    }

    /// Extends a loop from the seed edge until it returns to its start
    /// vertex. On failure every edge of the attempt is released and the seed
    /// is retired.
    fn trace(&mut self, seed: usize) -> Option<Ring<T>> {
        let start = self.edges[seed].from;
        let mut attempt = vec![seed];
        let mut path = vec![start];
        let mut head = self.edges[seed].to;
        let mut arrival_angle = self.edges[seed].angle;
        self.edges[seed].used = true;

        while head != start {
            path.push(head);

            let back = normalize_angle(arrival_angle + PI);
            let mut best: Option<(usize, f64)> = None;
            for (index, edge) in self.edges.iter().enumerate() {
                if edge.used || edge.from != head {
                    continue;
                }
                let turn = normalize_angle(edge.angle - back);
                if turn <= MIN_FORWARD_TURN {
                    continue;
                }
                if best.map_or(true, |(_, smallest)| turn < smallest) {
                    best = Some((index, turn));
                }
            }

            let Some((next, _)) = best else {
                for index in attempt {
                    self.edges[index].used = false;
                }
                self.edges[seed].retired = true;
                return None;
            };

            self.edges[next].used = true;
            attempt.push(next);
            head = self.edges[next].to;
            arrival_angle = self.edges[next].angle;
        }

        Some(Ring::new(
            path.into_iter()
                .map(|index| self.vertices[index].clone())
                .collect(),
        ))
    }

    fn vertex_id(&mut self, coord: Coord<T>) -> usize {
        for (index, seen) in self.vertices.iter().enumerate() {
            if points_equal(seen, &coord, &self.epsilon) {
                return index;
            }
        }
        self.vertices.push(coord);
        self.vertices.len() - 1
    }
}

/// The direction angle of the segment `from → to`, in `[0, 2π)`.
///
/// Angles are ordering devices only, so computing them in `f64` is fine for
/// both scalar families; the coordinates themselves stay in their family.
fn edge_angle<T: Scalar>(from: &Coord<T>, to: &Coord<T>) -> f64 {
    // to_f64 is total for both scalar families
    let dx = (to.x.clone() - from.x.clone()).to_f64().unwrap();
    let dy = (to.y.clone() - from.y.clone()).to_f64().unwrap();
    normalize_angle(dy.atan2(dx))
}

fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped + TAU
    } else {
        wrapped
    }
}
