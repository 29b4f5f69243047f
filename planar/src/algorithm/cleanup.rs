//! Ring cleanup primitives.
//!
//! Every constructive algorithm in this crate hands its rings through this
//! pipeline before returning them. Downstream correctness (midpoint
//! classification, loop reassembly, hole attribution) relies on cleaned
//! inputs: no duplicate vertices, no back-pointing spikes, a meaningful
//! signed area, counter-clockwise outer orientation.

use planar_types::{Coord, Ring, Scalar};

use crate::algorithm::area::Area;
use crate::algorithm::kernel::{cross_tolerance, points_equal};
use crate::algorithm::winding_order::Winding;

/// Drop adjacent equal vertices, cyclically: if after the pass the first and
/// last vertices coincide, the last is dropped too.
pub fn remove_duplicate_vertices<T: Scalar>(ring: &Ring<T>, epsilon: &T) -> Ring<T> {
    let mut coords: Vec<Coord<T>> = Vec::with_capacity(ring.len());
    for coord in ring.coords() {
        let repeated = matches!(coords.last(), Some(last) if points_equal(last, coord, epsilon));
        if !repeated {
            coords.push(coord.clone());
        }
    }
    while coords.len() > 1 && points_equal(&coords[0], &coords[coords.len() - 1], epsilon) {
        coords.pop();
    }
    Ring::new(coords)
}

/// Drop every vertex whose incident edges are collinear *and* point back at
/// one another.
///
/// A vertex where the boundary continues straight through (collinear edges
/// with positive dot product) is kept; only spikes that double back are
/// removed. Removal re-examines the predecessor, so chained
/// spikes collapse fully.
pub fn remove_collinear_spikes<T: Scalar>(ring: &Ring<T>, epsilon: &T) -> Ring<T> {
    let mut coords: Vec<Coord<T>> = ring.coords().cloned().collect();

    let mut index = 0;
    while coords.len() >= 3 && index < coords.len() {
        let len = coords.len();
        let prev = coords[(index + len - 1) % len].clone();
        let curr = coords[index].clone();
        let next = coords[(index + 1) % len].clone();

        let incoming = &curr - &prev;
        let outgoing = &next - &curr;

        let cross_value = incoming.cross_product(&outgoing);
        let tolerance = cross_tolerance(
            epsilon,
            &incoming.magnitude_squared(),
            &outgoing.magnitude_squared(),
        );

        if cross_value.abs() <= tolerance && incoming.dot_product(&outgoing) <= T::zero() {
            coords.remove(index);
            index = index.saturating_sub(1);
        } else {
            index += 1;
        }
    }

    Ring::new(coords)
}

/// Deduplicate and orient counter-clockwise, without the area check of
/// [`cleanup_ring`]. The shape is preserved even when degenerate.
pub fn normalize_ring<T: Scalar>(ring: &Ring<T>, epsilon: &T) -> Ring<T> {
    let mut ring = remove_duplicate_vertices(ring, epsilon);
    ring.make_ccw_winding();
    ring
}

/// The full cleanup pipeline: deduplicate, remove spikes, reject degenerate
/// area, orient counter-clockwise, deduplicate again.
///
/// Returns the empty ring when the input collapses: fewer than three
/// vertices survive, or the absolute area is at most `epsilon`.
pub fn cleanup_ring<T: Scalar>(ring: &Ring<T>, epsilon: &T) -> Ring<T> {
    let deduped = remove_duplicate_vertices(ring, epsilon);
    let despiked = remove_collinear_spikes(&deduped, epsilon);

    if despiked.len() < 3 {
        return Ring::new(vec![]);
    }
    if despiked.unsigned_area() <= *epsilon {
        return Ring::new(vec![]);
    }

    let mut oriented = despiked;
    oriented.make_ccw_winding();
    remove_duplicate_vertices(&oriented, epsilon)
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::{coord, ring};

    #[test]
    fn dedup_is_cyclic() {
        let noisy = ring![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        let clean = remove_duplicate_vertices(&noisy, &1e-9);
        assert_eq!(clean.len(), 3);
        assert_eq!(clean[0], coord! { x: 0.0, y: 0.0 });
        assert_eq!(clean[2], coord! { x: 1.0, y: 1.0 });
    }

    #[test]
    fn back_pointing_spike_is_removed() {
        // the excursion to (3, 0) doubles back
        let spiked = ring![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 3.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ];
        let clean = remove_collinear_spikes(&spiked, &1e-9);
        let deduped = remove_duplicate_vertices(&clean, &1e-9);
        assert_eq!(deduped.len(), 4);
    }

    #[test]
    fn forward_collinear_vertex_is_kept() {
        let straight = ring![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ];
        let clean = remove_collinear_spikes(&straight, &1e-9);
        assert_eq!(clean.len(), 5);
    }

    #[test]
    fn cleanup_rejects_degenerate_area() {
        let flat = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
        assert!(cleanup_ring(&flat, &1e-9).is_empty());

        let two = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)];
        assert!(cleanup_ring(&two, &1e-9).is_empty());
    }

    #[test]
    fn cleanup_orients_ccw() {
        let clockwise = ring![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
        ];
        let clean = cleanup_ring(&clockwise, &1e-9);
        assert!(clean.is_ccw());
        assert_eq!(clean.len(), 4);
    }
}
