use super::*;
use crate::algorithm::area::Area;
use planar_types::ring;

fn overlapping_squares() -> (Ring<f64>, Ring<f64>) {
    let a = ring![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
    let b = ring![(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)];
    (a, b)
}

fn nested_squares() -> (Ring<f64>, Ring<f64>) {
    // side 4 centered at the origin, side 2 centered at the origin
    let outer = ring![(x: -2.0, y: -2.0), (x: 2.0, y: -2.0), (x: 2.0, y: 2.0), (x: -2.0, y: 2.0)];
    let inner = ring![(x: -1.0, y: -1.0), (x: 1.0, y: -1.0), (x: 1.0, y: 1.0), (x: -1.0, y: 1.0)];
    (outer, inner)
}

const EPS: f64 = 1e-9;

#[test]
fn intersection_of_overlapping_squares() {
    let (a, b) = overlapping_squares();

    let overlap = intersect_convex(&a, &b, &EPS).unwrap();
    assert_eq!(overlap.len(), 4);
    assert!((overlap.signed_area() - 1.0).abs() < EPS);
    assert!(overlap.is_ccw());
}

#[test]
fn intersection_is_symmetric() {
    let (a, b) = overlapping_squares();

    let forward = intersect_convex(&a, &b, &EPS).unwrap();
    let backward = intersect_convex(&b, &a, &EPS).unwrap();
    assert!((forward.signed_area() - backward.signed_area()).abs() < EPS);
}

#[test]
fn intersection_of_disjoint_squares_is_empty() {
    let a = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
    let b = ring![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0), (x: 5.0, y: 6.0)];

    assert_eq!(intersect_convex(&a, &b, &EPS), None);
}

#[test]
fn union_of_overlapping_squares() {
    let (a, b) = overlapping_squares();

    let union = union_convex(&a, &b, &EPS);
    assert_eq!(union.outers.len(), 1);
    assert!(union.holes.is_empty());
    assert!((union.signed_area() - 7.0).abs() < EPS);
    assert!(union.outers[0].is_ccw());
}

#[test]
fn union_of_disjoint_squares_keeps_both() {
    let a = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
    let b = ring![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0), (x: 5.0, y: 6.0)];

    let union = union_convex(&a, &b, &EPS);
    assert_eq!(union.outers.len(), 2);
    assert!(union.holes.is_empty());
    assert!((union.signed_area() - 2.0).abs() < EPS);
}

#[test]
fn union_with_contained_operand_is_the_container() {
    let (outer, inner) = nested_squares();

    let union = union_convex(&outer, &inner, &EPS);
    assert_eq!(union.outers.len(), 1);
    assert!(union.holes.is_empty());
    assert!((union.signed_area() - 16.0).abs() < EPS);
}

#[test]
fn union_with_empty_operand() {
    let (a, _) = overlapping_squares();
    let empty: Ring<f64> = ring![];

    let union = union_convex(&a, &empty, &EPS);
    assert_eq!(union.outers.len(), 1);
    assert!((union.signed_area() - 4.0).abs() < EPS);

    let union = union_convex(&empty, &a, &EPS);
    assert_eq!(union.outers.len(), 1);
}

#[test]
fn difference_carves_a_hole() {
    let (outer, inner) = nested_squares();

    let difference = difference_convex(&outer, &inner, &EPS);
    assert_eq!(difference.outers.len(), 1);
    assert_eq!(difference.holes.len(), 1);

    assert!(difference.outers[0].is_ccw());
    assert!(difference.holes[0].is_cw());
    assert!((difference.outers[0].signed_area() - 16.0).abs() < EPS);
    assert!((difference.holes[0].signed_area() + 4.0).abs() < EPS);
    assert!((difference.signed_area() - 12.0).abs() < EPS);
}

#[test]
fn difference_of_overlapping_squares() {
    let (a, b) = overlapping_squares();

    let difference = difference_convex(&a, &b, &EPS);
    assert_eq!(difference.outers.len(), 1);
    assert!(difference.holes.is_empty());
    // the L-shaped remainder
    assert!((difference.signed_area() - 3.0).abs() < EPS);
    assert_eq!(difference.outers[0].len(), 6);
}

#[test]
fn difference_with_disjoint_subtrahend_is_the_minuend() {
    let a = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
    let b = ring![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0), (x: 5.0, y: 6.0)];

    let difference = difference_convex(&a, &b, &EPS);
    assert_eq!(difference.outers.len(), 1);
    assert!(difference.holes.is_empty());
    assert!((difference.signed_area() - 1.0).abs() < EPS);
}

#[test]
fn difference_from_containing_subtrahend_is_empty() {
    let (outer, inner) = nested_squares();

    let difference = difference_convex(&inner, &outer, &EPS);
    assert!(difference.is_empty());
}

#[test]
fn difference_of_identical_squares_is_empty() {
    let (a, _) = overlapping_squares();

    let difference = difference_convex(&a, &a.clone(), &EPS);
    assert!(difference.is_empty());
}

#[test]
fn area_law_holds_for_overlapping_squares() {
    let (a, b) = overlapping_squares();

    let area_a = a.signed_area();
    let area_b = b.signed_area();
    let union = union_convex(&a, &b, &EPS).signed_area();
    let intersection = intersect_convex(&a, &b, &EPS).unwrap().signed_area();
    let difference = difference_convex(&a, &b, &EPS).signed_area();

    let tolerance = EPS * 100.0;
    assert!((union + intersection - (area_a + area_b)).abs() < tolerance);
    assert!((area_a - intersection - difference).abs() < tolerance);
}

#[test]
fn union_of_edge_adjacent_squares() {
    let a = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
    let b = ring![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 1.0, y: 1.0)];

    let union = union_convex(&a, &b, &EPS);
    assert_eq!(union.outers.len(), 1);
    assert!(union.holes.is_empty());
    assert!((union.signed_area() - 2.0).abs() < EPS);
}

#[test]
fn union_of_exact_scalars() {
    use planar_types::ExactScalar;

    fn exact(s: &str) -> ExactScalar {
        s.parse().unwrap()
    }
    fn exact_square(x0: &str, y0: &str, x1: &str, y1: &str) -> Ring<ExactScalar> {
        Ring::new(vec![
            planar_types::coord! { x: exact(x0), y: exact(y0) },
            planar_types::coord! { x: exact(x1), y: exact(y0) },
            planar_types::coord! { x: exact(x1), y: exact(y1) },
            planar_types::coord! { x: exact(x0), y: exact(y1) },
        ])
    }

    let a = exact_square("0", "0", "2", "2");
    let b = exact_square("1", "1", "3", "3");
    let epsilon = ExactScalar::default_epsilon();

    let union = union_convex(&a, &b, &epsilon);
    assert_eq!(union.outers.len(), 1);
    assert!(union.holes.is_empty());
    assert_eq!(union.signed_area(), exact("7"));
}

#[test]
fn boolean_inputs_with_too_few_vertices_collapse_silently() {
    let sliver: Ring<f64> = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)];
    let (a, _) = overlapping_squares();

    let union = union_convex(&sliver, &a, &EPS);
    assert_eq!(union.outers.len(), 1);
    assert!((union.signed_area() - 4.0).abs() < EPS);

    let difference = difference_convex(&sliver, &a, &EPS);
    assert!(difference.is_empty());
}
