/// Signed and unsigned planar area.
pub mod area;
pub use area::Area;

/// Bézier curve evaluation and sampling.
pub mod bezier;
pub use bezier::{
    evaluate_bezier, evaluate_bezier_cubic, evaluate_bezier_linear, evaluate_bezier_quadratic,
    sample_bezier,
};

/// Boolean operations (intersection, union, difference) on convex polygons.
pub mod bool_ops;
pub use bool_ops::{difference_convex, intersect_convex, union_convex, BooleanResult};

/// Ring cleanup: deduplication, spike removal, orientation.
pub mod cleanup;
pub use cleanup::{
    cleanup_ring, normalize_ring, remove_collinear_spikes, remove_duplicate_vertices,
};

/// Calculate the convex hull of a point set.
pub mod convex_hull;
pub use convex_hull::{monotone_chain_hull, ConvexHull};

/// Locate a coordinate relative to a polygon boundary.
pub mod coordinate_position;
pub use coordinate_position::{locate_in_convex_ring, locate_in_ring, CoordPos};

/// Scale-aware numeric predicates shared by every algorithm.
pub mod kernel;

/// Intersect two line segments.
pub mod line_intersection;
pub use line_intersection::{intersect_segments, SegmentIntersection};

/// Classify a point's position relative to a directed segment.
pub mod orientation;
pub use orientation::{classify_point, Orientation};

/// Delaunay triangulation of a point set.
pub mod triangulate;
pub use triangulate::{delaunay_triangulation, delaunay_triangulation_with_seed};

/// Calculate, and work with, a ring's winding order.
pub mod winding_order;
pub use winding_order::{Winding, WindingOrder};
