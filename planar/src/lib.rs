#![warn(missing_debug_implementations)]
//! A two-dimensional computational-geometry kernel.
//!
//! The crate answers questions about points, segments, and polygons:
//! orientation, segment intersection, convex hulls, Delaunay triangulation,
//! convex Boolean operations, point location, and Bézier evaluation, with
//! tolerance-aware semantics that behave identically under binary floating
//! point (`f64`) and arbitrary-precision decimal arithmetic
//! ([`ExactScalar`]).
//!
//! Every operation is a pure function: inputs are taken by reference and
//! never mutated, results are freshly owned values, and nothing retains
//! state across calls. The library is reentrant; concurrent callers need no
//! synchronization.
//!
//! # Tolerances
//!
//! Predicates take an explicit epsilon, a quantity in the same units as the
//! input coordinates ([`Scalar::default_epsilon`] is 10⁻⁹). Comparisons of
//! bilinear quantities (crosses and dots) against zero are scaled by the
//! squared lengths involved, which keeps the predicates stable under uniform
//! scaling of the inputs; see the [`kernel`](algorithm::kernel) module.
//!
//! # Examples
//!
//! ```
//! use planar::{coord, ConvexHull, Orientation, classify_point, Line};
//!
//! // Which side of a segment is a point on?
//! let segment = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 });
//! let side = classify_point(&segment, &coord! { x: 0.0, y: 5.0 }, &1e-9);
//! assert_eq!(side, Orientation::Left);
//!
//! // Convex hull of a point set, counter-clockwise.
//! let points = [
//!     coord! { x: 0.0, y: 0.0 },
//!     coord! { x: 1.0, y: 0.0 },
//!     coord! { x: 1.0, y: 1.0 },
//!     coord! { x: 0.0, y: 1.0 },
//!     coord! { x: 0.5, y: 0.5 },
//! ];
//! let hull = points.convex_hull();
//! assert_eq!(hull.len(), 4);
//! ```

pub use planar_types::{coord, ring, Coord, ExactScalar, Line, Ring, Scalar, Triangle};

pub mod algorithm;
pub use algorithm::*;

mod error;
pub use error::Error;

/// A prelude which re-exports the traits for manipulating objects in this
/// crate. Typically imported with `use planar::prelude::*`.
pub mod prelude {
    pub use crate::algorithm::area::Area;
    pub use crate::algorithm::convex_hull::ConvexHull;
    pub use crate::algorithm::winding_order::Winding;
}
