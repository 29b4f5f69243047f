#![warn(missing_debug_implementations)]
//! The `planar-types` library defines the primitive value types of the planar
//! geometry kernel.
//!
//! In most cases you will only need to use this crate if you are a crate
//! author and want compatibility with the kernel's types. Otherwise, the
//! [`planar`](https://crates.io/crates/planar) crate re-exports these types
//! and additionally provides the geometric algorithms.
//!
//! ## Geometries
//!
//! - **[`Coord`]**: a single position on the two-dimensional Cartesian plane
//! - **[`Line`]**: a line segment represented by two [`Coord`]s
//! - **[`Triangle`]**: a bounded area represented by three [`Coord`] vertices
//! - **[`Ring`]**: a closed polygon boundary, stored as an open vertex
//!   sequence (the first vertex is *not* repeated at the end)
//!
//! ## Coordinates and numeric types
//!
//! All geometry types are generic over a [`Scalar`]. The kernel ships two
//! instantiations: [`f64`] for binary floating point and [`ExactScalar`]
//! (an arbitrary-precision decimal) for exact work. Scalars are `Clone`, not
//! `Copy` (the decimal family carries heap-allocated digits), so the types
//! here take and return values by reference where a `Copy`-only design would
//! pass by value.
//!
//! ```rust
//! use planar_types::{coord, Coord, ExactScalar};
//!
//! let binary: Coord<f64> = coord! { x: 1.25, y: -3.5 };
//! assert_eq!(binary.x_y(), (1.25, -3.5));
//!
//! let exact: Coord<ExactScalar> = coord! {
//!     x: "1.25".parse().unwrap(),
//!     y: "-3.5".parse().unwrap(),
//! };
//! assert_eq!(exact.x.to_string(), "1.25");
//! ```
//!
//! # Features
//!
//! - `serde`: allows the value types to be serialized and deserialized with
//!   [Serde](https://serde.rs/)

pub use bigdecimal;

mod macros;

mod scalar;
pub use scalar::{ExactScalar, Scalar};

pub mod geometry;
pub use geometry::{Coord, Line, Ring, Triangle};
