use crate::{coord, Scalar};

/// A position on the two-dimensional Cartesian plane.
///
/// This type implements the vector-space operations [`Add`], [`Sub`] and
/// [`Neg`], both on values and on references; the scalar families are
/// `Clone`, not `Copy`, so reference arithmetic avoids consuming operands
/// that are still needed.
///
/// # Semantics
///
/// The only requirement is that the coordinates it contains are valid
/// numbers (for e.g. not `f64::NAN`).
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord<T: Scalar = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> From<(T, T)> for Coord<T> {
    #[inline]
    fn from(coords: (T, T)) -> Self {
        coord! {
            x: coords.0,
            y: coords.1,
        }
    }
}

impl<T: Scalar> From<[T; 2]> for Coord<T> {
    #[inline]
    fn from(coords: [T; 2]) -> Self {
        let [x, y] = coords;
        coord! { x: x, y: y }
    }
}

impl<T: Scalar> From<Coord<T>> for (T, T) {
    #[inline]
    fn from(coord: Coord<T>) -> Self {
        (coord.x, coord.y)
    }
}

impl<T: Scalar> Coord<T> {
    /// The coordinate at the origin.
    pub fn zero() -> Self {
        coord! { x: T::zero(), y: T::zero() }
    }

    /// Returns a tuple that contains the x/horizontal & y/vertical component
    /// of the coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_types::coord;
    ///
    /// let c = coord! { x: 40.02, y: 116.34 };
    /// let (x, y) = c.x_y();
    ///
    /// assert_eq!(x, 40.02);
    /// assert_eq!(y, 116.34);
    /// ```
    #[inline]
    pub fn x_y(&self) -> (T, T) {
        (self.x.clone(), self.y.clone())
    }

    /// The scalar product of two vectors.
    pub fn dot_product(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// The z component of the cross product of two vectors: positive when
    /// `other` points to the left of `self`.
    pub fn cross_product(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    /// The squared Euclidean length of the vector.
    ///
    /// Squared lengths are the kernel's scale-aware quantities; the square
    /// root is only taken where a tolerance genuinely lives in length units.
    pub fn magnitude_squared(&self) -> T {
        self.dot_product(self)
    }
}

use core::ops::{Add, Neg, Sub};

/// Negate a coordinate.
///
/// # Examples
///
/// ```
/// use planar_types::coord;
///
/// let p = coord! { x: 1.25, y: 2.5 };
/// let q = -p.clone();
///
/// assert_eq!(q.x, -p.x);
/// assert_eq!(q.y, -p.y);
/// ```
impl<T: Scalar> Neg for Coord<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        coord! {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Add two coordinates.
///
/// # Examples
///
/// ```
/// use planar_types::coord;
///
/// let p = coord! { x: 1.25, y: 2.5 };
/// let q = coord! { x: 1.5, y: 2.5 };
/// let sum = p + q;
///
/// assert_eq!(sum.x, 2.75);
/// assert_eq!(sum.y, 5.0);
/// ```
impl<T: Scalar> Add for Coord<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        coord! {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<'a, T: Scalar> Add for &'a Coord<T> {
    type Output = Coord<T>;

    #[inline]
    fn add(self, rhs: Self) -> Coord<T> {
        coord! {
            x: self.x.clone() + rhs.x.clone(),
            y: self.y.clone() + rhs.y.clone(),
        }
    }
}

/// Subtract a coordinate from another.
///
/// # Examples
///
/// ```
/// use planar_types::coord;
///
/// let p = coord! { x: 1.5, y: 2.5 };
/// let q = coord! { x: 1.25, y: 2.5 };
/// let diff = p - q;
///
/// assert_eq!(diff.x, 0.25);
/// assert_eq!(diff.y, 0.0);
/// ```
impl<T: Scalar> Sub for Coord<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        coord! {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<'a, T: Scalar> Sub for &'a Coord<T> {
    type Output = Coord<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Coord<T> {
        coord! {
            x: self.x.clone() - rhs.x.clone(),
            y: self.y.clone() - rhs.y.clone(),
        }
    }
}
