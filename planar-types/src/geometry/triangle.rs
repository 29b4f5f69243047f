use crate::{Coord, Line, Ring, Scalar};

/// A bounded 2D area whose three vertices are defined by [`Coord`]s.
///
/// A triangle may be degenerate (collinear or coincident vertices);
/// algorithms that require non-degeneracy check explicitly.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<T: Scalar = f64> {
    pub a: Coord<T>,
    pub b: Coord<T>,
    pub c: Coord<T>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(a: Coord<T>, b: Coord<T>, c: Coord<T>) -> Self {
        Self { a, b, c }
    }

    pub fn to_array(&self) -> [Coord<T>; 3] {
        [self.a.clone(), self.b.clone(), self.c.clone()]
    }

    pub fn to_lines(&self) -> [Line<T>; 3] {
        [
            Line::new(self.a.clone(), self.b.clone()),
            Line::new(self.b.clone(), self.c.clone()),
            Line::new(self.c.clone(), self.a.clone()),
        ]
    }

    /// Create a [`Ring`] from the `Triangle`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planar_types::{coord, ring, Triangle};
    ///
    /// let triangle = Triangle::new(
    ///     coord! { x: 0., y: 0. },
    ///     coord! { x: 10., y: 20. },
    ///     coord! { x: 20., y: -10. },
    /// );
    ///
    /// assert_eq!(
    ///     triangle.to_ring(),
    ///     ring![
    ///         (x: 0., y: 0.),
    ///         (x: 10., y: 20.),
    ///         (x: 20., y: -10.),
    ///     ],
    /// );
    /// ```
    pub fn to_ring(&self) -> Ring<T> {
        Ring::new(vec![self.a.clone(), self.b.clone(), self.c.clone()])
    }
}

impl<IC: Into<Coord<T>>, T: Scalar> From<[IC; 3]> for Triangle<T> {
    fn from(array: [IC; 3]) -> Self {
        let [a, b, c] = array;
        Self::new(a.into(), b.into(), c.into())
    }
}
