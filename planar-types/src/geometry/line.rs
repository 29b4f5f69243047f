use crate::{Coord, Scalar};

/// A line segment made up of exactly two [`Coord`]s.
///
/// The endpoints may coincide; such a zero-length segment is *degenerate*
/// and the predicates that cannot handle one check for it explicitly via
/// [`Line::is_degenerate`].
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T: Scalar = f64> {
    pub start: Coord<T>,
    pub end: Coord<T>,
}

impl<T: Scalar> Line<T> {
    /// Creates a new line segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_types::{coord, Line};
    ///
    /// let line = Line::new(coord! { x: 0., y: 0. }, coord! { x: 1., y: 2. });
    ///
    /// assert_eq!(line.start, coord! { x: 0., y: 0. });
    /// assert_eq!(line.end, coord! { x: 1., y: 2. });
    /// ```
    pub fn new<C>(start: C, end: C) -> Self
    where
        C: Into<Coord<T>>,
    {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Calculate the difference in coordinates (Δx, Δy).
    pub fn delta(&self) -> Coord<T> {
        &self.end - &self.start
    }

    /// Calculate the difference in ‘x’ components (Δx).
    pub fn dx(&self) -> T {
        self.end.x.clone() - self.start.x.clone()
    }

    /// Calculate the difference in ‘y’ components (Δy).
    pub fn dy(&self) -> T {
        self.end.y.clone() - self.start.y.clone()
    }

    /// The same segment traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
        }
    }

    /// Whether the segment's length is at most `epsilon`, i.e. its squared
    /// length is at most `epsilon²`.
    pub fn is_degenerate(&self, epsilon: &T) -> bool {
        self.delta().magnitude_squared() <= epsilon.clone() * epsilon.clone()
    }
}

impl<T: Scalar, C: Into<Coord<T>>> From<(C, C)> for Line<T> {
    fn from((start, end): (C, C)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord;

    #[test]
    fn delta_and_components() {
        let line = Line::new(coord! { x: 1.0, y: 2.0 }, coord! { x: 4.0, y: 6.0 });
        assert_eq!(line.delta(), coord! { x: 3.0, y: 4.0 });
        assert_eq!(line.dx(), 3.0);
        assert_eq!(line.dy(), 4.0);
    }

    #[test]
    fn degeneracy() {
        let collapsed = Line::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 1.0, y: 1.0 });
        assert!(collapsed.is_degenerate(&1e-9));

        let tiny = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1e-12, y: 0.0 });
        assert!(tiny.is_degenerate(&1e-9));

        let real = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
        assert!(!real.is_degenerate(&1e-9));
    }

    #[test]
    fn reversal() {
        let line = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 2.0 });
        assert_eq!(line.reversed().reversed(), line);
    }
}
