use core::ops::Index;

use crate::{Coord, Line, Scalar};

/// A closed polygon boundary, stored as an ordered sequence of [`Coord`]s.
///
/// # Semantics
///
/// The ring is implicitly closed: the first vertex is **not** repeated at the
/// end, and [`Ring::lines`] synthesizes the closing edge. A cleaned ring has
/// no adjacent duplicate vertices and is oriented counter-clockwise for outer
/// boundaries, clockwise for holes; the cleanup routines in the algorithms
/// crate establish those invariants, this type does not enforce them.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring<T: Scalar = f64>(pub Vec<Coord<T>>);

impl<T: Scalar> Ring<T> {
    /// Instantiate a ring from a vertex sequence. An empty sequence is the
    /// empty ring, the conventional "nothing" result of the constructive
    /// algorithms.
    pub fn new(coords: Vec<Coord<T>>) -> Self {
        Self(coords)
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the vertices in order.
    pub fn coords(&self) -> impl DoubleEndedIterator<Item = &Coord<T>> {
        self.0.iter()
    }

    /// Iterate over the edges, including the closing edge from the last
    /// vertex back to the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar_types::{coord, ring, Line};
    ///
    /// let triangle = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)];
    /// let edges: Vec<Line<f64>> = triangle.lines().collect();
    ///
    /// assert_eq!(edges.len(), 3);
    /// assert_eq!(edges[2], Line::new(coord! { x: 0.0, y: 1.0 }, coord! { x: 0.0, y: 0.0 }));
    /// ```
    pub fn lines(&self) -> impl ExactSizeIterator<Item = Line<T>> + '_ {
        let len = self.0.len();
        (0..len).map(move |i| {
            let next = if i + 1 == len { 0 } else { i + 1 };
            Line::new(self.0[i].clone(), self.0[next].clone())
        })
    }

    /// Reverse the vertex order in place, flipping the winding.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn into_inner(self) -> Vec<Coord<T>> {
        self.0
    }
}

impl<T: Scalar> From<Vec<Coord<T>>> for Ring<T> {
    fn from(coords: Vec<Coord<T>>) -> Self {
        Self(coords)
    }
}

impl<T: Scalar> Index<usize> for Ring<T> {
    type Output = Coord<T>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

impl<T: Scalar> IntoIterator for Ring<T> {
    type Item = Coord<T>;
    type IntoIter = std::vec::IntoIter<Coord<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
