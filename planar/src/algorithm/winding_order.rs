use planar_types::{Ring, Scalar};

/// How a ring is wound, clockwise or counter-clockwise.
///
/// In the mathematical (y-up) coordinate system used throughout this crate a
/// counter-clockwise ring has positive shoelace area.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

/// Twice the signed shoelace area of a ring: `Σ (xᵢyᵢ₊₁ − xᵢ₊₁yᵢ)` over the
/// edges, closing edge included.
pub fn twice_signed_ring_area<T: Scalar>(ring: &Ring<T>) -> T {
    let mut sum = T::zero();
    for line in ring.lines() {
        sum = sum + (line.start.x.clone() * line.end.y.clone()
            - line.end.x.clone() * line.start.y.clone());
    }
    sum
}

/// Calculate, and work with, the winding order of a [`Ring`].
pub trait Winding<T: Scalar> {
    /// Return the winding order of this object, or `None` when the winding
    /// is undefined (fewer than three vertices, or zero signed area).
    fn winding_order(&self) -> Option<WindingOrder>;

    /// True iff this is wound clockwise.
    fn is_cw(&self) -> bool {
        self.winding_order() == Some(WindingOrder::Clockwise)
    }

    /// True iff this is wound counter-clockwise.
    fn is_ccw(&self) -> bool {
        self.winding_order() == Some(WindingOrder::CounterClockwise)
    }

    /// Change this object's vertices so they are in clockwise winding order.
    fn make_cw_winding(&mut self);

    /// Change this object's vertices so they are in counter-clockwise
    /// winding order.
    fn make_ccw_winding(&mut self);

    /// Change the winding order to the given one.
    fn make_winding_order(&mut self, winding_order: WindingOrder) {
        match winding_order {
            WindingOrder::Clockwise => self.make_cw_winding(),
            WindingOrder::CounterClockwise => self.make_ccw_winding(),
        }
    }
}

impl<T: Scalar> Winding<T> for Ring<T> {
    fn winding_order(&self) -> Option<WindingOrder> {
        let shoelace = twice_signed_ring_area(self);
        if shoelace < T::zero() {
            Some(WindingOrder::Clockwise)
        } else if shoelace > T::zero() {
            Some(WindingOrder::CounterClockwise)
        } else {
            None
        }
    }

    fn make_cw_winding(&mut self) {
        if self.is_ccw() {
            self.reverse();
        }
    }

    fn make_ccw_winding(&mut self) {
        if self.is_cw() {
            self.reverse();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_types::ring;

    #[test]
    fn square_windings() {
        let mut square = ring![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ];
        assert!(square.is_ccw());
        assert_eq!(twice_signed_ring_area(&square), 2.0);

        square.make_cw_winding();
        assert!(square.is_cw());
        assert_eq!(twice_signed_ring_area(&square), -2.0);

        square.make_ccw_winding();
        assert!(square.is_ccw());
    }

    #[test]
    fn degenerate_rings_have_no_winding() {
        let empty: Ring<f64> = ring![];
        assert_eq!(empty.winding_order(), None);

        let flat = ring![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
        assert_eq!(flat.winding_order(), None);
    }
}
