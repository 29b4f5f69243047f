/// Creates a [`Coord`](crate::Coord) from the given scalars.
///
/// ```txt
/// coord! { x: <scalar>, y: <scalar> }
/// ```
///
/// # Examples
///
/// ```
/// use planar_types::coord;
///
/// let c = coord! { x: 181.2, y: 51.79 };
///
/// assert_eq!(c.x, 181.2);
/// assert_eq!(c.y, 51.79);
/// ```
#[macro_export]
macro_rules! coord {
    (x: $x:expr, y: $y:expr $(,)* ) => {
        $crate::Coord { x: $x, y: $y }
    };
}

/// Creates a [`Ring`](crate::Ring) containing the given coordinates.
///
/// ```txt
/// ring![Coord OR (x: <scalar>, y: <scalar>), …]
/// ```
///
/// The first vertex is not repeated at the end; the closing edge is implied.
///
/// # Examples
///
/// ```
/// use planar_types::ring;
///
/// let unit_square = ring![
///     (x: 0.0, y: 0.0),
///     (x: 1.0, y: 0.0),
///     (x: 1.0, y: 1.0),
///     (x: 0.0, y: 1.0),
/// ];
///
/// assert_eq!(unit_square.len(), 4);
/// ```
#[macro_export]
macro_rules! ring {
    () => {
        $crate::Ring::new(::std::vec::Vec::new())
    };
    (
        $(( $($tag:tt : $val:expr),* )),*
        $(,)?
    ) => {
        $crate::Ring::new(
            ::std::vec![
                $(
                    $crate::coord! { $( $tag: $val ),* },
                )*
            ]
        )
    };
    (
        $($coord:expr),*
        $(,)?
    ) => {
        $crate::Ring::new(::std::vec![$($coord),*])
    };
}
