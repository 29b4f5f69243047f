use std::fmt;

/// Errors surfaced to callers for invalid input.
///
/// Degenerate *geometry* (a hull of collinear points, a Boolean operation
/// whose result collapses) is not an error; those operations return empty
/// values instead. `Error` is reserved for calls that violate an operation's
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A polygon operation was handed fewer vertices than it requires.
    InsufficientVertices { required: usize, found: usize },
    /// A Bézier parameter lies outside `[0, 1]`.
    ParameterOutOfRange,
    /// A Bézier curve needs at least one control point.
    EmptyControlPolygon,
    /// Sampling a Bézier curve requires at least one sample.
    ZeroSampleCount,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InsufficientVertices { required, found } => {
                write!(
                    f,
                    "operation requires at least {} vertices, but only {} were supplied",
                    required, found
                )
            }
            Error::ParameterOutOfRange => {
                write!(f, "curve parameter must lie within [0, 1]")
            }
            Error::EmptyControlPolygon => {
                write!(f, "at least one control point is required")
            }
            Error::ZeroSampleCount => {
                write!(f, "at least one sample is required")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_output() {
        let failure = Error::InsufficientVertices {
            required: 3,
            found: 2,
        };
        assert_eq!(
            failure.to_string(),
            "operation requires at least 3 vertices, but only 2 were supplied"
        );
    }
}
