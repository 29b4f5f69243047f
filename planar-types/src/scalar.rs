use core::fmt::{Debug, Display};
use core::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive, Zero};

/// The arbitrary-precision decimal scalar family.
///
/// Values carry their full decimal expansion; the four field operations are
/// exact, and [`Scalar::sqrt`] rounds to the crate's default 100-digit
/// context.
pub type ExactScalar = BigDecimal;

/// The numeric bound every algorithm of the kernel is generic over.
///
/// A `Scalar` is an ordered field value: the four arithmetic operations,
/// unary negation, equality and ordering, absolute value, and square root.
/// Construction from a decimal string comes via [`FromStr`], and small
/// integer constants via [`Zero`](num_traits::Zero),
/// [`One`](num_traits::One) and [`FromPrimitive`].
///
/// Two instantiations are provided: `f64` (binary floating point, ~53-bit
/// mantissa) and [`ExactScalar`] (arbitrary-precision decimal). Mixing the
/// two families within a single call is forbidden by contract; no conversion
/// between them happens inside the kernel.
pub trait Scalar:
    Num
    + Signed
    + Clone
    + PartialOrd
    + FromPrimitive
    + ToPrimitive
    + FromStr
    + Display
    + Debug
    + 'static
{
    /// Square root.
    ///
    /// Callers pass non-negative values only; the kernel takes square roots
    /// of squared lengths exclusively.
    fn sqrt(&self) -> Self;

    /// The default comparison tolerance, exactly 10⁻⁹.
    ///
    /// Epsilons are quantities in the same domain as the inputs, not
    /// relative ratios; callers working far from unit scale supply their
    /// own.
    fn default_epsilon() -> Self;
}

impl Scalar for f64 {
    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn default_epsilon() -> Self {
        1e-9
    }
}

impl Scalar for BigDecimal {
    /// Rounds to the default 100-significant-digit context. A negative
    /// input (a contract violation) yields zero.
    fn sqrt(&self) -> Self {
        BigDecimal::sqrt(self).unwrap_or_else(Zero::zero)
    }

    fn default_epsilon() -> Self {
        BigDecimal::from(1) / BigDecimal::from(1_000_000_000)
    }
}
