use planar_types::{Coord, Scalar};

use crate::error::Error;

/// Evaluates a Bézier curve at parameter `t ∈ [0, 1]` by de Casteljau's
/// algorithm: repeated linear interpolation on a working copy of the control
/// polygon. `O(n²)` work, `O(n)` memory.
///
/// An empty control polygon or a parameter outside `[0, 1]` is an error.
///
/// # Examples
///
/// ```
/// use planar::{coord, evaluate_bezier};
///
/// let controls = [
///     coord! { x: 0.0, y: 0.0 },
///     coord! { x: 0.0, y: 1.0 },
///     coord! { x: 1.0, y: 1.0 },
///     coord! { x: 1.0, y: 0.0 },
/// ];
///
/// let start = evaluate_bezier(&controls, &0.0).unwrap();
/// assert_eq!(start, coord! { x: 0.0, y: 0.0 });
///
/// let midpoint = evaluate_bezier(&controls, &0.5).unwrap();
/// assert_eq!(midpoint, coord! { x: 0.5, y: 0.75 });
/// ```
pub fn evaluate_bezier<T: Scalar>(control_points: &[Coord<T>], t: &T) -> Result<Coord<T>, Error> {
    if control_points.is_empty() {
        return Err(Error::EmptyControlPolygon);
    }
    if *t < T::zero() || *t > T::one() {
        return Err(Error::ParameterOutOfRange);
    }

    let mut working: Vec<Coord<T>> = control_points.to_vec();
    let count = working.len();
    for level in 1..count {
        for index in 0..(count - level) {
            let next = working[index + 1].clone();
            working[index] = lerp(&working[index], &next, t);
        }
    }
    Ok(working[0].clone())
}

/// Evaluates a degree-1 Bézier curve directly; identical in semantics to
/// [`evaluate_bezier`] on two control points.
pub fn evaluate_bezier_linear<T: Scalar>(
    p0: &Coord<T>,
    p1: &Coord<T>,
    t: &T,
) -> Result<Coord<T>, Error> {
    if *t < T::zero() || *t > T::one() {
        return Err(Error::ParameterOutOfRange);
    }
    Ok(lerp(p0, p1, t))
}

/// Evaluates a degree-2 Bézier curve by its Bernstein expansion
/// `(1−t)²·p0 + 2(1−t)t·p1 + t²·p2`.
pub fn evaluate_bezier_quadratic<T: Scalar>(
    p0: &Coord<T>,
    p1: &Coord<T>,
    p2: &Coord<T>,
    t: &T,
) -> Result<Coord<T>, Error> {
    if *t < T::zero() || *t > T::one() {
        return Err(Error::ParameterOutOfRange);
    }

    let two = T::one() + T::one();
    let u = T::one() - t.clone();

    let w0 = u.clone() * u.clone();
    let w1 = two * u * t.clone();
    let w2 = t.clone() * t.clone();

    Ok(weighted_sum(&[(w0, p0), (w1, p1), (w2, p2)]))
}

/// Evaluates a degree-3 Bézier curve by its Bernstein expansion
/// `(1−t)³·p0 + 3(1−t)²t·p1 + 3(1−t)t²·p2 + t³·p3`.
pub fn evaluate_bezier_cubic<T: Scalar>(
    p0: &Coord<T>,
    p1: &Coord<T>,
    p2: &Coord<T>,
    p3: &Coord<T>,
    t: &T,
) -> Result<Coord<T>, Error> {
    if *t < T::zero() || *t > T::one() {
        return Err(Error::ParameterOutOfRange);
    }

    let three = T::one() + T::one() + T::one();
    let u = T::one() - t.clone();

    let w0 = u.clone() * u.clone() * u.clone();
    let w1 = three.clone() * u.clone() * u.clone() * t.clone();
    let w2 = three * u * t.clone() * t.clone();
    let w3 = t.clone() * t.clone() * t.clone();

    Ok(weighted_sum(&[(w0, p0), (w1, p1), (w2, p2), (w3, p3)]))
}

/// Samples a Bézier curve at `samples` uniformly spaced parameters
/// `t = i/(samples − 1)`. A single sample is taken at `t = 0`; zero samples
/// is an error.
///
/// # Examples
///
/// ```
/// use planar::{coord, sample_bezier};
///
/// let controls = [
///     coord! { x: 0.0, y: 0.0 },
///     coord! { x: 0.0, y: 1.0 },
///     coord! { x: 1.0, y: 1.0 },
///     coord! { x: 1.0, y: 0.0 },
/// ];
///
/// let samples = sample_bezier(&controls, 5).unwrap();
/// assert_eq!(samples.len(), 5);
/// assert_eq!(samples[0], coord! { x: 0.0, y: 0.0 });
/// assert_eq!(samples[4], coord! { x: 1.0, y: 0.0 });
/// ```
pub fn sample_bezier<T: Scalar>(
    control_points: &[Coord<T>],
    samples: usize,
) -> Result<Vec<Coord<T>>, Error> {
    if samples == 0 {
        return Err(Error::ZeroSampleCount);
    }
    if control_points.is_empty() {
        return Err(Error::EmptyControlPolygon);
    }
    if samples == 1 {
        return Ok(vec![evaluate_bezier(control_points, &T::zero())?]);
    }

    // from_usize is total for both scalar families
    let denominator = T::from_usize(samples - 1).unwrap();
    let mut numerator = T::zero();

    let mut output = Vec::with_capacity(samples);
    for _ in 0..samples {
        let t = numerator.clone() / denominator.clone();
        output.push(evaluate_bezier(control_points, &t)?);
        numerator = numerator + T::one();
    }
    Ok(output)
}

fn lerp<T: Scalar>(from: &Coord<T>, to: &Coord<T>, t: &T) -> Coord<T> {
    let u = T::one() - t.clone();
    Coord {
        x: u.clone() * from.x.clone() + t.clone() * to.x.clone(),
        y: u * from.y.clone() + t.clone() * to.y.clone(),
    }
}

fn weighted_sum<T: Scalar>(terms: &[(T, &Coord<T>)]) -> Coord<T> {
    let mut sum = Coord::zero();
    for (weight, point) in terms {
        sum = Coord {
            x: sum.x + weight.clone() * point.x.clone(),
            y: sum.y + weight.clone() * point.y.clone(),
        };
    }
    sum
}
