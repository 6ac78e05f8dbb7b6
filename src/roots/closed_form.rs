//! Exact solutions for polynomials of degree 1 and 2.

use num::complex::Complex64;

/// Below this the quadratic term is ignored and the equation is solved as
/// linear.
pub const QUADRATIC_DEGENERATE_EPSILON: f64 = 1E-16;

/// Root of `a*x + b = 0`. Needs `a != 0`.
///
/// ```
/// use poly_solve::{complex, roots::linear_roots};
///
/// assert_eq!(linear_roots(2.0, -3.0), vec![complex!(1.5)]);
/// ```
#[must_use]
pub fn linear_roots(a: f64, b: f64) -> Vec<Complex64> {
    debug_assert!(a != 0.0, "linear equation needs a non-zero slope");
    vec![Complex64::new(-b / a, 0.0)]
}

/// Roots of `a*x^2 + b*x + c = 0` by the quadratic formula.
///
/// A non-negative discriminant gives two real roots, `+` branch first. A
/// negative one gives a conjugate pair, positive imaginary part first. If `a`
/// is (almost) zero this falls back to [`linear_roots`] and returns one root.
///
/// ```
/// use poly_solve::{complex, roots::quadratic_roots};
///
/// assert_eq!(quadratic_roots(1.0, 0.0, -4.0), vec![complex!(2.0), complex!(-2.0)]);
/// assert_eq!(quadratic_roots(1.0, 2.0, 5.0), vec![complex!(-1.0, 2.0), complex!(-1.0, -2.0)]);
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<Complex64> {
    if a.abs() < QUADRATIC_DEGENERATE_EPSILON {
        return linear_roots(b, c);
    }

    let two_a = 2.0 * a;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        vec![
            Complex64::new((-b + sqrt_d) / two_a, 0.0),
            Complex64::new((-b - sqrt_d) / two_a, 0.0),
        ]
    } else {
        let re = -b / two_a;
        let im = (-discriminant).sqrt() / two_a;
        vec![Complex64::new(re, im), Complex64::new(re, -im)]
    }
}
