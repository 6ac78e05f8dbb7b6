use std::fmt::Display;

use itertools::Itertools;
use num::{complex::Complex64, Zero};

use crate::util::{complex::complex_fmt, linalg::convolve_1d};

/// Leading coefficients smaller than this (in magnitude) are dropped.
pub const LEADING_ZERO_EPSILON: f64 = 1E-14;

/// Drop leading near-zero coefficients, always keeping at least one.
///
/// The input is left untouched, a trimmed copy is returned. An empty slice
/// stays empty.
///
/// ```
/// use poly_solve::normalize_coeffs;
///
/// assert_eq!(normalize_coeffs(&[0.0, 1E-15, 2.0, 0.0]), vec![2.0, 0.0]);
/// assert_eq!(normalize_coeffs(&[0.0, 0.0, 0.0]), vec![0.0]);
/// ```
#[must_use]
pub fn normalize_coeffs(coeffs: &[f64]) -> Vec<f64> {
    let first = leading_zeros(coeffs.iter().map(|c| c.abs()));
    coeffs[first..].to_vec()
}

/// Number of leading entries to skip, never skipping the last one.
fn leading_zeros(magnitudes: impl ExactSizeIterator<Item = f64>) -> usize {
    let n = magnitudes.len();
    magnitudes
        .take(n.saturating_sub(1))
        .take_while(|m| *m < LEADING_ZERO_EPSILON)
        .count()
}

/// Evaluate a polynomial given as coefficients, highest degree first, using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
///
/// An empty slice evaluates to zero.
///
/// ```
/// use poly_solve::{complex, eval_horner};
///
/// // x^2 + 1 at i
/// let y = eval_horner(&[complex!(1.0), complex!(0.0), complex!(1.0)], complex!(0.0, 1.0));
/// assert_eq!(y, complex!(0.0));
/// ```
#[inline]
#[must_use]
pub fn eval_horner(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::zero(), |acc, &c| acc * x + c)
}

/// Polynomial as a list of complex coefficients of terms of descending degree.
///
/// Always holds at least one coefficient, and the leading one is not
/// (almost) zero unless the polynomial is a constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(pub(crate) Vec<Complex64>);

impl Poly {
    #[must_use]
    pub fn new(coeffs: &[Complex64]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    /// Polynomial with real coefficients, highest degree first.
    #[must_use]
    pub fn from_reals(coeffs: &[f64]) -> Self {
        Self(coeffs.iter().map(|&c| Complex64::new(c, 0.0)).collect_vec()).normalize()
    }

    /// Monic polynomial from its complex roots.
    ///
    /// ```
    /// use poly_solve::{complex, poly, Poly};
    ///
    /// let p = Poly::from_roots(&[complex!(1.0), complex!(-1.0)]);
    /// assert_eq!(p, poly![1.0, 0.0, -1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex64]) -> Self {
        let one = Complex64::new(1.0, 0.0);
        let coeffs = roots
            .iter()
            .fold(vec![one], |acc, &r| convolve_1d(&acc, &[one, -r]));
        Self(coeffs).normalize()
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.0.len() - 1
    }

    /// The coefficient of the highest degree term.
    #[must_use]
    pub fn leading(&self) -> Complex64 {
        self.0[0]
    }

    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.0
    }

    /// True if every coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    /// Evaluate the polynomial at a single point.
    ///
    /// ```
    /// use poly_solve::{complex, poly};
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(complex!(1.0)), complex!(6.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        eval_horner(&self.0, x)
    }

    /// Evaluate at many points at once. Needs `points.len() == out.len()`.
    pub fn eval_multiple(&self, points: &[Complex64], out: &mut [Complex64]) {
        debug_assert_eq!(points.len(), out.len());
        for (y, &x) in out.iter_mut().zip(points) {
            *y = self.eval(x);
        }
    }

    /// Multiply every coefficient by `factor`. The roots stay the same.
    #[must_use]
    pub fn scaled(mut self, factor: Complex64) -> Self {
        self.0.iter_mut().for_each(|c| *c *= factor);
        self.normalize()
    }

    pub(crate) fn is_monic(&self) -> bool {
        self.leading() == Complex64::new(1.0, 0.0)
    }

    /// Make the polynomial monic in-place.
    ///
    /// Monic polynomials are scaled such that the leading coefficient is 1, and
    /// the roots are preserved
    pub(crate) fn make_monic(&mut self) {
        debug_assert!(self.is_normalized());
        if self.is_monic() || self.is_zero() {
            return;
        }
        let leading = self.leading();
        self.0.iter_mut().for_each(|c| *c /= leading);
    }

    /// Real parts of the coefficients, what the solvers work on.
    pub(crate) fn real_coeffs(&self) -> Vec<f64> {
        self.0.iter().map(|c| c.re).collect_vec()
    }

    pub(crate) fn is_normalized(&self) -> bool {
        match self.0.len() {
            0 => false,
            1 => true,
            _ => self.0[0].norm() >= LEADING_ZERO_EPSILON,
        }
    }

    pub(crate) fn normalize(mut self) -> Self {
        if self.0.is_empty() {
            return Self(vec![Complex64::zero()]);
        }
        let first = leading_zeros(self.0.iter().map(|c| c.norm()));
        self.0.drain(..first);

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.degree();
        let mut iter = self.0.iter().enumerate();
        if let Some((i, c)) = iter.next() {
            write_term(f, c, n - i)?;
        }
        for (i, c) in iter {
            f.write_str(" + ")?;
            write_term(f, c, n - i)?;
        }
        Ok(())
    }
}

fn write_term(f: &mut std::fmt::Formatter<'_>, c: &Complex64, degree: usize) -> std::fmt::Result {
    match degree {
        0 => write!(f, "{}", complex_fmt(c)),
        _ => write!(f, "{}*x^{degree}", complex_fmt(c)),
    }
}
