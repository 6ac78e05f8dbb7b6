//! Root finders and the [`Roots`] they produce.

use std::ops::Index;

use itertools::Itertools;
use num::complex::Complex64;

use crate::{
    normalize_coeffs, parse_coeffs,
    util::{complex::complex_sort_mut, doc_macros::errors_parse},
    ComplexExt, Result, SolverConfig,
};

mod closed_form;
pub use closed_form::{linear_roots, quadratic_roots, QUADRATIC_DEGENERATE_EPSILON};
mod durand_kerner;
pub use durand_kerner::{durand_kerner, durand_kerner_real};
mod initial_guess;
pub use initial_guess::{initial_guesses_circle, initial_guesses_random, initial_radius};

/// Decimals used by [`Roots::listing`] by default.
pub const LISTING_PRECISION: usize = 10;

/// How a set of roots was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Constant polynomial, there is nothing to find.
    None,
    Linear,
    Quadratic,
    DurandKerner,
}

/// All the roots of a polynomial, in the order the solver produced them.
///
/// The order is whatever the solver ended up with, it is not sorted by any
/// property of the roots. Use [`Roots::sorted`] for a canonical order.
#[derive(Clone, Debug, PartialEq)]
pub struct Roots {
    degree: usize,
    method: Method,
    roots: Vec<Complex64>,
    iterations: usize,
    converged: bool,
}

impl Roots {
    pub(crate) const fn constant() -> Self {
        Self {
            degree: 0,
            method: Method::None,
            roots: vec![],
            iterations: 0,
            converged: true,
        }
    }

    pub(crate) fn closed_form(degree: usize, method: Method, roots: Vec<Complex64>) -> Self {
        Self {
            degree,
            method,
            roots,
            iterations: 0,
            converged: true,
        }
    }

    pub(crate) fn iterative(roots: Vec<Complex64>, iterations: usize, converged: bool) -> Self {
        Self {
            degree: roots.len(),
            method: Method::DurandKerner,
            roots,
            iterations,
            converged,
        }
    }

    /// Degree of the polynomial after dropping leading zeros.
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Number of iterations performed, zero for closed form solutions.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// False if the iterative solver ran out of iterations before every
    /// correction fell below the tolerance.
    #[must_use]
    pub const fn converged(&self) -> bool {
        self.converged
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True for constant polynomials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.roots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.roots.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Complex64> {
        self.roots
    }

    /// Copy of the roots sorted by real part, then imaginary part.
    #[must_use]
    pub fn sorted(&self) -> Vec<Complex64> {
        let mut roots = self.roots.clone();
        complex_sort_mut(&mut roots);
        roots
    }

    /// Sort in place by real part, then imaginary part.
    pub fn sort(&mut self) {
        complex_sort_mut(&mut self.roots);
    }

    /// Human readable report, one root per line with its magnitude.
    ///
    /// ```
    /// use poly_solve::{solve, SolverConfig};
    ///
    /// let roots = solve(&[1.0, -3.0, 2.0], &SolverConfig::default());
    /// assert_eq!(
    ///     roots.listing(4),
    ///     "roots found: 2\n\nroot 1: 2    |  abs=2.0000\nroot 2: 1    |  abs=1.0000\n"
    /// );
    /// ```
    #[must_use]
    pub fn listing(&self, precision: usize) -> String {
        let lines = self
            .iter()
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "root {}: {}    |  abs={:.precision$}\n",
                    i + 1,
                    r.to_string_prec(precision),
                    r.magnitude()
                )
            })
            .join("");
        format!("roots found: {}\n\n{lines}", self.len())
    }
}

impl Index<usize> for Roots {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.roots[index]
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl IntoIterator for Roots {
    type Item = Complex64;
    type IntoIter = std::vec::IntoIter<Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

/// Find all roots of a polynomial with real coefficients, highest degree
/// first.
///
/// Leading near-zero coefficients are dropped first (on a private copy).
/// Constants have no roots, degree 1 and 2 are solved exactly and everything
/// above goes through [`durand_kerner_real`].
///
/// ```
/// use poly_solve::{solve, ComplexExt, Method, SolverConfig};
///
/// let roots = solve(&[0.0, 1.0, 0.0, 1.0], &SolverConfig::default());
/// assert_eq!(roots.method(), Method::Quadratic);
/// assert_eq!(roots[0].to_string_prec(6), "1i");
///
/// let none = solve(&[0.0, 0.0, 0.0], &SolverConfig::default());
/// assert!(none.is_empty());
/// assert_eq!(none.degree(), 0);
/// ```
#[must_use]
pub fn solve(coeffs: &[f64], config: &SolverConfig) -> Roots {
    let coeffs = normalize_coeffs(coeffs);
    let roots = match coeffs[..] {
        [] | [_] => Roots::constant(),
        [a, b] => Roots::closed_form(1, Method::Linear, linear_roots(a, b)),
        [a, b, c] => Roots::closed_form(2, Method::Quadratic, quadratic_roots(a, b, c)),
        _ => durand_kerner_real(&coeffs, config),
    };
    log::debug!(
        "{{degree: {}, method: {:?}, iterations: {}, converged: {}}}",
        roots.degree(),
        roots.method(),
        roots.iterations(),
        roots.converged()
    );
    roots
}

/// Parse coefficients with [`parse_coeffs`] and [`solve`] them.
///
/// # Errors
#[doc = errors_parse!()]
///
/// Nothing is solved when parsing fails.
pub fn solve_str(text: &str, config: &SolverConfig) -> Result<Roots> {
    let coeffs = parse_coeffs(text)?;
    Ok(solve(&coeffs, config))
}

/// Largest residual `|p(z)|` over a set of roots, useful to judge how good a
/// result is.
#[must_use]
pub fn max_residual(coeffs: &[f64], roots: &Roots) -> f64 {
    let p = coeffs.iter().map(|&c| Complex64::new(c, 0.0)).collect_vec();
    roots
        .iter()
        .map(|&z| crate::eval_horner(&p, z).norm())
        .fold(0.0, f64::max)
}

/// Like [`max_residual`], but each residual is divided by
/// `sum |a_i| |z|^(n-i)`, the size of the terms it came from. This is the
/// backward error, it stays near machine precision for a good root however
/// large the coefficients are.
///
/// ```
/// use poly_solve::{max_residual_relative, solve, SolverConfig};
///
/// let coeffs = [1E6, -3E6, 2E6];
/// let roots = solve(&coeffs, &SolverConfig::default());
/// assert!(max_residual_relative(&coeffs, &roots) < 1E-15);
/// ```
#[must_use]
pub fn max_residual_relative(coeffs: &[f64], roots: &Roots) -> f64 {
    let p = coeffs.iter().map(|&c| Complex64::new(c, 0.0)).collect_vec();
    let magnitudes = coeffs.iter().map(|&c| Complex64::new(c.abs(), 0.0)).collect_vec();
    roots
        .iter()
        .map(|&z| {
            let residual = crate::eval_horner(&p, z).norm();
            let scale = crate::eval_horner(&magnitudes, Complex64::new(z.norm(), 0.0)).re;
            if scale > 0.0 {
                residual / scale
            } else {
                residual
            }
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod test {
    use super::{max_residual, solve, solve_str, Method};
    use crate::{util::__testing::check_roots, ComplexExt, Error, SolverConfig};

    #[test]
    fn dispatch_by_degree() {
        let config = SolverConfig::default();
        assert_eq!(solve(&[5.0], &config).method(), Method::None);
        assert_eq!(solve(&[0.0, 2.0, 1.0], &config).method(), Method::Linear);
        assert_eq!(solve(&[1.0, 2.0, 1.0], &config).method(), Method::Quadratic);
        assert_eq!(
            solve(&[1.0, 0.0, -2.0, 1.0], &config).method(),
            Method::DurandKerner
        );
    }

    #[test]
    fn all_zero_has_no_roots() {
        let roots = solve(&[0.0, 0.0, 0.0], &SolverConfig::default());
        assert!(roots.is_empty());
        assert_eq!(roots.degree(), 0);
        assert!(roots.converged());
        assert!(solve(&[], &SolverConfig::default()).is_empty());
    }

    #[test]
    fn cubic() {
        let coeffs = [1.0, 0.0, -2.0, 1.0];
        let roots = solve(&coeffs, &SolverConfig::default());
        assert_eq!(roots.len(), 3);
        assert!(roots.converged());
        let sqrt5 = 5.0_f64.sqrt();
        assert!(check_roots(
            roots.as_slice().to_vec(),
            vec![
                complex!(1.0),
                complex!((sqrt5 - 1.0) / 2.0),
                complex!((-1.0 - sqrt5) / 2.0)
            ],
            1E-6
        ));
        assert!(max_residual(&coeffs, &roots) < 1E-9);
    }

    #[test]
    fn leading_zeros_lower_the_degree() {
        let roots = solve(&[0.0, 0.0, 1.0, 0.0, -4.0], &SolverConfig::default());
        assert_eq!(roots.degree(), 2);
        assert!(check_roots(
            roots.into_vec(),
            vec![complex!(2.0), complex!(-2.0)],
            1E-12
        ));
    }

    #[test]
    fn repeated_root() {
        let roots = solve(&[1.0, -2.0, 1.0], &SolverConfig::default());
        assert_eq!(roots.as_slice(), &[complex!(1.0), complex!(1.0)]);
    }

    #[test]
    fn deterministic() {
        let config = SolverConfig::default();
        let coeffs = [2.0, -3.0, 0.5, 7.0, -1.0, 4.0];
        let a = solve(&coeffs, &config);
        let b = solve(&coeffs, &config);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert!(x.approx_eq(y, config.tolerance));
        }
    }

    #[test]
    fn sorted() {
        let mut roots = solve(&[1.0, 0.0, -1.0], &SolverConfig::default());
        assert_eq!(roots.sorted(), vec![complex!(-1.0), complex!(1.0)]);
        assert_eq!(roots[0], complex!(1.0));
        roots.sort();
        assert_eq!(roots.as_slice(), &[complex!(-1.0), complex!(1.0)]);
    }

    #[test]
    fn from_text() {
        let roots = solve_str("1 0 -2 1", &SolverConfig::default()).unwrap();
        assert_eq!(roots.len(), 3);
        assert_eq!(
            solve_str("1 x 1", &SolverConfig::default()),
            Err(Error::InvalidCoefficient {
                token: "x".to_owned()
            })
        );
        assert_eq!(
            solve_str("   ", &SolverConfig::default()),
            Err(Error::NoCoefficients)
        );
    }

    #[test]
    fn listing() {
        let roots = solve(&[1.0, 0.0, 1.0], &SolverConfig::default());
        assert_eq!(
            roots.listing(3),
            "roots found: 2\n\nroot 1: 1i    |  abs=1.000\nroot 2: -1i    |  abs=1.000\n"
        );
        assert_eq!(solve(&[0.0], &SolverConfig::default()).listing(3), "roots found: 0\n\n");
    }
}
