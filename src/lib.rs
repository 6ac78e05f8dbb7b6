//! Find every complex root of a polynomial with real coefficients.
//!
//! Polynomials of degree 1 and 2 are solved in closed form. Anything of
//! degree 3 or higher goes through the Durand-Kerner (Weierstrass)
//! simultaneous iteration, seeded on a circle that contains all the roots.
//!
//! ```
//! use poly_solve::{solve, SolverConfig};
//!
//! // x^3 - 2x + 1
//! let roots = solve(&[1.0, 0.0, -2.0, 1.0], &SolverConfig::default());
//! assert_eq!(roots.len(), 3);
//! assert!(roots.converged());
//! ```
//!
//! Coefficients are always given highest degree first.
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

/// Shorthand for a [`num::complex::Complex64`].
///
/// ```
/// use poly_solve::complex;
///
/// assert_eq!(complex!(1.0), poly_solve::num::complex::Complex64::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, -2.0).im, -2.0);
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::complex::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::complex::Complex64::new($re, $im)
    };
}

/// Build a [`Poly`] from real coefficients, highest degree first.
///
/// ```
/// use poly_solve::{poly, Poly};
///
/// // x^2 - 1
/// let p = poly![1.0, 0.0, -1.0];
/// assert_eq!(p.degree(), 2);
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::from_reals(&[])
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::from_reals(&[$($c),+])
    };
}

pub use num;

mod complex_ext;
pub use complex_ext::{ComplexExt, DEFAULT_EPSILON, DEFAULT_PRECISION};

mod config;
pub use config::SolverConfig;

mod error;
pub use error::{Error, Result};

mod parse;
pub use parse::parse_coeffs;

mod plot;
pub use plot::{PlotFrame, PlotPoint};

mod poly;
pub use poly::{eval_horner, normalize_coeffs, Poly, LEADING_ZERO_EPSILON};

pub mod roots;
pub use roots::{max_residual, max_residual_relative, solve, solve_str, Method, Roots, LISTING_PRECISION};

mod util;

// re-exported for integration tests
#[doc(hidden)]
pub use util::__testing;
