//! Extras for [`Complex64`] that `num` does not provide out of the box.

use num::complex::Complex64;

/// Component-wise tolerance used by [`ComplexExt::approx_eq_default`].
pub const DEFAULT_EPSILON: f64 = 1E-12;

/// Number of decimals used by [`ComplexExt::to_string_prec`] when rendering
/// plot labels.
pub const DEFAULT_PRECISION: usize = 6;

// rounded components smaller than this are not printed
const SUPPRESS_THRESHOLD: f64 = 1E-12;

pub trait ComplexExt {
    /// Distance from the origin. Same as `norm`, which is computed with `hypot`.
    fn magnitude(&self) -> f64;

    /// True if both the real and imaginary parts differ by less than `epsilon`.
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;

    /// [`ComplexExt::approx_eq`] with [`DEFAULT_EPSILON`].
    fn approx_eq_default(&self, other: &Self) -> bool {
        self.approx_eq(other, DEFAULT_EPSILON)
    }

    /// Round both components to `precision` decimals and render them, leaving
    /// out a component that rounds to zero.
    ///
    /// ```
    /// use poly_solve::{complex, ComplexExt};
    ///
    /// assert_eq!(complex!(1.5, 0.0).to_string_prec(6), "1.5");
    /// assert_eq!(complex!(0.0, -2.0).to_string_prec(6), "-2i");
    /// assert_eq!(complex!(-0.5, 0.8660254037844386).to_string_prec(6), "-0.5 + 0.866025i");
    /// assert_eq!(complex!(3.0, -1.0).to_string_prec(6), "3 - 1i");
    /// ```
    fn to_string_prec(&self, precision: usize) -> String;
}

impl ComplexExt for Complex64 {
    #[inline]
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() < epsilon && (self.im - other.im).abs() < epsilon
    }

    fn to_string_prec(&self, precision: usize) -> String {
        let r = round_to(self.re, precision);
        let i = round_to(self.im, precision);
        if i.abs() < SUPPRESS_THRESHOLD {
            return format!("{r}");
        }
        if r.abs() < SUPPRESS_THRESHOLD {
            return format!("{i}i");
        }
        let sign = if i >= 0.0 { '+' } else { '-' };
        format!("{r} {sign} {}i", i.abs())
    }
}

/// Round to a fixed number of decimals, going through the decimal
/// representation so that the result prints in its shortest form.
pub(crate) fn round_to(x: f64, precision: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let rounded: f64 = format!("{x:.precision$}").parse().unwrap_or(x);
    // adding positive zero turns -0 into 0
    rounded + 0.0
}
