use std::f64::consts::PI;

use num::complex::Complex64;

use crate::{util::casting::usize_to_f64, Poly};

/// Radius of a disk containing all the roots, `1 + max |a_i / a_0|` (Cauchy's
/// bound). Falls back to 1 if the leading coefficient is zero.
///
/// ```
/// use poly_solve::{poly, roots::initial_radius};
///
/// assert_eq!(initial_radius(&poly![1.0, 0.0, -2.0, 1.0]), 3.0);
/// assert_eq!(initial_radius(&poly![2.0, 1.0, -1.0]), 1.5);
/// ```
#[must_use]
pub fn initial_radius(poly: &Poly) -> f64 {
    let a0 = poly.leading().norm();
    if a0 <= 0.0 {
        return 1.0;
    }
    1.0 + poly.coeffs()[1..]
        .iter()
        .map(|c| c.norm() / a0)
        .fold(0.0, f64::max)
}

/// Spread one guess per slot of `out` evenly on the circle of radius
/// [`initial_radius`], the first one on the positive real axis.
pub fn initial_guesses_circle(poly: &Poly, out: &mut [Complex64]) {
    let radius = initial_radius(poly);
    let n = usize_to_f64(out.len());
    for (k, y) in out.iter_mut().enumerate() {
        let theta = 2.0 * PI * usize_to_f64(k) / n;
        *y = Complex64::new(radius * theta.cos(), radius * theta.sin());
    }
}

/// Guesses sampled uniformly inside the disk of radius [`initial_radius`].
///
/// Deterministic for a given `seed`. Handy to break the symmetry of the circle
/// when a polynomial is itself symmetric.
pub fn initial_guesses_random(poly: &Poly, seed: u64, out: &mut [Complex64]) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let high = initial_radius(poly);
    for y in out {
        let radius = rng.f64().sqrt() * high;
        let angle = rng.f64() * std::f64::consts::TAU;
        *y = Complex64::from_polar(radius, angle);
    }
}

#[cfg(test)]
mod test {
    use num::{complex::Complex64, Zero};

    use super::{initial_guesses_circle, initial_guesses_random, initial_radius};
    use crate::ComplexExt;

    #[test]
    fn radius() {
        assert_eq!(initial_radius(&poly![2.0, -8.0, 1.0, 4.0]), 5.0);
        assert_eq!(initial_radius(&poly![1.0, 0.0, 0.0, 0.0]), 1.0);
        assert_eq!(initial_radius(&poly![0.0]), 1.0);
    }

    #[test]
    fn circle() {
        let p = poly![1.0, 0.0, 0.0, 0.0, -3.0];
        let mut guesses = [Complex64::zero(); 4];
        initial_guesses_circle(&p, &mut guesses);
        let expected = [
            complex!(4.0),
            complex!(0.0, 4.0),
            complex!(-4.0),
            complex!(0.0, -4.0),
        ];
        for (g, e) in guesses.iter().zip(&expected) {
            assert!(g.approx_eq(e, 1E-12), "{g} != {e}");
        }
    }

    #[test]
    fn random_is_seeded_and_bounded() {
        let p = poly![1.0, 2.0, -1.0, 3.0];
        let mut a = [Complex64::zero(); 3];
        let mut b = [Complex64::zero(); 3];
        initial_guesses_random(&p, 42, &mut a);
        initial_guesses_random(&p, 42, &mut b);
        assert_eq!(a, b);
        assert!(a.iter().all(|z| z.norm() <= initial_radius(&p)));
    }
}
