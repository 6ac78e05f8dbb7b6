//! Helpers for randomized tests. Not part of the public API, nothing in here
//! is meant for production use.

use std::ops::RangeInclusive;

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use crate::Poly;

/// Components closer to zero than this are pushed out to it, so generated
/// roots never sit on the origin or in subnormal territory.
const MIN_MAGNITUDE: f64 = 1E-3;

fn away_from_zero(x: f64) -> f64 {
    if x.abs() < MIN_MAGNITUDE {
        MIN_MAGNITUDE.copysign(x)
    } else {
        x
    }
}

fn sample(rng: &mut Rng, range: &RangeInclusive<f64>) -> f64 {
    rng.f64().mul_add(range.end() - range.start(), *range.start())
}

/// Endless stream of real numbers, uniform in `[min, max]`, wrapped as
/// complex numbers so they can be fed straight into [`test_case_roots`].
pub struct RandStreamR64 {
    rng: Rng,
    range: RangeInclusive<f64>,
}

impl RandStreamR64 {
    /// # Panics
    /// If `min > max`.
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "empty range [{min}, {max}]");
        Self {
            rng: Rng::with_seed(seed),
            range: min..=max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let x = sample(&mut self.rng, &self.range);
        Some(Complex64::new(away_from_zero(x), 0.0))
    }
}

/// Endless stream of complex numbers drawn from a sector of an annulus.
///
/// Angles are in turns, so `0.0..=0.5` is the upper half plane.
pub struct RandStreamC64Polar {
    rng: Rng,
    radius: RangeInclusive<f64>,
    turns: RangeInclusive<f64>,
}

impl RandStreamC64Polar {
    /// # Panics
    /// If a range is empty, a radius is negative or an angle is outside
    /// `[0, 1]`.
    #[must_use]
    pub fn new(
        seed: u64,
        min_radius: f64,
        max_radius: f64,
        min_turns: f64,
        max_turns: f64,
    ) -> Self {
        assert!(
            (0.0..=max_radius).contains(&min_radius),
            "bad radius range [{min_radius}, {max_radius}]"
        );
        assert!(
            0.0 <= min_turns && min_turns <= max_turns && max_turns <= 1.0,
            "bad angle range [{min_turns}, {max_turns}]"
        );
        Self {
            rng: Rng::with_seed(seed),
            radius: min_radius..=max_radius,
            turns: min_turns..=max_turns,
        }
    }
}

impl Iterator for RandStreamC64Polar {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let rho = sample(&mut self.rng, &self.radius);
        let theta = sample(&mut self.rng, &self.turns) * std::f64::consts::TAU;
        let z = Complex64::from_polar(rho, theta);
        Some(Complex64::new(away_from_zero(z.re), away_from_zero(z.im)))
    }
}

/// Coefficients of the polynomial with these roots, scaled by the next value
/// of `scales`.
fn real_case(
    roots: Vec<Complex64>,
    mut scales: impl Iterator<Item = Complex64>,
) -> (Vec<f64>, Vec<Complex64>) {
    let scale = scales.next().map_or(1.0, |s| s.re);
    let coeffs = Poly::from_roots(&roots)
        .scaled(Complex64::new(scale, 0.0))
        .real_coeffs();
    (coeffs, roots)
}

/// A polynomial of `degree` with known roots: `(coefficients, roots)`.
///
/// `roots` has to yield real numbers, otherwise the imaginary parts of the
/// coefficients are silently dropped.
pub fn test_case_roots(
    roots: impl Iterator<Item = Complex64>,
    scales: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    real_case(roots.take(degree).collect_vec(), scales)
}

/// Like [`test_case_roots`], but built from conjugate pairs so any complex
/// root is allowed. Odd degrees take one more root from `reals`.
pub fn test_case_conj_roots(
    roots: impl Iterator<Item = Complex64>,
    reals: impl Iterator<Item = Complex64>,
    scales: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    let all = roots
        .take(degree / 2)
        .flat_map(|z| [z, z.conj()])
        .chain(reals.take(degree % 2))
        .collect_vec();
    real_case(all, scales)
}

/// True if both sets have the same size and every root in `found` can be
/// paired with a distinct root in `expected` no further than `tol` away.
///
/// Pairing is greedy, nearest first, in the order of `found`.
#[must_use]
pub fn check_roots(found: Vec<Complex64>, mut expected: Vec<Complex64>, tol: f64) -> bool {
    if found.len() != expected.len() {
        return false;
    }
    found.into_iter().all(|z| {
        let nearest = expected
            .iter()
            .map(|e| (z - e).norm())
            .position_min_by(f64::total_cmp);
        match nearest {
            Some(i) if (z - expected[i]).norm() <= tol => {
                expected.swap_remove(i);
                true
            }
            _ => false,
        }
    })
}
