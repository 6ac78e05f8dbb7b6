use itertools::Itertools;
use num::{complex::Complex64, One, Zero};

use super::{
    initial_guess::{initial_guesses_circle, initial_guesses_random},
    max_residual_relative, Roots,
};
use crate::{
    util::{casting::usize_to_u64, doc_macros::note_max_iter},
    Poly, SolverConfig,
};

/// Find all roots using the Durand-Kerner (Weierstrass) method.
///
/// Every estimate is corrected at once, using only the estimates of the
/// previous iteration:
///
/// `z_i <- z_i - p(z_i) / prod_{j != i} (z_i - z_j)`
///
/// The polynomial is made monic first, which leaves the roots unchanged.
/// Iteration stops as soon as no root moves by more than
/// `config.tolerance`, or after `config.max_iter` iterations. Roots come back
/// in the same order as `initial_guesses`.
///
#[doc = note_max_iter!()]
/// Two estimates closer than `config.coincidence_epsilon` would make the
/// denominator vanish, so such a factor is replaced by
/// `config.coincidence_epsilon` itself. If an estimate still overflows, the
/// last finite set of estimates is returned, unconverged.
///
/// # Panics
/// In debug builds, if there is not exactly one guess per root.
#[must_use]
pub fn durand_kerner(poly: &Poly, config: &SolverConfig, initial_guesses: &[Complex64]) -> Roots {
    debug_assert!(poly.is_normalized());
    debug_assert_eq!(
        initial_guesses.len(),
        poly.degree(),
        "there must be one initial guess per root"
    );

    if poly.degree() == 0 {
        return Roots::constant();
    }

    // the Weierstrass correction assumes a unit leading coefficient
    let mut poly = poly.clone();
    poly.make_monic();

    let mut points = initial_guesses.to_vec();
    let mut next = vec![Complex64::zero(); points.len()];

    for i in 0..config.max_iter {
        let mut max_change: f64 = 0.0;
        for (k, y) in next.iter_mut().enumerate() {
            let delta = correction(&poly, &points, k, config.coincidence_epsilon);
            max_change = max_change.max(delta.norm());
            *y = points[k] - delta;
        }

        if next.iter().any(|z| !z.is_finite()) {
            log::debug!("estimates overflowed at iteration {i}, returning last finite estimate");
            return Roots::iterative(points, i, false);
        }
        std::mem::swap(&mut points, &mut next);

        log::trace!("{{iteration: {i}, max_change: {max_change:e}}}");

        // stopping criteria
        if max_change < config.tolerance {
            return Roots::iterative(points, i + 1, true);
        }
    }

    log::debug!("tolerance {:e} not reached in {} iterations", config.tolerance, config.max_iter);
    Roots::iterative(points, config.max_iter, false)
}

/// Weierstrass correction for the `k`-th estimate.
fn correction(poly: &Poly, points: &[Complex64], k: usize, coincidence_epsilon: f64) -> Complex64 {
    let z = points[k];
    let denominator = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != k)
        .map(|(_, &w)| {
            let diff = z - w;
            if diff.norm() < coincidence_epsilon {
                Complex64::new(coincidence_epsilon, 0.0)
            } else {
                diff
            }
        })
        .fold(Complex64::one(), |acc, factor| acc * factor);
    poly.eval(z) / denominator
}

/// [`durand_kerner`] for real coefficients, highest degree first, seeded with
/// [`initial_guesses_circle`].
///
/// Leading near-zero coefficients are dropped first. This is meant for degree
/// 3 and up, lower degrees are better served by [`crate::solve`], which uses
/// closed forms for them. A constant has no roots.
///
/// The circle is symmetric about the real axis and so are the estimates that
/// grow from it, which can keep a conjugate pair of estimates from ever
/// splitting into two real roots. If the circle does not converge, up to
/// `config.restarts` more attempts are made from [`initial_guesses_random`],
/// with seeds `1, 2, ...`. The first converged attempt wins, otherwise the one
/// with the smallest backward error. The reported iteration count covers all
/// attempts.
///
/// ```
/// use poly_solve::{roots::durand_kerner_real, SolverConfig};
///
/// // (x - 1)(x - 2)(x - 3)
/// let roots = durand_kerner_real(&[1.0, -6.0, 11.0, -6.0], &SolverConfig::default());
/// let mut re = roots.iter().map(|z| z.re).collect::<Vec<_>>();
/// re.sort_by(f64::total_cmp);
/// assert!((re[0] - 1.0).abs() < 1E-9);
/// assert!((re[1] - 2.0).abs() < 1E-9);
/// assert!((re[2] - 3.0).abs() < 1E-9);
/// ```
#[must_use]
pub fn durand_kerner_real(coeffs: &[f64], config: &SolverConfig) -> Roots {
    let poly = Poly::from_reals(coeffs);
    let coeffs = poly.real_coeffs();
    let mut guesses = vec![Complex64::zero(); poly.degree()];
    initial_guesses_circle(&poly, &mut guesses);
    log::debug!(
        "seeding {} guesses: {}",
        guesses.len(),
        guesses.iter().format(", ")
    );

    let mut best = durand_kerner(&poly, config, &guesses);
    let mut iterations = best.iterations;
    for attempt in 1..=config.restarts {
        if best.converged {
            break;
        }
        log::debug!("restarting from random guesses, attempt {attempt}");
        initial_guesses_random(&poly, usize_to_u64(attempt), &mut guesses);
        let roots = durand_kerner(&poly, config, &guesses);
        iterations += roots.iterations;
        if roots.converged
            || max_residual_relative(&coeffs, &roots) < max_residual_relative(&coeffs, &best)
        {
            best = roots;
        }
    }
    best.iterations = iterations;

    if !best.converged {
        log::warn!(
            "durand-kerner did not reach tolerance {:e} within {} iterations, returning best estimate",
            config.tolerance,
            iterations
        );
    }
    best
}
