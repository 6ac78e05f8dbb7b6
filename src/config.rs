/// Knobs for the iterative solver. Built fresh for every solve.
///
/// ```
/// use poly_solve::SolverConfig;
///
/// let config = SolverConfig::default().with_tolerance(1E-9).with_max_iter(500);
/// assert_eq!(config.max_iter, 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Iteration stops once no root moved by more than this in one step.
    pub tolerance: f64,

    /// Hard cap on iterations. Reaching it is not an error, the best
    /// estimate so far is returned.
    pub max_iter: usize,

    /// Differences between two root estimates smaller than this are replaced
    /// by this value when forming the Weierstrass denominator.
    pub coincidence_epsilon: f64,

    /// How many more times to run from random guesses when the circle
    /// seeding does not converge. Each attempt gets `max_iter` iterations.
    pub restarts: usize,
}

impl SolverConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1E-12;
    pub const DEFAULT_MAX_ITER: usize = 2000;
    pub const DEFAULT_COINCIDENCE_EPSILON: f64 = 1E-18;
    pub const DEFAULT_RESTARTS: usize = 1;

    #[must_use]
    pub const fn new(tolerance: f64, max_iter: usize) -> Self {
        Self {
            tolerance,
            max_iter,
            coincidence_epsilon: Self::DEFAULT_COINCIDENCE_EPSILON,
            restarts: Self::DEFAULT_RESTARTS,
        }
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[must_use]
    pub const fn with_coincidence_epsilon(mut self, epsilon: f64) -> Self {
        self.coincidence_epsilon = epsilon;
        self
    }

    #[must_use]
    pub const fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE, Self::DEFAULT_MAX_ITER)
    }
}

#[cfg(test)]
mod test {
    use super::SolverConfig;

    #[test]
    fn defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.tolerance, 1E-12);
        assert_eq!(c.max_iter, 2000);
        assert_eq!(c.coincidence_epsilon, 1E-18);
        assert_eq!(c.restarts, 1);
    }

    #[test]
    fn builder() {
        let c = SolverConfig::default()
            .with_tolerance(1E-6)
            .with_coincidence_epsilon(1E-30)
            .with_restarts(0);
        assert_eq!(c.tolerance, 1E-6);
        assert_eq!(c.coincidence_epsilon, 1E-30);
        assert_eq!(c.restarts, 0);
        assert_eq!(c.max_iter, SolverConfig::DEFAULT_MAX_ITER);
    }
}
