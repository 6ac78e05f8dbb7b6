//! Geometry for drawing roots on the complex plane.
//!
//! Nothing here draws anything, it only works out where things go and what
//! they are labelled with, so a canvas, SVG or terminal renderer can do the
//! rest.

use itertools::Itertools;
use num::complex::Complex64;

use crate::{ComplexExt, Roots, DEFAULT_PRECISION};

/// Fraction of the largest coordinate added around the roots.
const PADDING: f64 = 0.2;

/// The view never shrinks below this, so a lone root at the origin still
/// gets a usable frame.
const MIN_EXTENT: f64 = 1E-6;

/// Decimals used by [`PlotFrame::axis_labels`].
const AXIS_LABEL_PRECISION: usize = 3;

/// A root ready to be drawn: its coordinates and a text label.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    pub re: f64,
    pub im: f64,
    pub label: String,
}

/// Square view of the complex plane centred on the origin, large enough to
/// show every root.
///
/// ```
/// use poly_solve::{solve, PlotFrame, SolverConfig};
///
/// let roots = solve(&[1.0, 0.0, 4.0], &SolverConfig::default()); // +-2i
/// let frame = PlotFrame::new(&roots);
/// assert!((frame.limit() - 2.4).abs() < 1E-12);
/// let (x, y) = frame.project(roots[0], 800.0, 600.0);
/// assert!((x - 400.0).abs() < 1E-9 && (y - 50.0).abs() < 1E-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PlotFrame {
    limit: f64,
    roots: Vec<Complex64>,
}

impl PlotFrame {
    #[must_use]
    pub fn new(roots: &Roots) -> Self {
        let extent = roots
            .iter()
            .flat_map(|z| [z.re.abs(), z.im.abs()])
            .fold(MIN_EXTENT, f64::max);
        Self {
            limit: extent * (1.0 + PADDING),
            roots: roots.as_slice().to_vec(),
        }
    }

    /// Both axes span `[-limit, limit]`.
    #[must_use]
    pub const fn limit(&self) -> f64 {
        self.limit
    }

    /// Screen position of `z` on a `width` x `height` canvas, with `y` growing
    /// downwards.
    #[must_use]
    pub fn project(&self, z: Complex64, width: f64, height: f64) -> (f64, f64) {
        let (x0, y0) = (width / 2.0, height / 2.0);
        (x0 + z.re / self.limit * x0, y0 - z.im / self.limit * y0)
    }

    /// Every root with a label rendered at `precision` decimals.
    #[must_use]
    pub fn points(&self, precision: usize) -> Vec<PlotPoint> {
        self.roots
            .iter()
            .map(|z| PlotPoint {
                re: z.re,
                im: z.im,
                label: z.to_string_prec(precision),
            })
            .collect_vec()
    }

    /// [`PlotFrame::points`] with the usual label precision.
    #[must_use]
    pub fn default_points(&self) -> Vec<PlotPoint> {
        self.points(DEFAULT_PRECISION)
    }

    /// Scale labels for the ends of the axes: `[-limit, +limit]`.
    #[must_use]
    pub fn axis_labels(&self) -> [String; 2] {
        [
            format!("{:.*}", AXIS_LABEL_PRECISION, -self.limit),
            format!("{:.*}", AXIS_LABEL_PRECISION, self.limit),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::PlotFrame;
    use crate::{solve, SolverConfig};

    #[test]
    fn limit_covers_all_roots() {
        // roots 1, 2, 3
        let roots = solve(&[1.0, -6.0, 11.0, -6.0], &SolverConfig::default());
        let frame = PlotFrame::new(&roots);
        assert!((frame.limit() - 3.6).abs() < 1E-9);
    }

    #[test]
    fn no_roots_still_has_a_frame() {
        let roots = solve(&[7.0], &SolverConfig::default());
        let frame = PlotFrame::new(&roots);
        assert!((frame.limit() - 1.2E-6).abs() < 1E-18);
        assert!(frame.default_points().is_empty());
    }

    #[test]
    fn projection() {
        let roots = solve(&[1.0, -2.0], &SolverConfig::default());
        let frame = PlotFrame::new(&roots);
        let (x, y) = frame.project(roots[0], 100.0, 50.0);
        assert!((x - (50.0 + 50.0 / 1.2)).abs() < 1E-9);
        assert!((y - 25.0).abs() < 1E-9);
    }

    #[test]
    fn labels() {
        let roots = solve(&[1.0, 2.0, 5.0], &SolverConfig::default());
        let frame = PlotFrame::new(&roots);
        let points = frame.default_points();
        assert_eq!(points[0].label, "-1 + 2i");
        assert_eq!(points[1].label, "-1 - 2i");
        assert_eq!(frame.axis_labels(), ["-2.400".to_owned(), "2.400".to_owned()]);
    }
}
