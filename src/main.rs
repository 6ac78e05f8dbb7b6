//! poly-solve - find every root of a real polynomial
//!
//! # Usage
//!
//! ```bash
//! poly-solve 1 0 -2 1          # x^3 - 2x + 1
//! poly-solve "1.5; 0; -2" --plot
//! ```

use anyhow::Result;
use clap::Parser;
use num::{complex::Complex64, Zero};
use poly_solve::{
    parse_coeffs,
    roots::{durand_kerner, initial_guesses_random, max_residual},
    solve, PlotFrame, Poly, Roots, SolverConfig, LISTING_PRECISION,
};

/// Canvas size used when printing projected plot positions.
const CANVAS: (f64, f64) = (800.0, 600.0);

/// Find all complex roots of a polynomial with real coefficients
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Coefficients, highest degree first. Separated by spaces, commas or
    /// semicolons
    #[arg(value_name = "COEFFS", required = true)]
    coeffs: Vec<String>,

    /// Largest root correction accepted as converged
    #[arg(short, long, default_value_t = SolverConfig::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Maximum number of iterations
    #[arg(short, long, default_value_t = SolverConfig::DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Extra attempts from random guesses if the circle does not converge
    #[arg(long, default_value_t = SolverConfig::DEFAULT_RESTARTS)]
    restarts: usize,

    /// Decimals to print
    #[arg(short, long, default_value_t = LISTING_PRECISION)]
    precision: usize,

    /// Seed the iteration with random guesses instead of a circle
    #[arg(long)]
    seed: Option<u64>,

    /// Sort roots by real part, then imaginary part
    #[arg(long)]
    sort: bool,

    /// Print the plot frame and projected root positions
    #[arg(long)]
    plot: bool,

    /// More logging, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let config = SolverConfig::default()
        .with_tolerance(args.tolerance)
        .with_max_iter(args.max_iter)
        .with_restarts(args.restarts);

    let coeffs = parse_coeffs(&args.coeffs.join(" "))?;
    let mut roots = match args.seed {
        Some(seed) => solve_seeded(&coeffs, &config, seed),
        None => solve(&coeffs, &config),
    };

    println!("degree: {}", roots.degree());
    if roots.is_empty() {
        println!("constant, no roots");
        return Ok(());
    }

    if args.sort {
        roots.sort();
    }
    print!("{}", roots.listing(args.precision));
    log::info!(
        "{:?}, {} iterations, max residual {:e}",
        roots.method(),
        roots.iterations(),
        max_residual(&coeffs, &roots)
    );
    if !roots.converged() {
        eprintln!("warning: tolerance not reached, showing best estimate");
    }

    if args.plot {
        print_plot(&roots);
    }
    Ok(())
}

/// Iterative solve from random guesses, low degrees still use closed forms.
fn solve_seeded(coeffs: &[f64], config: &SolverConfig, seed: u64) -> Roots {
    let poly = Poly::from_reals(coeffs);
    if poly.degree() < 3 {
        return solve(coeffs, config);
    }
    let mut guesses = vec![Complex64::zero(); poly.degree()];
    initial_guesses_random(&poly, seed, &mut guesses);
    durand_kerner(&poly, config, &guesses)
}

fn print_plot(roots: &Roots) {
    let frame = PlotFrame::new(roots);
    let [low, high] = frame.axis_labels();
    println!();
    println!("plot: [{low}, {high}] x [{low}, {high}]");
    for point in frame.default_points() {
        let (x, y) = frame.project(Complex64::new(point.re, point.im), CANVAS.0, CANVAS.1);
        println!("  {:<24} at ({x:.1}, {y:.1})", point.label);
    }
}
