use poly_solve::{
    __testing::check_roots, complex, normalize_coeffs, parse_coeffs, poly, roots::durand_kerner,
    solve, solve_str, ComplexExt, Error, Method, PlotFrame, Poly, SolverConfig,
};

#[test]
fn cubic_golden_ratio() {
    let roots = solve_str("1 0 -2 1", &SolverConfig::default()).unwrap();
    assert_eq!(roots.degree(), 3);
    assert_eq!(roots.method(), Method::DurandKerner);
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    assert!(check_roots(
        roots.into_vec(),
        vec![complex!(1.0), complex!(phi - 1.0), complex!(-phi)],
        1E-9
    ));
}

#[test]
fn solving_twice_gives_the_same_roots() {
    let coeffs = parse_coeffs("3; -1.5; 0; 2; -0.25").unwrap();
    let config = SolverConfig::default();
    let first = solve(&coeffs, &config);
    let second = solve(&coeffs, &config);
    assert_eq!(first, second);
}

#[test]
fn roots_of_known_factors() {
    // (x^2 + 1)(x - 2)(x + 0.5)
    let expected = vec![complex!(0.0, 1.0), complex!(0.0, -1.0), complex!(2.0), complex!(-0.5)];
    let coeffs = Poly::from_roots(&expected)
        .coeffs()
        .iter()
        .map(|c| c.re)
        .collect::<Vec<_>>();
    let roots = solve(&coeffs, &SolverConfig::default());
    assert!(roots.converged());
    assert!(check_roots(roots.sorted(), expected, 1E-10));
}

#[test]
fn commas_and_semicolons_mix() {
    let roots = solve_str("1,0; -2,1", &SolverConfig::default()).unwrap();
    assert_eq!(roots.degree(), 3);
    assert_eq!(parse_coeffs("1,2,3; 4").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn normalizing_twice_changes_nothing() {
    for coeffs in [
        vec![0.0, 0.0, 1.0, 2.0],
        vec![1E-15, -1E-20, 3.0],
        vec![0.0, 0.0],
        vec![4.0],
        vec![],
    ] {
        let once = normalize_coeffs(&coeffs);
        assert_eq!(normalize_coeffs(&once), once);
    }
}

#[test]
fn constants_have_no_roots() {
    for text in ["0 0 0", "5", "0; 0; 7"] {
        let roots = solve_str(text, &SolverConfig::default()).unwrap();
        assert!(roots.is_empty(), "{text}");
        assert_eq!(roots.method(), Method::None);
    }
}

#[test]
fn double_root_of_a_square() {
    let roots = solve(&[1.0, -2.0, 1.0], &SolverConfig::default());
    assert_eq!(roots.len(), 2);
    for z in &roots {
        assert!(z.approx_eq(&complex!(1.0), 1E-12));
        assert_eq!(z.to_string_prec(10), "1");
    }
}

#[test]
fn bad_input_is_rejected() {
    let config = SolverConfig::default();
    assert_eq!(solve_str("", &config), Err(Error::NoCoefficients));
    assert!(matches!(
        solve_str("1 two 3", &config),
        Err(Error::InvalidCoefficient { token }) if token == "two"
    ));
}

#[test]
fn iteration_cap_returns_best_estimate() {
    let config = SolverConfig::default().with_max_iter(3).with_restarts(0);
    let roots = solve(&[1.0, 0.0, 0.0, 0.0, 0.0, -1.0], &config);
    assert_eq!(roots.len(), 5);
    assert_eq!(roots.iterations(), 3);
    assert!(!roots.converged());
    assert!(roots.iter().all(|z| z.is_finite()));
}

#[test]
fn custom_guesses() {
    let p = poly![1.0, -6.0, 11.0, -6.0];
    let guesses = [complex!(0.4, 0.9), complex!(-0.2, -0.3), complex!(3.3, 0.1)];
    let roots = durand_kerner(&p, &SolverConfig::default(), &guesses);
    assert!(check_roots(
        roots.into_vec(),
        vec![complex!(1.0), complex!(2.0), complex!(3.0)],
        1E-9
    ));
}

#[test]
fn plot_frame_fits_the_roots() {
    let roots = solve(&[1.0, 0.0, 0.0, -8.0], &SolverConfig::default());
    let frame = PlotFrame::new(&roots);
    for point in frame.default_points() {
        let (x, y) = frame.project(complex!(point.re, point.im), 640.0, 480.0);
        assert!((0.0..=640.0).contains(&x), "{}", point.label);
        assert!((0.0..=480.0).contains(&y), "{}", point.label);
    }
}
