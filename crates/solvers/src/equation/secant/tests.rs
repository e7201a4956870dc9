use std::f64::consts::SQRT_2;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use rootfind_core::Precision;

use crate::equation::{Config, Status, newton};

use super::{Action, Event, solve, solve_unobserved};

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

#[test]
fn finds_square_root_of_two() {
    let solution = solve_unobserved(square_minus_two, 1.0, 2.0, &Config::default());

    assert_eq!(solution.status, Status::Converged);
    let root = solution.root.expect("should find a root");
    assert_abs_diff_eq!(root, SQRT_2, epsilon = 1e-6);
    assert_eq!(solution.iters, 6);
    assert_eq!(solution.trace.len(), 6);
}

#[test]
fn needs_more_iterations_than_newton() {
    let config = Config::default();
    let secant = solve_unobserved(square_minus_two, 1.0, 2.0, &config);
    let newton = newton::solve_unobserved(square_minus_two, |x| 2.0 * x, 1.0, &config);

    assert!(secant.is_converged() && newton.is_converged());
    assert!(secant.iters > newton.iters);
}

#[test]
fn trace_shifts_the_window() {
    let solution = solve_unobserved(square_minus_two, 1.0, 2.0, &Config::default());

    let first = solution.trace[0];
    assert_eq!(first.iter, 0);
    assert_relative_eq!(first.x0, 1.0);
    assert_relative_eq!(first.x1, 2.0);
    assert_relative_eq!(first.fx0, -1.0);
    assert_relative_eq!(first.fx1, 2.0);
    assert_relative_eq!(first.x2, 1.333_333);
    assert_relative_eq!(first.error, 0.666_667);

    for pair in solution.trace.windows(2) {
        assert_eq!(pair[1].x0, pair[0].x1);
        assert_eq!(pair[1].x1, pair[0].x2);
        assert_eq!(pair[1].iter, pair[0].iter + 1);
    }
}

#[test]
fn trace_is_rounded_exactly_once() {
    let config = Config::with_tolerance(1e-4).expect("valid tolerance");
    let solution = solve_unobserved(square_minus_two, 1.0, 2.0, &config);

    let precision = Precision::new(4);
    assert_eq!(solution.precision, precision);
    for record in &solution.trace {
        for value in record.values() {
            assert_eq!(precision.round(value), value);
        }
    }
}

#[test]
fn constant_function_is_degenerate() {
    let solution = solve_unobserved(|_| 5.0, 1.0, 2.0, &Config::default());

    assert_eq!(solution.status, Status::Degenerate);
    assert_eq!(solution.root, None);
    assert_eq!(solution.iters, 0);
    assert!(solution.trace.is_empty());
}

#[test]
fn equal_starting_points_are_degenerate() {
    let solution = solve_unobserved(square_minus_two, 1.5, 1.5, &Config::default());

    assert_eq!(solution.status, Status::Degenerate);
    assert_eq!(solution.root, None);
    assert_eq!(solution.iters, 0);
}

#[test]
fn collapsed_window_after_convergence_is_degenerate() {
    // With no room left to converge by step size, the window eventually
    // collapses onto the root and the slope vanishes.
    let config = Config::new(1e-300, 100).expect("valid config");
    let solution = solve_unobserved(square_minus_two, 1.0, 2.0, &config);

    assert_eq!(solution.status, Status::Degenerate);
    assert_eq!(solution.root, None);
    assert_eq!(solution.iters, solution.trace.len());
    assert!(solution.iters > 0);
}

#[test]
fn exhaustion_returns_last_iterate() {
    let config = Config::new(1e-300, 3).expect("valid config");
    let solution = solve_unobserved(square_minus_two, 1.0, 2.0, &config);

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.trace.len(), 3);

    // Third step lands on 58/41.
    let root = solution.root.expect("exhaustion still reports an iterate");
    assert_relative_eq!(root, 58.0 / 41.0, epsilon = 1e-15);
}

#[test]
fn repeated_solves_are_identical() {
    let config = Config::default();
    let first = solve_unobserved(f64::cos, 0.0, 1.0, &config);
    let second = solve_unobserved(f64::cos, 0.0, 1.0, &config);

    assert_eq!(first, second);
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_>| (event.exact.error < 0.1).then_some(Action::StopEarly);

    let solution = solve(square_minus_two, 1.0, 2.0, &Config::default(), observer);

    // Second step (1.333.. -> 1.4) is the first with an error below 0.1.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.trace.len(), 2);
    assert_relative_eq!(
        solution.root.expect("stopped with an iterate"),
        1.4,
        epsilon = 1e-12
    );
}
