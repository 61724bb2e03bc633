//! Testing functions and utilities useful for benchmarking, debugging and
//! smoke testing.
//!
//! The analytic derivatives of the library can be cross-checked against a
//! [central finite difference](central_difference) in a set of standard
//! [sample points](sample_points) using [`has_consistent_derivative`].

#![allow(unused)]

use approx::relative_eq;

use crate::composition::{Composition, Operator};
use crate::core::{Func, Function};
use crate::functions::{Constant, Exponential, Identity, Polynomial, Power};

/// Cubic root of double precision machine epsilon. This value is a standard
/// constant for the step of central differences.
pub const EPSILON_CBRT: f64 = 0.0000060554544523933395;

/// Points on the whole real line, including zero.
pub fn sample_points() -> Vec<f64> {
    vec![-3.0, -1.5, -0.5, 0.0, 0.5, 1.0, 2.0, 3.5]
}

/// Positive points, for functions that are not defined for non-positive
/// values (e.g., non-integer powers).
pub fn positive_points() -> Vec<f64> {
    vec![0.5, 1.0, 1.5, 2.0, 3.5]
}

/// One or two representatives of every leaf family.
pub fn standard_leaves() -> Vec<Func> {
    vec![
        Identity::new(2.0).into(),
        Constant::new(-1.5).into(),
        Power::new(2.0).into(),
        Power::new(-0.5).into(),
        Exponential::new(0.5).into(),
        Polynomial::from_params(&[1.0, -2.0, 0.0, 0.5]).into(),
    ]
}

/// Leaves together with a few nested compositions, one for each operator.
pub fn standard_functions() -> Vec<Func> {
    let leaves = standard_leaves();
    let mut functions = leaves.clone();

    for (i, op) in Operator::ALL.into_iter().enumerate() {
        let lhs = &leaves[i % leaves.len()];
        let rhs = &leaves[(i + 2) % leaves.len()];
        let inner = Composition::new(lhs, op, rhs);
        functions.push(Composition::new(&inner, op, &leaves[5]).into());
    }

    functions
}

/// Approximates the derivative of the function in `x` by central difference.
pub fn central_difference<F: Function + ?Sized>(f: &F, x: f64) -> f64 {
    let h = EPSILON_CBRT * x.abs().max(1.0);
    (f.eval(x + h) - f.eval(x - h)) / (2.0 * h)
}

/// Tests whether the analytic derivative of the function in `x` agrees with
/// the [central difference](central_difference), given the relative
/// tolerance `eps`.
pub fn has_consistent_derivative<F: Function + ?Sized>(f: &F, x: f64, eps: f64) -> bool {
    let analytic = f.derivative(x);
    let numeric = central_difference(f, x);

    relative_eq!(analytic, numeric, epsilon = eps, max_relative = eps)
}
