//! Root finding.
//!
//! The root finder repeatedly applies the step
//!
//! ```text
//! x <- x - step_size * f(x) * f'(x)
//! ```
//!
//! which is a gradient descent step on `f(x)^2 / 2`. Unlike Newton's method,
//! the step does not divide by the derivative, so it is well-defined even in
//! stationary points but needs a small enough step size to converge. There is
//! no convergence check: the process runs for the requested number of
//! iterations and the final point is returned even if it is not finite.
//!
//! The simplest way is the [`find_root`] function:
//!
//! ```rust
//! use elemfn::{find_root, Function, Polynomial};
//!
//! // f(x) = x^2 - 4
//! let f = Polynomial::from_params(&[-4.0, 0.0, 1.0]);
//! let x = find_root(&f, 3.0, 1_000, 1e-2);
//!
//! assert!(f.eval(x).abs() < 1e-9);
//! ```
//!
//! If you need more control over the iteration process, use the
//! [`RootDriver`]:
//!
//! ```rust
//! use elemfn::{Function, Polynomial, RootDriver};
//!
//! let f = Polynomial::from_params(&[-4.0, 0.0, 1.0]);
//! let mut driver = RootDriver::builder(&f)
//!     .with_initial(3.0)
//!     .with_step_size(1e-2)
//!     .build();
//!
//! let x = driver.find(|state| state.fx().abs() < 1e-6 || state.iter() >= 10_000);
//! assert!(f.eval(x).abs() < 1e-6);
//! ```

use getset::{CopyGetters, Setters};
use log::{debug, trace};

use crate::core::Function;

/// Options for the [`RootDriver`].
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct RootOptions {
    /// Number of iterations performed by [`RootDriver::run`]. Default:
    /// `100_000`.
    iterations: usize,
    /// Multiplier of the step `f(x) * f'(x)`. Default: `1e-9`.
    step_size: f64,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            step_size: 1e-9,
        }
    }
}

/// Builder for the [`RootDriver`].
pub struct RootBuilder<'a, F: ?Sized> {
    f: &'a F,
    x0: f64,
    options: RootOptions,
}

impl<'a, F: Function + ?Sized> RootBuilder<'a, F> {
    /// Sets the initial point from which the iterative process starts.
    /// Default: `0.0`.
    pub fn with_initial(mut self, x0: f64) -> Self {
        self.x0 = x0;
        self
    }

    /// Sets the options.
    pub fn with_options(mut self, options: RootOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the step size, keeping other options.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.options.set_step_size(step_size);
        self
    }

    /// Builds the [`RootDriver`].
    pub fn build(self) -> RootDriver<'a, F> {
        RootDriver {
            f: self.f,
            x: self.x0,
            iter: 0,
            options: self.options,
        }
    }
}

/// The driver for the root finding process. For the usage, see
/// [module](self) documentation.
pub struct RootDriver<'a, F: ?Sized> {
    f: &'a F,
    x: f64,
    iter: usize,
    options: RootOptions,
}

impl<'a, F: Function + ?Sized> RootDriver<'a, F> {
    /// Returns the builder for specifying additional settings.
    pub fn builder(f: &'a F) -> RootBuilder<'a, F> {
        RootBuilder {
            f,
            x0: 0.0,
            options: RootOptions::default(),
        }
    }

    /// Initializes the driver with the default settings.
    pub fn new(f: &'a F) -> Self {
        Self::builder(f).build()
    }

    /// Returns the current point.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the number of steps done so far.
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Returns the options of the driver.
    pub fn options(&self) -> &RootOptions {
        &self.options
    }

    /// Does one step of the process, returning the new point.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let fx = self.f.eval(self.x);
        let dfx = self.f.derivative(self.x);

        self.x -= self.options.step_size * fx * dfx;
        self.iter += 1;

        trace!("iter = {}\tfx = {}\tdfx = {}\tx = {}", self.iter, fx, dfx, self.x);
        self.x
    }

    /// Does the number of steps given by [`RootOptions::iterations`] and
    /// returns the final point.
    pub fn run(&mut self) -> f64 {
        let iterations = self.options.iterations;
        debug!(
            "running {} iterations from x = {} with step size {}",
            iterations, self.x, self.options.step_size
        );

        for _ in 0..iterations {
            self.next();
        }

        if !self.x.is_finite() {
            debug!("point diverged to {} after {} iterations", self.x, self.iter);
        }

        self.x
    }

    /// Runs the iterative process until given stopping criterion is
    /// satisfied, returning the final point.
    pub fn find<C>(&mut self, stop: C) -> f64
    where
        C: Fn(RootIterState) -> bool,
    {
        loop {
            let x = self.next();

            let state = RootIterState {
                x,
                fx: self.f.eval(x),
                iter: self.iter - 1,
            };

            if stop(state) {
                debug!("stopped at x = {} after {} iterations", x, self.iter);
                return x;
            }
        }
    }
}

/// State of the current iteration.
#[derive(Debug, Clone, Copy)]
pub struct RootIterState {
    x: f64,
    fx: f64,
    iter: usize,
}

impl RootIterState {
    /// Returns the current point.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the function value in the current point.
    pub fn fx(&self) -> f64 {
        self.fx
    }

    /// Returns the current iteration number, starting from zero.
    pub fn iter(&self) -> usize {
        self.iter
    }
}

/// Runs exactly `iterations` steps of the process from `x0` and returns the
/// final point. See [module](self) documentation.
pub fn find_root<F>(f: &F, x0: f64, iterations: usize, step_size: f64) -> f64
where
    F: Function + ?Sized,
{
    let mut options = RootOptions::default();
    options.set_iterations(iterations).set_step_size(step_size);

    RootDriver::builder(f)
        .with_initial(x0)
        .with_options(options)
        .build()
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::composition::Operator;
    use crate::functions::*;
    use crate::Composition;

    #[test]
    fn zero_iterations() {
        let f = Exponential::new(2.0);
        assert_eq!(find_root(&f, 3.0, 0, 1.0), 3.0);
    }

    #[test]
    fn exact_step_count() {
        let f = Identity::new(1.0);

        // x <- x - s * x, so x_n = x0 * (1 - s)^n.
        let x = find_root(&f, 1.0, 3, 0.5);
        assert_eq!(x, 0.125);

        let mut driver = RootDriver::builder(&f)
            .with_initial(1.0)
            .with_step_size(0.5)
            .build();
        assert_eq!(driver.next(), 0.5);
        assert_eq!(driver.next(), 0.25);
        assert_eq!(driver.iter(), 2);
    }

    #[test]
    fn exponential_is_deterministic() {
        let f = Exponential::new(2.0);
        let x1 = find_root(&f, 3.0, 100_000, 1e-9);
        let x2 = find_root(&f, 3.0, 100_000, 1e-9);

        assert_eq!(x1.to_bits(), x2.to_bits());
        assert!(x1 < 3.0);
    }

    #[test]
    fn gradient_step_not_newton() {
        // A Newton step from x = 3 on f(x) = x - 1 would land exactly in 1.
        let f = Polynomial::from_params(&[-1.0, 1.0]);
        let x = find_root(&f, 3.0, 1, 0.1);
        assert_abs_diff_eq!(x, 3.0 - 0.1 * 2.0 * 1.0);
    }

    #[test]
    fn polynomial_minus_exponential() {
        let g = Polynomial::from_params(&[3.0, -1.0, 3.0, 4.0, 5.0]);
        let h = Exponential::new(2.0);
        let f = Composition::new(&g, Operator::Sub, &h);

        let x = find_root(&f, 3.0, 100_000, 1e-9);
        assert_eq!(x.to_bits(), find_root(&f, 3.0, 100_000, 1e-9).to_bits());
    }

    #[test]
    fn converges_with_sane_step() {
        let f = Polynomial::from_params(&[-2.0, 0.0, 1.0]);
        let x = find_root(&f, 1.0, 10_000, 1e-3);
        assert_abs_diff_eq!(x, 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn divergence_is_silent() {
        let f = Power::new(2.0);
        let x = find_root(&f, 10.0, 10, 1.0);
        assert!(!x.is_finite());
    }

    #[test]
    fn find_with_stopping_criterion() {
        let f = Polynomial::from_params(&[-4.0, 0.0, 1.0]);
        let mut driver = RootDriver::builder(&f)
            .with_initial(3.0)
            .with_step_size(1e-2)
            .build();

        let x = driver.find(|state| state.fx().abs() < 1e-8 || state.iter() >= 10_000);
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-8);
        assert!(driver.iter() < 10_000);
    }

    #[test]
    fn options() {
        let options = RootOptions::default();
        assert_eq!(options.iterations(), 100_000);
        assert_eq!(options.step_size(), 1e-9);

        let f = Constant::new(1.0);
        let driver = RootDriver::new(&f);
        assert_eq!(driver.x(), 0.0);
        assert_eq!(driver.options(), &options);
    }
}
