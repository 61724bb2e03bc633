//! Power function `x^param`.
//!
//! The function is evaluated with [`f64::powf`], so a negative base with a
//! non-integer exponent produces NaN and zero with a negative exponent
//! produces infinity.

use crate::core::{Func, Function};

use super::{fixed, impl_scalar_family};

/// Power function `x^param`. See [module](self) documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Power {
    param: f64,
}

impl Power {
    /// Initializes the function `x^param`.
    pub fn new(param: f64) -> Self {
        Self { param }
    }
}

impl_scalar_family!(Power);

impl Function for Power {
    fn eval(&self, x: f64) -> f64 {
        x.powf(self.param)
    }

    fn derivative(&self, x: f64) -> f64 {
        if self.param == 0.0 {
            0.0
        } else {
            self.param * x.powf(self.param - 1.0)
        }
    }

    fn render(&self) -> String {
        // The negative branch shows the signed exponent, e.g. `1/x^(-2.000000)`.
        if self.param == 0.0 {
            "1".to_string()
        } else if self.param < 0.0 {
            format!("1/x^({})", fixed(self.param))
        } else {
            format!("x^({})", fixed(self.param))
        }
    }

    fn duplicate(&self) -> Func {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::testing::*;

    #[test]
    fn derivative_rule() {
        for p in [-2.0, 0.5, 1.0, 2.0, 3.0] {
            let f = Power::new(p);
            for x in positive_points() {
                assert_relative_eq!(f.derivative(x), p * x.powf(p - 1.0));
            }
        }

        assert_eq!(Power::new(2.0).derivative(3.0), 6.0);
    }

    #[test]
    fn zero_exponent_is_one() {
        let f = Power::default();
        for x in sample_points().into_iter().filter(|x| *x != 0.0) {
            assert_eq!(f.eval(x), 1.0);
            assert_eq!(f.derivative(x), 0.0);
        }
    }

    #[test]
    fn float_edge_cases() {
        assert!(Power::new(0.5).eval(-4.0).is_nan());
        assert_eq!(Power::new(-1.0).eval(0.0), f64::INFINITY);
    }

    #[test]
    fn render() {
        assert_eq!(Power::default().render(), "1");
        assert_eq!(Power::new(1.0).render(), "x^(1.000000)");
        assert_eq!(Power::from_params(&[1.0, 2.0, 3.0, 4.0, 5.0]).render(), "x^(1.000000)");
        assert_eq!(Power::new(-2.0).render(), "1/x^(-2.000000)");
    }
}
