//! Exponential function `exp(param * x)`.

use crate::core::{Func, Function};

use super::{fixed, impl_scalar_family};

/// Exponential function `exp(param * x)`. See [module](self) documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Exponential {
    param: f64,
}

impl Exponential {
    /// Initializes the function `exp(param * x)`.
    pub fn new(param: f64) -> Self {
        Self { param }
    }
}

impl_scalar_family!(Exponential);

impl Function for Exponential {
    fn eval(&self, x: f64) -> f64 {
        (self.param * x).exp()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.param * (self.param * x).exp()
    }

    fn render(&self) -> String {
        if self.param == 0.0 {
            "1".to_string()
        } else {
            format!("exp({}*x)", fixed(self.param))
        }
    }

    fn duplicate(&self) -> Func {
        (*self).into()
    }
}
