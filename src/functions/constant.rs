//! Constant function.

use crate::core::{Func, Function};

use super::{fixed, impl_scalar_family};

/// Constant function. See [module](self) documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant {
    param: f64,
}

impl Constant {
    /// Initializes the constant function with value `param`.
    pub fn new(param: f64) -> Self {
        Self { param }
    }
}

impl_scalar_family!(Constant);

impl Function for Constant {
    fn eval(&self, _x: f64) -> f64 {
        self.param
    }

    fn derivative(&self, _x: f64) -> f64 {
        0.0
    }

    fn render(&self) -> String {
        format!("({})", fixed(self.param))
    }

    fn duplicate(&self) -> Func {
        (*self).into()
    }
}
