//! Scaled identity `param * x`.

use crate::core::{Func, Function};

use super::{fixed, impl_scalar_family};

/// Scaled identity function `param * x`. See [module](self) documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Identity {
    param: f64,
}

impl Identity {
    /// Initializes the function `param * x`.
    pub fn new(param: f64) -> Self {
        Self { param }
    }
}

impl_scalar_family!(Identity);

impl Function for Identity {
    fn eval(&self, x: f64) -> f64 {
        self.param * x
    }

    fn derivative(&self, _x: f64) -> f64 {
        self.param
    }

    fn render(&self) -> String {
        if self.param == 0.0 {
            "0".to_string()
        } else if self.param == 1.0 {
            "x".to_string()
        } else {
            format!("({}*x)", fixed(self.param))
        }
    }

    fn duplicate(&self) -> Func {
        (*self).into()
    }
}
