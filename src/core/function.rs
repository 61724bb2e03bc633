use std::fmt;

use crate::composition::Composition;
use crate::functions::{Constant, Exponential, Identity, Polynomial, Power};

/// The capability shared by every function in the library.
///
/// ## Implementing a function
///
/// The library ships with a closed set of function families (see [`Func`]),
/// but any type can take part in root finding by implementing this trait.
///
/// ```rust
/// use elemfn::{find_root, Func, Function, Polynomial};
///
/// // f(x) = x^2 - 2
/// struct Shifted;
///
/// impl Function for Shifted {
///     fn eval(&self, x: f64) -> f64 {
///         x * x - 2.0
///     }
///
///     fn derivative(&self, x: f64) -> f64 {
///         2.0 * x
///     }
///
///     fn render(&self) -> String {
///         "x^2 - 2".to_string()
///     }
///
///     fn duplicate(&self) -> Func {
///         Polynomial::from_params(&[-2.0, 0.0, 1.0]).into()
///     }
/// }
///
/// let root = find_root(&Shifted, 1.0, 10_000, 1e-3);
/// assert!((root - 2f64.sqrt()).abs() < 1e-6);
/// ```
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Evaluates the analytic derivative of the function at `x`.
    fn derivative(&self, x: f64) -> f64;

    /// Renders the function to a human-readable string.
    fn render(&self) -> String;

    /// Produces an independent deep copy of the function.
    fn duplicate(&self) -> Func;
}

impl<F: Function + ?Sized> Function for &F {
    fn eval(&self, x: f64) -> f64 {
        (**self).eval(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }

    fn render(&self) -> String {
        (**self).render()
    }

    fn duplicate(&self) -> Func {
        (**self).duplicate()
    }
}

/// Any function known to the library.
///
/// Composition trees are built out of this type: every
/// [`Composition`] owns its two children as `Func` values.
#[derive(Debug, Clone, PartialEq)]
pub enum Func {
    /// `param * x`.
    Identity(Identity),
    /// A constant value.
    Constant(Constant),
    /// `x^param`.
    Power(Power),
    /// `exp(param * x)`.
    Exponential(Exponential),
    /// Sum of coefficient-weighted powers of `x`.
    Polynomial(Polynomial),
    /// Two functions combined by a binary operator.
    Composition(Composition),
}

macro_rules! dispatch {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            Func::Identity($f) => $body,
            Func::Constant($f) => $body,
            Func::Power($f) => $body,
            Func::Exponential($f) => $body,
            Func::Polynomial($f) => $body,
            Func::Composition($f) => $body,
        }
    };
}

impl Func {
    /// Returns `true` if the function has no sub-functions.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Func::Composition(_))
    }

    /// Short name of the function family.
    ///
    /// For leaves this is the name under which the family is registered in
    /// the [factory](crate::factory::FunctionFactory).
    pub fn kind(&self) -> &'static str {
        match self {
            Func::Identity(_) => "ident",
            Func::Constant(_) => "const",
            Func::Power(_) => "power",
            Func::Exponential(_) => "exp",
            Func::Polynomial(_) => "polynomial",
            Func::Composition(_) => "composition",
        }
    }

    /// Returns the inner composition, if any.
    pub fn as_composition(&self) -> Option<&Composition> {
        match self {
            Func::Composition(c) => Some(c),
            _ => None,
        }
    }
}

impl Function for Func {
    fn eval(&self, x: f64) -> f64 {
        dispatch!(self, f => f.eval(x))
    }

    fn derivative(&self, x: f64) -> f64 {
        dispatch!(self, f => f.derivative(x))
    }

    fn render(&self) -> String {
        dispatch!(self, f => f.render())
    }

    fn duplicate(&self) -> Func {
        self.clone()
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! impl_into_func {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Func {
                fn from(f: $variant) -> Self {
                    Func::$variant(f)
                }
            }
        )*
    };
}

impl_into_func!(Identity, Constant, Power, Exponential, Polynomial, Composition);
