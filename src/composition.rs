//! Binary composition of two functions.
//!
//! A [`Composition`] combines two functions with one of the four arithmetic
//! [operators](Operator). Values, derivatives and renderings are computed
//! recursively from the children:
//!
//! | operator | value | derivative | rendering |
//! | -------- | ----- | ---------- | --------- |
//! | `+` | `l + r` | `l' + r'` | `L + R` |
//! | `-` | `l - r` | `l' - r'` | `L - R` |
//! | `*` | `l * r` | `l' * r + r' * l` | `(L) * (R)` |
//! | `/` | `l / r` | `(l' * r - r' * l) / r^2` | `(L) / (R)` |
//!
//! Compositions own deep copies of their operands, so they can be nested
//! arbitrarily but never form a cycle.
//!
//! ```rust
//! use elemfn::{Composition, Function, Identity, Operator, Power};
//!
//! let f = Composition::new(&Identity::new(1.0), Operator::Mul, &Power::new(2.0));
//! assert_eq!(f.eval(3.0), 27.0);
//! assert_eq!(f.derivative(3.0), 27.0);
//! assert_eq!(f.render(), "(x) * (x^(2.000000))");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::core::{Error, Func, Function};

/// Binary operator of a [`Composition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl Operator {
    /// All operators.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Textual tag of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Two functions combined by an [`Operator`]. See [module](self)
/// documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    lhs: Box<Func>,
    rhs: Box<Func>,
    op: Operator,
}

impl Composition {
    /// Initializes the composition `lhs op rhs`. Both operands are
    /// duplicated.
    pub fn new<L, R>(lhs: &L, op: Operator, rhs: &R) -> Self
    where
        L: Function + ?Sized,
        R: Function + ?Sized,
    {
        Self::from_parts(lhs.duplicate(), op, rhs.duplicate())
    }

    /// Initializes the composition `lhs op rhs` taking ownership of the
    /// operands.
    pub fn from_parts(lhs: Func, op: Operator, rhs: Func) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            op,
        }
    }

    /// Left operand.
    pub fn lhs(&self) -> &Func {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &Func {
        &self.rhs
    }

    /// Operator combining the operands.
    pub fn operator(&self) -> Operator {
        self.op
    }

    /// Height of the expression tree, one for a composition of two leaves.
    pub fn depth(&self) -> usize {
        let depth = |f: &Func| f.as_composition().map_or(0, Composition::depth);
        1 + depth(&self.lhs).max(depth(&self.rhs))
    }

    /// Decomposes into the operands and the operator.
    pub fn into_parts(self) -> (Func, Operator, Func) {
        (*self.lhs, self.op, *self.rhs)
    }
}

impl Function for Composition {
    fn eval(&self, x: f64) -> f64 {
        let l = self.lhs.eval(x);
        let r = self.rhs.eval(x);

        match self.op {
            Operator::Add => l + r,
            Operator::Sub => l - r,
            Operator::Mul => l * r,
            Operator::Div => l / r,
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        let dl = self.lhs.derivative(x);
        let dr = self.rhs.derivative(x);

        match self.op {
            Operator::Add => dl + dr,
            Operator::Sub => dl - dr,
            Operator::Mul => dl * self.rhs.eval(x) + dr * self.lhs.eval(x),
            Operator::Div => {
                let l = self.lhs.eval(x);
                let r = self.rhs.eval(x);
                (dl * r - dr * l) / (r * r)
            }
        }
    }

    fn render(&self) -> String {
        let l = self.lhs.render();
        let r = self.rhs.render();

        match self.op {
            Operator::Add => format!("{} + {}", l, r),
            Operator::Sub => format!("{} - {}", l, r),
            Operator::Mul => format!("({}) * ({})", l, r),
            Operator::Div => format!("({}) / ({})", l, r),
        }
    }

    fn duplicate(&self) -> Func {
        self.clone().into()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
