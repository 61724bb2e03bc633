//! Polynomial `c_0 + c_1 * x + ... + c_n * x^n`.
//!
//! Only terms with a non-zero coefficient are stored, with the exception of
//! the constant term, which is always present:
//!
//! ```rust
//! use elemfn::{Function, Polynomial};
//!
//! let f = Polynomial::from_params(&[0.0, 2.0, 0.0, 1.0]);
//! assert_eq!(f.terms().collect::<Vec<_>>(), vec![(0, 0.0), (1, 2.0), (3, 1.0)]);
//! assert_eq!(f.render(), "(2.000000)*x^(1) + (1.000000)*x^(3)");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::core::{Func, Function};

use super::fixed;

/// Polynomial in `x`. See [module](self) documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: BTreeMap<u32, f64>,
}

impl Polynomial {
    /// Initializes the constant polynomial `c`.
    pub fn new(c: f64) -> Self {
        Self::from_terms([(0, c)])
    }

    /// Initializes the polynomial from coefficients ordered by ascending
    /// exponent, i.e., `params[i]` is the coefficient of `x^i`.
    pub fn from_params(params: &[f64]) -> Self {
        Self::from_terms((0u32..).zip(params.iter().copied()))
    }

    /// Initializes the polynomial from `(exponent, coefficient)` pairs. If an
    /// exponent repeats, the later coefficient wins.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(0, 0.0);

        for (exp, c) in terms {
            if c != 0.0 || exp == 0 {
                coeffs.insert(exp, c);
            } else {
                coeffs.remove(&exp);
            }
        }

        Self { coeffs }
    }

    /// Iterates over the stored `(exponent, coefficient)` pairs in ascending
    /// order of exponents.
    pub fn terms(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.coeffs.iter().map(|(exp, c)| (*exp, *c))
    }

    /// Returns the coefficient of `x^exp`.
    pub fn coeff(&self, exp: u32) -> f64 {
        self.coeffs.get(&exp).copied().unwrap_or_default()
    }

    /// Highest exponent with a non-zero coefficient, zero for constant
    /// polynomials.
    pub fn degree(&self) -> u32 {
        self.coeffs.keys().next_back().copied().unwrap_or_default()
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for Polynomial {
    fn from(c: f64) -> Self {
        Self::new(c)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(params: &[f64]) -> Self {
        Self::from_params(params)
    }
}

fn powu(x: f64, exp: u32) -> f64 {
    match i32::try_from(exp) {
        Ok(exp) => x.powi(exp),
        Err(_) => x.powf(exp as f64),
    }
}

impl Function for Polynomial {
    fn eval(&self, x: f64) -> f64 {
        self.terms().map(|(exp, c)| c * powu(x, exp)).sum()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.terms()
            .filter(|(exp, _)| *exp > 0)
            .map(|(exp, c)| exp as f64 * c * powu(x, exp - 1))
            .sum()
    }

    fn render(&self) -> String {
        let terms = self
            .terms()
            .filter(|(_, c)| *c != 0.0)
            .map(|(exp, c)| {
                if exp == 0 {
                    fixed(c)
                } else {
                    format!("({})*x^({})", fixed(c), exp)
                }
            })
            .collect::<Vec<_>>();

        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }

    fn duplicate(&self) -> Func {
        self.clone().into()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
