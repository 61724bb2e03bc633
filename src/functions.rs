//! Leaf function families.
//!
//! * [Identity](identity) -- `param * x`.
//! * [Constant](constant) -- `param`.
//! * [Power](power) -- `x^param`.
//! * [Exponential](exponential) -- `exp(param * x)`.
//! * [Polynomial](polynomial) -- `Σ c_i * x^i`.
//!
//! Every family can be constructed from its parameter, from a parameter
//! sequence, or with the default parameter of zero. The scalar families take
//! only the first element of a parameter sequence and ignore the rest, so a
//! family can be built out of a longer list of heterogeneous parameters:
//!
//! ```rust
//! use elemfn::{Function, Identity};
//!
//! let f = Identity::from_params(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(f.render(), "x");
//! ```

pub mod constant;
pub mod exponential;
pub mod identity;
pub mod polynomial;
pub mod power;

pub use constant::Constant;
pub use exponential::Exponential;
pub use identity::Identity;
pub use polynomial::Polynomial;
pub use power::Power;

/// Formats a number in fixed-point notation with six fractional digits.
///
/// Non-finite values are written as `nan`, `inf` and `-inf`.
pub(crate) fn fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// First element of a parameter sequence, or zero if the sequence is empty.
pub(crate) fn first_param(params: &[f64]) -> f64 {
    params.first().copied().unwrap_or_default()
}

macro_rules! impl_scalar_family {
    ($family:ident) => {
        impl $family {
            /// Initializes the function from a parameter sequence. Only the
            /// first element is used, an empty sequence gives the default.
            pub fn from_params(params: &[f64]) -> Self {
                Self::new($crate::functions::first_param(params))
            }

            /// Returns the parameter of the function.
            pub fn param(&self) -> f64 {
                self.param
            }
        }

        impl From<f64> for $family {
            fn from(param: f64) -> Self {
                Self::new(param)
            }
        }

        impl From<&[f64]> for $family {
            fn from(params: &[f64]) -> Self {
                Self::from_params(params)
            }
        }

        impl std::fmt::Display for $family {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::core::Function::render(self))
            }
        }
    };
}

pub(crate) use impl_scalar_family;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_notation() {
        assert_eq!(fixed(0.0), "0.000000");
        assert_eq!(fixed(1.0), "1.000000");
        assert_eq!(fixed(-2.5), "-2.500000");
        assert_eq!(fixed(1.0 / 3.0), "0.333333");
        assert_eq!(fixed(2.0 / 3.0), "0.666667");
        assert_eq!(fixed(1e10), "10000000000.000000");
        assert_eq!(fixed(f64::NAN), "nan");
        assert_eq!(fixed(f64::INFINITY), "inf");
        assert_eq!(fixed(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn first_param_of_sequence() {
        assert_eq!(first_param(&[]), 0.0);
        assert_eq!(first_param(&[4.0]), 4.0);
        assert_eq!(first_param(&[4.0, 5.0, 6.0]), 4.0);
    }
}
