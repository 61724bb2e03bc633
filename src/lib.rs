#![allow(clippy::many_single_char_names)]
#![warn(missing_docs)]

//! # Elemfn
//!
//! Elementary real functions as first-class values.
//!
//! This library models a small family of real-valued functions of one
//! variable -- identity, constant, power, exponential and polynomial -- that
//! can be evaluated, differentiated analytically, combined with the
//! arithmetic operators and rendered to a human-readable string. Any function
//! can be fed into a simple iterative root finder.
//!
//! ## Functions
//!
//! * [Identity](functions::identity) -- `param * x`.
//! * [Constant](functions::constant) -- `param`.
//! * [Power](functions::power) -- `x^param`.
//! * [Exponential](functions::exponential) -- `exp(param * x)`.
//! * [Polynomial](functions::polynomial) -- `c_0 + c_1 * x + ... + c_n * x^n`.
//! * [Composition](composition) -- two functions combined by `+`, `-`, `*`
//!   or `/`.
//!
//! All of them implement the [`Function`] trait and convert into the [`Func`]
//! enum, which is the building block of composition trees.
//!
//! ```rust
//! use elemfn::{Exponential, Function, Polynomial};
//!
//! let g = Polynomial::from_params(&[3.0, -1.0, 3.0, 4.0, 5.0]);
//! let h = Exponential::new(2.0);
//!
//! let f = &g - &h;
//! assert_eq!(
//!     f.render(),
//!     "3.000000 + (-1.000000)*x^(1) + (3.000000)*x^(2) + (4.000000)*x^(3) + (5.000000)*x^(4) - exp(2.000000*x)"
//! );
//!
//! // Derivatives are computed analytically, using the rules of calculus.
//! assert_eq!(f.derivative(0.0), g.derivative(0.0) - h.derivative(0.0));
//! ```
//!
//! Functions are immutable values. A composition owns deep copies of its
//! operands, so the operands can be dropped or reused freely.
//!
//! ## Root finding
//!
//! ```rust
//! use elemfn::{find_root, Function, Polynomial};
//!
//! // f(x) = x^2 - 2
//! let f = Polynomial::from_params(&[-2.0, 0.0, 1.0]);
//! let x = find_root(&f, 1.0, 10_000, 1e-3);
//!
//! assert!((x - 2f64.sqrt()).abs() < 1e-9);
//! ```
//!
//! See the [driver](driver) module for the details of the iteration and the
//! [`RootDriver`] for fine-grained control.
//!
//! ## Construction by name
//!
//! The [`FunctionFactory`](factory::FunctionFactory) creates leaf functions
//! from their registered names (`ident`, `const`, `power`, `exp`,
//! `polynomial`).
//!
//! ## License
//!
//! Licensed under MIT.

pub mod composition;
mod core;
pub mod driver;
pub mod factory;
pub mod functions;
pub mod ops;

pub use crate::core::*;
pub use composition::{Composition, Operator};
pub use driver::{find_root, RootDriver, RootOptions};
pub use functions::{Constant, Exponential, Identity, Polynomial, Power};

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(not(feature = "testing"))]
pub(crate) mod testing;
