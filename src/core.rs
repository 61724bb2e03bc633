//! Core abstractions and types.
//!
//! *Users* mainly work with [`Func`] values and the concrete
//! [function families](crate::functions). Implementing the [`Function`] trait
//! is only necessary for custom functions fed into the
//! [root finder](crate::driver).

mod error;
mod function;

pub use error::*;
pub use function::*;
