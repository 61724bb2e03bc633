use thiserror::Error;

/// Error returned by the fallible parts of the library.
///
/// Numeric edge cases (division by zero, non-integer power of a negative
/// base, overflow) are never reported through this type. They propagate as
/// infinities or NaN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The right-hand operand of a combinator is not a function.
    #[error("type mismatch: `{found}` is not a function")]
    TypeMismatch {
        /// Name of the rejected operand type.
        found: &'static str,
    },
    /// No creator is registered under the name in the
    /// [factory](crate::factory::FunctionFactory).
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    /// An operator tag other than `+`, `-`, `*` or `/`.
    #[error("operator error: `{0}` is not a valid operator")]
    InvalidOperator(String),
}
