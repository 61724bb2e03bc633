//! Operator combinators building [compositions](Composition).
//!
//! There are two ways of combining functions. The arithmetic operators are
//! implemented for every function type and check the right-hand operand at
//! compile time:
//!
//! ```rust
//! use elemfn::{Exponential, Function, Polynomial};
//!
//! let g = Polynomial::from_params(&[0.0, 2.0, 1.0]);
//! let h = Polynomial::from_params(&[0.0, 1.0, 2.0]);
//!
//! let sum = &g + &h;
//! assert_eq!(sum.eval(1.0), 6.0);
//! assert_eq!(sum.eval(2.0), 18.0);
//!
//! let f = sum / Exponential::new(0.0);
//! assert_eq!(f.eval(2.0), 18.0);
//! ```
//!
//! The functions [`add`], [`sub`], [`mul`], [`div`] and [`compose`] accept a
//! right-hand operand of any type and check at run time whether it is a
//! function, failing with [`Error::TypeMismatch`] otherwise:
//!
//! ```rust
//! use elemfn::{ops, Error, Identity, Polynomial};
//!
//! let g = Polynomial::from_params(&[0.0, 2.0]);
//!
//! assert!(ops::add(&g, &Identity::new(2.0)).is_ok());
//! assert_eq!(
//!     ops::add(&g, &"abc"),
//!     Err(Error::TypeMismatch { found: "&str" })
//! );
//! ```

use std::any::{type_name, Any};
use std::ops::{Add, Div, Mul, Sub};

use crate::composition::{Composition, Operator};
use crate::core::{Error, Func, Function};
use crate::functions::{Constant, Exponential, Identity, Polynomial, Power};

/// Converts the value into a [`Func`] if its type is one of the function
/// types of the library.
fn as_function<R: Any>(value: &R) -> Option<Func> {
    let value = value as &dyn Any;

    macro_rules! try_downcast {
        ($($ty:ty),*) => {
            $(
                if let Some(f) = value.downcast_ref::<$ty>() {
                    return Some(f.duplicate());
                }
            )*
        };
    }

    try_downcast!(Func, Identity, Constant, Power, Exponential, Polynomial, Composition);
    None
}

/// Builds the composition `lhs op rhs` if `rhs` is a function.
///
/// Both operands are duplicated. If the right-hand operand is not a
/// function, nothing is constructed and [`Error::TypeMismatch`] naming the
/// operand type is returned.
pub fn compose<L, R>(lhs: &L, op: Operator, rhs: &R) -> Result<Composition, Error>
where
    L: Function + ?Sized,
    R: Any,
{
    let rhs = as_function(rhs).ok_or(Error::TypeMismatch {
        found: type_name::<R>(),
    })?;

    Ok(Composition::from_parts(lhs.duplicate(), op, rhs))
}

/// Builds `lhs + rhs`. See [`compose`].
pub fn add<L, R>(lhs: &L, rhs: &R) -> Result<Composition, Error>
where
    L: Function + ?Sized,
    R: Any,
{
    compose(lhs, Operator::Add, rhs)
}

/// Builds `lhs - rhs`. See [`compose`].
pub fn sub<L, R>(lhs: &L, rhs: &R) -> Result<Composition, Error>
where
    L: Function + ?Sized,
    R: Any,
{
    compose(lhs, Operator::Sub, rhs)
}

/// Builds `lhs * rhs`. See [`compose`].
pub fn mul<L, R>(lhs: &L, rhs: &R) -> Result<Composition, Error>
where
    L: Function + ?Sized,
    R: Any,
{
    compose(lhs, Operator::Mul, rhs)
}

/// Builds `lhs / rhs`. See [`compose`].
pub fn div<L, R>(lhs: &L, rhs: &R) -> Result<Composition, Error>
where
    L: Function + ?Sized,
    R: Any,
{
    compose(lhs, Operator::Div, rhs)
}

macro_rules! impl_operator {
    ($trait:ident, $method:ident, $op:expr; $($ty:ty),*) => {
        $(
            impl<R: Function> $trait<R> for $ty {
                type Output = Composition;

                fn $method(self, rhs: R) -> Composition {
                    Composition::from_parts(self.into(), $op, rhs.duplicate())
                }
            }

            impl<'a, 'b, R: Function + ?Sized> $trait<&'b R> for &'a $ty {
                type Output = Composition;

                fn $method(self, rhs: &'b R) -> Composition {
                    Composition::new(self, $op, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_operators {
    ($($ty:ty),*) => {
        impl_operator!(Add, add, Operator::Add; $($ty),*);
        impl_operator!(Sub, sub, Operator::Sub; $($ty),*);
        impl_operator!(Mul, mul, Operator::Mul; $($ty),*);
        impl_operator!(Div, div, Operator::Div; $($ty),*);
    };
}

impl_operators!(Func, Identity, Constant, Power, Exponential, Polynomial, Composition);

#[cfg(test)]
mod tests {
    use super::*;

    use std::rc::Rc;

    fn g() -> Func {
        Polynomial::from_params(&[0.0, 2.0, 1.0]).into()
    }

    fn h() -> Func {
        Polynomial::from_params(&[0.0, 1.0, 2.0]).into()
    }

    #[test]
    fn sum_and_difference() {
        let sum = &g() + &h();
        assert_eq!(sum.eval(1.0), 6.0);
        assert_eq!(sum.eval(2.0), 18.0);

        let diff = g() - h();
        assert_eq!(diff.eval(1.0), 0.0);
        assert_eq!(diff.eval(2.0), -2.0);
    }

    #[test]
    fn product_and_quotient() {
        let prod = g() * h();
        assert_eq!(prod.eval(1.0), 9.0);
        assert_eq!(prod.eval(2.0), 80.0);

        let sum = g() + h();
        let e0 = Exponential::new(0.0);
        assert_eq!((&sum / &e0).eval(1.0), 6.0);
        assert_eq!((&sum / &e0).eval(2.0), 18.0);

        let quot = &sum / &e0;
        assert_eq!((quot / Constant::new(18.0)).eval(2.0), 1.0);
    }

    #[test]
    fn derivative_through_operators() {
        let f = Power::new(2.0);
        let g = Polynomial::from_params(&[7.0, 0.0, 3.0, 15.0]);
        assert_eq!((&f + &g).derivative(1.0), 53.0);
        assert_eq!(f.derivative(3.0), 6.0);

        let k = Exponential::new(2.0);
        assert_eq!(k.derivative(2.0), (&k + &k).eval(2.0));
        assert_eq!(k.derivative(20.0), (&k + &k).eval(20.0));
    }

    #[test]
    fn fallible_combinators() {
        let (g, h) = (g(), h());

        for (op, f) in [
            (Operator::Add, add(&g, &h)),
            (Operator::Sub, sub(&g, &h)),
            (Operator::Mul, mul(&g, &h)),
            (Operator::Div, div(&g, &h)),
        ] {
            let f = f.unwrap();
            assert_eq!(f.operator(), op);
            assert_eq!(f, Composition::new(&g, op, &h));
        }

        let sum = add(&g, &Identity::new(2.0)).unwrap();
        let nested = add(&sum, &sum).unwrap();
        assert_eq!(nested.eval(1.0), 2.0 * (3.0 + 2.0));
    }

    #[test]
    fn type_mismatch() {
        let f = Polynomial::from_params(&[0.0, 2.0]);

        assert_eq!(add(&f, &"abc"), Err(Error::TypeMismatch { found: "&str" }));
        assert!(matches!(
            add(&f, &Rc::new(f.clone())),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            mul(&f, &Box::new(Func::from(f.clone()))),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(div(&f, &2.0), Err(Error::TypeMismatch { found: "f64" })));

        let sum = add(&f, &Identity::new(2.0)).unwrap();
        assert!(matches!(add(&sum, &"abc"), Err(Error::TypeMismatch { .. })));
        assert!(matches!(
            sub(&sum, &Rc::new(f)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn mismatch_message() {
        let err = add(&Identity::new(1.0), &"abc").unwrap_err();
        assert_eq!(err.to_string(), "type mismatch: `&str` is not a function");
    }

    #[test]
    fn operands_by_reference_are_untouched() {
        let f = Identity::new(2.0);
        let g = Power::new(2.0);
        let sum = &f + &g;

        assert_eq!(f, Identity::new(2.0));
        assert_eq!(sum.lhs(), &Func::Identity(f));
        assert_eq!(sum.rhs(), &Func::Power(g));
    }
}
