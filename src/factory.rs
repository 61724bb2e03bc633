//! Construction of functions by name.
//!
//! The [`FunctionFactory`] is a registry mapping names to
//! [creators](Creator). A new factory knows the five leaf families:
//!
//! | name | family |
//! | ---- | ------ |
//! | `ident` | [`Identity`] |
//! | `const` | [`Constant`] |
//! | `power` | [`Power`] |
//! | `exp` | [`Exponential`] |
//! | `polynomial` | [`Polynomial`] |
//!
//! ```rust
//! use elemfn::factory::FunctionFactory;
//! use elemfn::Function;
//!
//! let factory = FunctionFactory::new();
//!
//! let f = factory.create_from("polynomial", &[3.0, -1.0, 3.0, 4.0, 5.0])?;
//! let g = factory.create_with("exp", 2.0)?;
//! assert_eq!(f.eval(0.0), 3.0);
//! assert_eq!(g.render(), "exp(2.000000*x)");
//!
//! assert!(factory.create("sin").is_err());
//! # Ok::<(), elemfn::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::core::{Error, Func};
use crate::functions::{Constant, Exponential, Identity, Polynomial, Power};

/// Constructor of one function family.
pub trait Creator {
    /// Creates the function with the default parameter.
    fn create(&self) -> Func;

    /// Creates the function with a single parameter.
    fn create_with(&self, param: f64) -> Func;

    /// Creates the function from a parameter sequence.
    fn create_from(&self, params: &[f64]) -> Func;
}

/// [`Creator`] for any function type that can be built from nothing, from a
/// number or from a parameter sequence.
pub struct FunctionCreator<T>(PhantomData<fn() -> T>);

impl<T> FunctionCreator<T> {
    /// Initializes the creator.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for FunctionCreator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Creator for FunctionCreator<T>
where
    T: Default + From<f64> + for<'a> From<&'a [f64]> + Into<Func>,
{
    fn create(&self) -> Func {
        T::default().into()
    }

    fn create_with(&self, param: f64) -> Func {
        T::from(param).into()
    }

    fn create_from(&self, params: &[f64]) -> Func {
        T::from(params).into()
    }
}

/// Registry of function creators. See [module](self) documentation.
pub struct FunctionFactory {
    creators: BTreeMap<String, Box<dyn Creator>>,
}

impl FunctionFactory {
    /// Initializes the factory with all leaf families registered.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register("ident", FunctionCreator::<Identity>::new());
        factory.register("const", FunctionCreator::<Constant>::new());
        factory.register("power", FunctionCreator::<Power>::new());
        factory.register("exp", FunctionCreator::<Exponential>::new());
        factory.register("polynomial", FunctionCreator::<Polynomial>::new());
        factory
    }

    /// Initializes a factory with no creators.
    pub fn empty() -> Self {
        Self {
            creators: BTreeMap::new(),
        }
    }

    /// Registers the creator under given name, replacing the previous one if
    /// the name is taken.
    pub fn register<C>(&mut self, name: impl Into<String>, creator: C)
    where
        C: Creator + 'static,
    {
        let name = name.into();
        debug!("registering function `{}`", name);
        self.creators.insert(name, Box::new(creator));
    }

    /// Names of the registered functions in ascending order.
    pub fn available(&self) -> Vec<String> {
        self.creators.keys().cloned().collect()
    }

    fn creator(&self, name: &str) -> Result<&dyn Creator, Error> {
        self.creators
            .get(name)
            .map(|creator| &**creator)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))
    }

    /// Creates the function with the default parameter.
    pub fn create(&self, name: &str) -> Result<Func, Error> {
        Ok(self.creator(name)?.create())
    }

    /// Creates the function with a single parameter.
    pub fn create_with(&self, name: &str, param: f64) -> Result<Func, Error> {
        Ok(self.creator(name)?.create_with(param))
    }

    /// Creates the function from a parameter sequence.
    pub fn create_from(&self, name: &str, params: &[f64]) -> Result<Func, Error> {
        Ok(self.creator(name)?.create_from(params))
    }
}

impl Default for FunctionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FunctionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionFactory")
            .field("creators", &self.creators.keys().collect::<Vec<_>>())
            .finish()
    }
}
