//! Registered handlers and their declared signatures.
//!
//! A [`Handler`] pairs an opaque callable with an explicit, enumerable list of
//! parameter [`TypeDescriptor`]s captured at registration time. The dispatcher
//! consults that list to decide which payload slots to read and how to decode
//! them, so no runtime introspection of the callable is ever needed.
//!
//! Arity is data: [`Handler::new`] takes the descriptor list and one callable
//! receiving the decoded [`Arguments`]. Handlers accept at most
//! [`MAX_ARITY`] parameters; this cap is part of the wire format, which has
//! one payload slot for single-argument commands and two for two-argument
//! commands.

mod errors;
mod parameter;

use std::fmt;
use std::slice;

use crate::decode::{TypeDescriptor, Value};
use crate::registry::RegistryError;

pub use self::errors::{BoxedError, HandlerError};
pub use self::parameter::Parameter;

/// Largest number of parameters a handler may declare.
pub const MAX_ARITY: usize = 2;

type Callable = dyn Fn(Arguments) -> Result<(), HandlerError> + Send + Sync;

/// Ordered parameter types declared by a handler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    parameters: Vec<TypeDescriptor>,
}

impl Signature {
    /// Builds a signature, rejecting more than [`MAX_ARITY`] parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedArity`] when too many parameters
    /// are declared.
    pub fn new(parameters: Vec<TypeDescriptor>) -> Result<Self, RegistryError> {
        if parameters.len() > MAX_ARITY {
            return Err(RegistryError::UnsupportedArity {
                arity: parameters.len(),
            });
        }
        Ok(Self { parameters })
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Parameter descriptor at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&TypeDescriptor> {
        self.parameters.get(position)
    }

    /// Iterates over descriptors in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, TypeDescriptor> {
        self.parameters.iter()
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a TypeDescriptor;
    type IntoIter = slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(parameter.type_name())?;
        }
        f.write_str(")")
    }
}

/// Decoded arguments handed to a handler, in declared order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    /// Wraps decoded values.
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` for a nullary invocation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    /// Consumes the arguments, yielding the values in order.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// A registered callable together with its declared signature.
///
/// # Example
///
/// ```
/// use courier::decode::TypeDescriptor;
/// use courier::handler::{Arguments, Handler};
///
/// let generic = Handler::new(vec![TypeDescriptor::int()], |args: Arguments| {
///     assert_eq!(args.get(0).and_then(|v| v.as_int()), Some(100));
///     Ok(())
/// })
/// .expect("one parameter is within the arity cap");
/// assert_eq!(generic.arity(), 1);
///
/// let typed = Handler::binary(|x: f64, label: String| {
///     let _ = (x, label);
///     Ok(())
/// });
/// assert_eq!(typed.signature().to_string(), "(float, string)");
/// ```
pub struct Handler {
    signature: Signature,
    callable: Box<Callable>,
}

impl Handler {
    /// Creates a handler from a descriptor list and a callable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedArity`] when more than
    /// [`MAX_ARITY`] parameters are declared.
    pub fn new<F>(parameters: Vec<TypeDescriptor>, callable: F) -> Result<Self, RegistryError>
    where
        F: Fn(Arguments) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Ok(Self::from_parts(Signature::new(parameters)?, callable))
    }

    fn from_parts<F>(signature: Signature, callable: F) -> Self
    where
        F: Fn(Arguments) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self {
            signature,
            callable: Box::new(callable),
        }
    }

    /// Creates a handler taking no arguments.
    pub fn nullary<F>(callable: F) -> Self
    where
        F: Fn() -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self::from_parts(Signature::default(), move |_arguments: Arguments| callable())
    }

    /// Creates a handler taking one typed argument.
    pub fn unary<T, F>(callable: F) -> Self
    where
        T: Parameter,
        F: Fn(T) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let signature = Signature {
            parameters: vec![T::descriptor()],
        };
        Self::from_parts(signature, move |arguments: Arguments| {
            let mut values = arguments.into_values().into_iter();
            let first = parameter::convert::<T>(0, next_value(&mut values, 0)?)?;
            callable(first)
        })
    }

    /// Creates a handler taking two typed arguments.
    pub fn binary<A, B, F>(callable: F) -> Self
    where
        A: Parameter,
        B: Parameter,
        F: Fn(A, B) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let signature = Signature {
            parameters: vec![A::descriptor(), B::descriptor()],
        };
        Self::from_parts(signature, move |arguments: Arguments| {
            let mut values = arguments.into_values().into_iter();
            let first = parameter::convert::<A>(0, next_value(&mut values, 0)?)?;
            let second = parameter::convert::<B>(1, next_value(&mut values, 1)?)?;
            callable(first, second)
        })
    }

    /// Declared signature.
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    /// Runs the callable with already decoded arguments.
    ///
    /// # Errors
    ///
    /// Propagates whatever the callable reports.
    pub fn invoke(&self, arguments: Arguments) -> Result<(), HandlerError> {
        (self.callable)(arguments)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

fn next_value(
    values: &mut impl Iterator<Item = Value>,
    position: usize,
) -> Result<Value, HandlerError> {
    values
        .next()
        .ok_or_else(|| HandlerError::conversion(position, "argument", "argument not supplied"))
}
