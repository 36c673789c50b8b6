use std::fmt;

use crate::{Args, Value};

/// What an invocation yields instead of the configured return value
pub enum Behavior {
    /// Computes the result from the arguments of each call
    Function(Box<dyn FnMut(&Args) -> Value + Send + 'static>),
    /// Yields successive values, one per call
    Iter(Box<dyn Iterator<Item = Value> + Send + 'static>),
}

#[derive(Debug, PartialEq)]
pub(crate) enum Output {
    Found(Value),
    Exhausted,
}

impl Behavior {
    pub fn function<F>(function: F) -> Self
    where
        F: FnMut(&Args) -> Value + Send + 'static,
    {
        Behavior::Function(Box::new(function))
    }

    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value> + 'static,
        I::IntoIter: Send + 'static,
    {
        Behavior::Iter(Box::new(values.into_iter().map(Into::<Value>::into)))
    }

    pub(crate) fn called(&mut self, args: &Args) -> Output {
        match self {
            Behavior::Function(function) => Output::Found(function(args)),
            Behavior::Iter(values) => values.next().map_or(Output::Exhausted, Output::Found),
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Function(_) => write!(f, "Behavior::Function(..)"),
            Behavior::Iter(_) => write!(f, "Behavior::Iter(..)"),
        }
    }
}

impl<F> From<F> for Behavior
where
    F: FnMut(&Args) -> Value + Send + 'static,
{
    fn from(function: F) -> Self {
        Behavior::function(function)
    }
}
