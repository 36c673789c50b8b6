//! Errors raised by configuration and assertions

use std::convert::Infallible;

use thiserror::Error;

use crate::call::display_calls;
use crate::times::count;
use crate::{Args, Call, Path, Times, Value};

/// Result type for configuration
pub type Result<T, E = ConfigureError> = std::result::Result<T, E>;

/// A textual path could not be parsed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,

    #[error("path step {index} is empty in `{path}`")]
    EmptyStep { path: String, index: usize },

    #[error("invalid path step `{step}`: expected `invocation`, `return_value` or an attribute name")]
    InvalidStep { step: String },
}

/// A path could not be configured on a double
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigureError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("cannot traverse `{path}`: it is configured with the plain value {value}")]
    NotADouble { path: Path, value: Value },
}

impl From<Infallible> for ConfigureError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// A value was used as a double
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("{0} is not a double")]
    NotADouble(Value),
}

/// An assertion on the recorded calls failed
#[derive(Debug, PartialEq, Error)]
pub enum AssertionError {
    #[error("expected {name} to be called {expected}, but it was called {}", count(.actual))]
    CallCount {
        name: String,
        expected: Times,
        actual: usize,
    },

    #[error("expected {name} to be called with ({expected}), but it was not called")]
    NotCalled { name: String, expected: Args },

    #[error("expected call not found.\nexpected: {name}({expected})\n  actual: {name}({actual})")]
    ArgsMismatch {
        name: String,
        expected: Args,
        actual: Args,
    },

    #[error("{name}({expected}) call not found in {}", display_calls(.actual))]
    NoSuchCall {
        name: String,
        expected: Args,
        actual: Vec<Call>,
    },

    #[error(
        "{missing} not found in the calls of {name}.\nexpected: {}\n  actual: {}",
        display_calls(.expected),
        display_calls(.actual)
    )]
    MissingCall {
        name: String,
        missing: Call,
        expected: Vec<Call>,
        actual: Vec<Call>,
    },

    #[error(
        "calls of {name} do not match.\nexpected: {}\n  actual: {}",
        display_calls(.expected),
        display_calls(.actual)
    )]
    CallsMismatch {
        name: String,
        expected: Vec<Call>,
        actual: Vec<Call>,
    },
}
