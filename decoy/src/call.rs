use std::fmt;

use crate::{Args, Path, PathStep};

/// A recorded invocation: where in the chain it happened and with what
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Call {
    path: Path,
    args: Args,
}

/// An incomplete call record that has been accessed by attribute but not yet called
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    path: Path,
}

/// Starts a call record for invoking the double itself.
///
/// `call(args!(26)).attr("attr").attr("method").invoke(args!(8))` describes
/// `call().attr.method(8)`.
pub fn call(args: Args) -> Call {
    Call::new(Path::new(), args)
}

/// Starts a call record for an attribute of the double, as in `call.method()`.
pub fn chain() -> Chain {
    Chain::default()
}

impl Call {
    pub fn new(path: Path, args: Args) -> Self {
        Self { path, args }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Accesses an attribute of this call's return value.
    pub fn attr(self, name: &str) -> Chain {
        Chain {
            path: self
                .path
                .join(PathStep::Invocation)
                .join(PathStep::attribute(name)),
        }
    }

    /// Invokes this call's return value.
    pub fn invoke(self, args: Args) -> Call {
        Call {
            path: self.path.join(PathStep::Invocation),
            args,
        }
    }
}

impl Chain {
    pub fn attr(self, name: &str) -> Chain {
        Chain {
            path: self.path.join(PathStep::attribute(name)),
        }
    }

    pub fn invoke(self, args: Args) -> Call {
        Call::new(self.path, args)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "call{}({})", self.path, self.args)
    }
}

pub(crate) fn display_calls(calls: &[Call]) -> String {
    let calls: Vec<_> = calls.iter().map(ToString::to_string).collect();
    format!("[{}]", calls.join(", "))
}
