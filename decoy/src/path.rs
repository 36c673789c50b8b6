use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::PathError;

/// One step of a chain of accesses on a double
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PathStep {
    Attribute(String),
    /// Calling the double, which yields its return value
    Invocation,
}

impl PathStep {
    pub fn attribute(name: impl Into<String>) -> Self {
        PathStep::Attribute(name.into())
    }
}

impl FromStr for PathStep {
    type Err = PathError;

    fn from_str(step: &str) -> Result<Self, Self::Err> {
        match step {
            "invocation" | "return_value" => Ok(PathStep::Invocation),
            name if is_identifier(name) => Ok(PathStep::Attribute(name.to_string())),
            step => Err(PathError::InvalidStep {
                step: step.to_string(),
            }),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Attribute(name) => write!(f, ".{name}"),
            PathStep::Invocation => write!(f, "()"),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// A sequence of steps from a double to one of its descendants
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path(Vec<PathStep>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: PathStep) {
        self.0.push(step);
    }

    pub fn join(mut self, step: PathStep) -> Self {
        self.push(step);
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }
}

impl Deref for Path {
    type Target = [PathStep];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Self(steps)
    }
}

impl From<&[PathStep]> for Path {
    fn from(steps: &[PathStep]) -> Self {
        Self(steps.to_vec())
    }
}

impl FromIterator<PathStep> for Path {
    fn from_iter<T: IntoIterator<Item = PathStep>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if path.trim().is_empty() {
            return Err(PathError::Empty);
        }
        path.split('.')
            .enumerate()
            .map(|(index, step)| {
                let step = step.trim();
                if step.is_empty() {
                    return Err(PathError::EmptyStep {
                        path: path.to_string(),
                        index,
                    });
                }
                step.parse()
            })
            .collect()
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        path.parse()
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        path.parse()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
