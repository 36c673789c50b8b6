use std::collections::BTreeMap;
use std::fmt;

use crate::Value;

/// Arguments captured from one invocation
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Args {
    positional: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.named.insert(name.into(), value.into());
    }

    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &BTreeMap<String, Value> {
        &self.named
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

impl<V: Into<Value>> FromIterator<V> for Args {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            named: BTreeMap::new(),
        }
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positional = self.positional.iter().map(ToString::to_string);
        let named = self
            .named
            .iter()
            .map(|(name, value)| format!("{name}={value}"));
        let args: Vec<_> = positional.chain(named).collect();
        write!(f, "{}", args.join(", "))
    }
}
