mod chaining;
mod oracle;
mod properties;
mod scenarios;

#[cfg(feature = "serde")]
mod serde_calls;
