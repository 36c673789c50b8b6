use std::fmt;

use crate::{Args, Double, ValueError};

/// A dynamically typed argument or configured return value
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Double(Double),
    /// Equal to any value
    Any,
}

/// Shorthand for [`Value::Any`]
pub const ANY: Value = Value::Any;

impl Value {
    /// Returns the double held by this value.
    pub fn double(&self) -> Result<&Double, ValueError> {
        match self {
            Value::Double(double) => Ok(double),
            other => Err(ValueError::NotADouble(other.clone())),
        }
    }

    pub fn into_double(self) -> Result<Double, ValueError> {
        match self {
            Value::Double(double) => Ok(double),
            other => Err(ValueError::NotADouble(other)),
        }
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Accesses an attribute of the held double.
    ///
    /// Panics if this value is not a double.
    #[track_caller]
    pub fn attr(&self, name: &str) -> Double {
        match self.double() {
            Ok(double) => double.attr(name),
            Err(_) => panic!("{self} has no attribute `{name}`"),
        }
    }

    /// Invokes the held double.
    ///
    /// Panics if this value is not a double.
    #[track_caller]
    pub fn invoke(&self, args: Args) -> Value {
        match self.double() {
            Ok(double) => double.invoke(args),
            Err(_) => panic!("{self} is not callable"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Any, _) | (_, Value::Any) => true,
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value:?}"),
            Value::Str(value) => write!(f, "{value:?}"),
            Value::List(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Value::Double(double) => write!(f, "<Double {double}>"),
            Value::Any => write!(f, "<ANY>"),
        }
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Double> for Value {
    fn from(value: Double) -> Self {
        Value::Double(value)
    }
}

impl From<&Double> for Value {
    fn from(value: &Double) -> Self {
        Value::Double(value.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn any_equals_everything() {
        assert_eq!(ANY, Value::from(1));
        assert_eq!(Value::from("a"), ANY);
        assert_eq!(Value::from(vec![Value::from(1), ANY]), Value::from(vec![1, 2]));
    }

    #[test]
    fn int_equals_float() {
        assert_eq!(Value::from(2), Value::from(2.0));
        assert_ne!(Value::from(2), Value::from(2.5));
    }

    #[test]
    fn doubles_compare_by_identity() {
        let a = Double::new();
        let b = Double::new();
        assert_eq!(Value::from(&a), Value::from(a.clone()));
        assert_ne!(Value::from(&a), Value::from(&b));
    }

    #[test]
    fn display() {
        assert_eq!(Value::from(26).to_string(), "26");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::from(None::<i32>).to_string(), "None");

        let bar = Double::named("bar");
        assert_eq!(
            Value::from(bar.attr("method")).to_string(),
            "<Double bar.method>"
        );
    }

    #[test]
    fn into_double_fails_for_plain_values() {
        assert_eq!(
            Value::from(3).into_double(),
            Err(ValueError::NotADouble(Value::Int(3)))
        );
    }

    #[test]
    #[should_panic(expected = "42 is not callable")]
    fn invoke_plain_value_panics() {
        Value::from(42).invoke(Args::new());
    }

    #[test]
    #[should_panic(expected = "\"s\" has no attribute `len`")]
    fn attr_of_plain_value_panics() {
        Value::from("s").attr("len");
    }
}
