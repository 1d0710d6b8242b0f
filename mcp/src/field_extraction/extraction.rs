//! Core extraction infrastructure for tool arguments.
//!
//! Tool arguments arrive as an untyped JSON object. This module turns them into
//! typed values with three uniform failure modes: a required key that is absent
//! or null, a value of the wrong kind, and an integral value that does not fit
//! the requested width. Nothing here coerces: `"123"` is not a number and
//! `1.5` is not an integer.

use serde_json::Map;
use serde_json::Value;
use strum::Display;

use crate::error::Error;
use crate::error::Result;

/// Kinds of values that can be extracted from tool arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterKind {
    /// A string value
    String,
    /// Any finite number
    Number,
    /// A number with no fractional part
    Integer,
    /// A boolean value
    Boolean,
    /// An array of strings
    #[strum(serialize = "string array")]
    StringArray,
    /// An array of arbitrary values
    Array,
    /// A nested object
    Object,
}

impl ParameterKind {
    /// The JSON Schema `type` keyword for this kind
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::StringArray | Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Name the kind of an untyped value for error messages.
pub const fn describe_json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A type that can be read out of a single argument value.
pub trait FromParameter: Sized {
    /// The kind reported in schemas and mismatch errors
    const KIND: ParameterKind;

    /// Convert a present, non-null value.
    ///
    /// # Errors
    /// Returns `WrongType` when the value has a different shape, or
    /// `OutOfRange` when a number does not fit the target width.
    fn from_parameter(name: &str, value: &Value) -> Result<Self>;

    /// The value used when an optional argument is absent.
    fn zero() -> Self;
}

fn mismatch<T: FromParameter>(name: &str, value: &Value) -> error_stack::Report<Error> {
    error_stack::Report::new(Error::wrong_type(name, T::KIND, describe_json_type(value)))
}

impl FromParameter for String {
    const KIND: ParameterKind = ParameterKind::String;

    fn from_parameter(name: &str, value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch::<Self>(name, value))
    }

    fn zero() -> Self {
        Self::new()
    }
}

impl FromParameter for bool {
    const KIND: ParameterKind = ParameterKind::Boolean;

    fn from_parameter(name: &str, value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(name, value))
    }

    fn zero() -> Self {
        false
    }
}

impl FromParameter for f64 {
    const KIND: ParameterKind = ParameterKind::Number;

    fn from_parameter(name: &str, value: &Value) -> Result<Self> {
        value.as_f64().ok_or_else(|| mismatch::<Self>(name, value))
    }

    fn zero() -> Self {
        0.0
    }
}

/// Read a number through its floating-point form and require it to be integral.
fn integral(name: &str, value: &Value) -> Result<f64> {
    let number = value
        .as_f64()
        .filter(|n| n.is_finite() && n.fract() == 0.0)
        .ok_or_else(|| {
            error_stack::Report::new(Error::wrong_type(
                name,
                ParameterKind::Integer,
                describe_json_type(value),
            ))
        })?;
    Ok(number)
}

macro_rules! integer_parameter {
    ($($int:ty),*) => {
        $(
            impl FromParameter for $int {
                const KIND: ParameterKind = ParameterKind::Integer;

                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    reason = "the value is integral and range-checked before the cast"
                )]
                fn from_parameter(name: &str, value: &Value) -> Result<Self> {
                    let number = integral(name, value)?;
                    // MIN and MAX + 1 are powers of two, so both bounds are exact in f64
                    let upper = <$int>::MAX as f64 + 1.0;
                    if number < <$int>::MIN as f64 || number >= upper {
                        return Err(error_stack::Report::new(Error::out_of_range(
                            name,
                            format!(
                                "{number} does not fit in {}..={}",
                                <$int>::MIN,
                                <$int>::MAX
                            ),
                        )));
                    }
                    Ok(number as $int)
                }

                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

integer_parameter!(i32, i64, u32, u64);

impl FromParameter for Vec<String> {
    const KIND: ParameterKind = ParameterKind::StringArray;

    fn from_parameter(name: &str, value: &Value) -> Result<Self> {
        value
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Self>>()
            })
            .ok_or_else(|| mismatch::<Self>(name, value))
    }

    fn zero() -> Self {
        Self::new()
    }
}

impl FromParameter for Vec<Value> {
    const KIND: ParameterKind = ParameterKind::Array;

    fn from_parameter(name: &str, value: &Value) -> Result<Self> {
        value
            .as_array()
            .cloned()
            .ok_or_else(|| mismatch::<Self>(name, value))
    }

    fn zero() -> Self {
        Self::new()
    }
}

impl FromParameter for Map<String, Value> {
    const KIND: ParameterKind = ParameterKind::Object;

    fn from_parameter(name: &str, value: &Value) -> Result<Self> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| mismatch::<Self>(name, value))
    }

    fn zero() -> Self {
        Self::new()
    }
}

/// Read-only view over a tool call's arguments.
#[derive(Clone, Copy, Debug)]
pub struct Arguments<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Arguments<'a> {
    /// Wrap an argument object
    pub const fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// The raw value for a key, treating an explicit null as absent
    fn present(self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// Extract a required argument.
    ///
    /// An empty string is a valid required string.
    ///
    /// # Errors
    /// `MissingParameter` when the key is absent or null, otherwise any
    /// conversion error from [`FromParameter`].
    pub fn required<T: FromParameter>(self, key: &str) -> Result<T> {
        let value = self
            .present(key)
            .ok_or_else(|| error_stack::Report::new(Error::missing(key)))?;
        T::from_parameter(key, value)
    }

    /// Extract an optional argument, falling back to the kind's zero value.
    ///
    /// # Errors
    /// Any conversion error from [`FromParameter`]; absence never fails.
    pub fn optional<T: FromParameter>(self, key: &str) -> Result<T> {
        Ok(self.supplied(key)?.unwrap_or_else(T::zero))
    }

    /// Extract an optional argument, keeping track of whether it was supplied.
    ///
    /// `None` means the caller did not send the key (or sent null); `Some`
    /// carries the value even when it equals the kind's zero value.
    ///
    /// # Errors
    /// Any conversion error from [`FromParameter`]; absence never fails.
    pub fn supplied<T: FromParameter>(self, key: &str) -> Result<Option<T>> {
        self.present(key)
            .map(|value| T::from_parameter(key, value))
            .transpose()
    }

    /// Like [`Self::supplied`] for a string that must be one of `allowed`.
    ///
    /// # Errors
    /// `WrongType` for a non-string, `OutOfRange` for a string outside `allowed`.
    pub fn supplied_one_of(self, key: &str, allowed: &[&str]) -> Result<Option<String>> {
        match self.supplied::<String>(key)? {
            Some(value) if !allowed.contains(&value.as_str()) => {
                Err(error_stack::Report::new(Error::out_of_range(
                    key,
                    format!("'{value}' must be one of: {}", allowed.join(", ")),
                )))
            },
            supplied => Ok(supplied),
        }
    }
}
