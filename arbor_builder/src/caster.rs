use std::str::FromStr;
use thiserror::Error;

use crate::model::{Kind, Value};

/// The raw input to a cast: either a Cli token, or a value which is already typed (ex: a declared initial).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Input<'t> {
    Token(&'t str),
    Native(Value),
}

impl<'t> From<&'t str> for Input<'t> {
    fn from(token: &'t str) -> Self {
        Input::Token(token)
    }
}

impl<'t> From<Value> for Input<'t> {
    fn from(value: Value) -> Self {
        Input::Native(value)
    }
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum InvalidValue {
    #[error("Expected {expected}, got '{token}'.")]
    Unparsable { token: String, expected: String },

    #[error("Expected a {expected} value, got a {actual} value.")]
    KindMismatch { expected: Kind, actual: Kind },
}

/// Cast the input into a value of the requested kind.
///
/// Typed inputs must already be of `kind` and are returned as-is.
/// Tokens are parsed in base-10, never by locale, and never into a `Bool` (booleans are set by presence only).
pub(crate) fn cast<'t>(input: impl Into<Input<'t>>, kind: Kind) -> Result<Value, InvalidValue> {
    match input.into() {
        Input::Native(value) => {
            if value.kind() == kind {
                Ok(value)
            } else {
                Err(InvalidValue::KindMismatch {
                    expected: kind,
                    actual: value.kind(),
                })
            }
        }
        Input::Token(token) => match kind {
            Kind::Bool => Err(unparsable(token, kind)),
            Kind::String => Ok(Value::String(token.to_string())),
            Kind::Int8 => parse(token, kind).map(Value::Int8),
            Kind::Int16 => parse(token, kind).map(Value::Int16),
            Kind::Int32 => parse(token, kind).map(Value::Int32),
            Kind::Int64 => parse(token, kind).map(Value::Int64),
            Kind::Float32 => parse(token, kind).map(Value::Float32),
            Kind::Float64 => parse(token, kind).map(Value::Float64),
        },
    }
}

fn parse<T: FromStr>(token: &str, kind: Kind) -> Result<T, InvalidValue> {
    T::from_str(token).map_err(|_| unparsable(token, kind))
}

fn unparsable(token: &str, kind: Kind) -> InvalidValue {
    InvalidValue::Unparsable {
        token: token.to_string(),
        expected: expectation(kind),
    }
}

fn expectation(kind: Kind) -> String {
    match kind {
        Kind::Bool => "no value (booleans are set by presence)".to_string(),
        Kind::String => "a string".to_string(),
        _ if kind.is_integer() => format!("an integer ({kind})"),
        _ => format!("a float ({kind})"),
    }
}
