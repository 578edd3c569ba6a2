//! Traits which, typically, may be imported without concern: `use arbor::prelude::*`.

use crate::model::{Kind, Value};

/// Behaviour for a native Rust type that corresponds to a [`Kind`].
///
/// Used to read typed values back out of a `Context` (ex: `context.option::<i32>("count")`).
pub trait Primitive: Sized {
    /// The kind this type represents.
    const KIND: Kind;

    /// Extract `Self` from a value, if the value is of the same kind.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! primitive {
    ($native:ty, $variant:ident) => {
        impl Primitive for $native {
            const KIND: Kind = Kind::$variant;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

primitive!(bool, Bool);
primitive!(String, String);
primitive!(i8, Int8);
primitive!(i16, Int16);
primitive!(i32, Int32);
primitive!(i64, Int64);
primitive!(f32, Float32);
primitive!(f64, Float64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_same_kind() {
        assert_eq!(bool::from_value(&Value::Bool(true)), Some(true));
        assert_eq!(
            String::from_value(&Value::String("x".to_string())),
            Some("x".to_string())
        );
        assert_eq!(i64::from_value(&Value::Int64(-9)), Some(-9));
        assert_eq!(f64::from_value(&Value::Float64(1.5)), Some(1.5));
    }

    #[test]
    fn from_value_other_kind() {
        // No implicit widening between integer kinds.
        assert_eq!(i64::from_value(&Value::Int32(1)), None);
        assert_eq!(f32::from_value(&Value::Float64(1.0)), None);
        assert_eq!(String::from_value(&Value::Bool(false)), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(i8::KIND, Kind::Int8);
        assert_eq!(f32::KIND, Kind::Float32);
        assert_eq!(String::KIND, Kind::String);
    }
}
