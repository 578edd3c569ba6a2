/// The primitive kinds a parameter may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A flag set by presence only (`true` when specified).
    Bool,
    /// Any token, taken verbatim.
    String,
    /// A base-10 integer which fits into `i8`.
    Int8,
    /// A base-10 integer which fits into `i16`.
    Int16,
    /// A base-10 integer which fits into `i32`.
    Int32,
    /// A base-10 integer which fits into `i64`.
    Int64,
    /// A base-10 floating point number, as `f32`.
    Float32,
    /// A base-10 floating point number, as `f64`.
    Float64,
}

impl Kind {
    /// The coarse type label shown on the help message (ex: every integer width is an `int`).
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 => "int",
            Kind::Float32 | Kind::Float64 => "float",
        }
    }

    pub(crate) fn is_integer(&self) -> bool {
        matches!(self, Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
        };
        write!(f, "{name}")
    }
}

/// A typed value, in the native representation of its [`Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    #[allow(missing_docs)]
    Bool(bool),
    #[allow(missing_docs)]
    String(String),
    #[allow(missing_docs)]
    Int8(i8),
    #[allow(missing_docs)]
    Int16(i16),
    #[allow(missing_docs)]
    Int32(i32),
    #[allow(missing_docs)]
    Int64(i64),
    #[allow(missing_docs)]
    Float32(f32),
    #[allow(missing_docs)]
    Float64(f64),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
        }
    }

    /// The zero value of a kind: `false`, `""`, `0` or `0.0`.
    pub fn zero(kind: Kind) -> Self {
        match kind {
            Kind::Bool => Value::Bool(false),
            Kind::String => Value::String(String::default()),
            Kind::Int8 => Value::Int8(0),
            Kind::Int16 => Value::Int16(0),
            Kind::Int32 => Value::Int32(0),
            Kind::Int64 => Value::Int64(0),
            Kind::Float32 => Value::Float32(0.0),
            Kind::Float64 => Value::Float64(0.0),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "{value}"),
            Value::Int8(value) => write!(f, "{value}"),
            Value::Int16(value) => write!(f, "{value}"),
            Value::Int32(value) => write!(f, "{value}"),
            Value::Int64(value) => write!(f, "{value}"),
            Value::Float32(value) => write!(f, "{value}"),
            Value::Float64(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

macro_rules! value_from {
    ($native:ty, $variant:ident) => {
        impl From<$native> for Value {
            fn from(value: $native) -> Self {
                Value::$variant(value)
            }
        }
    };
}

value_from!(bool, Bool);
value_from!(String, String);
value_from!(i8, Int8);
value_from!(i16, Int16);
value_from!(i32, Int32);
value_from!(i64, Int64);
value_from!(f32, Float32);
value_from!(f64, Float64);
