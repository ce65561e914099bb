mod coerce;
mod float;


use std::fmt;
use ulid::Ulid;

// re-exports
pub use coerce::{CoercionId, coerce};
pub use float::Float64;

///
/// Value
///
/// Runtime scalar carried by key inputs, predicates and parameter nodes.
///
/// Null → absent key value (SQL NULL); never valid inside a built tree.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(ValueEnum),
    Float64(Float64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Null,
    Text(String),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Ulid(Ulid),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Integer payload widened to `i128`, for any integer variant.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        let value = match self {
            Self::Int8(v) => i128::from(*v),
            Self::Int16(v) => i128::from(*v),
            Self::Int32(v) => i128::from(*v),
            Self::Int64(v) => i128::from(*v),
            Self::Uint8(v) => i128::from(*v),
            Self::Uint16(v) => i128::from(*v),
            Self::Uint32(v) => i128::from(*v),
            Self::Uint64(v) => i128::from(*v),
            _ => return None,
        };

        Some(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Null => write!(f, "null"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Uint8(v) => write!(f, "{v}"),
            Self::Uint16(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Ulid(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_scalar {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    Float64 => Float64,
    String => Text,
    Ulid => Ulid,
    ValueEnum => Enum,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// ValueEnum
///
/// Enumeration variant by name. `path` is `None` for loose values that
/// match any enum declaring the variant.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ValueEnum {
    pub variant: String,
    pub path: Option<String>,
}

impl ValueEnum {
    /// Build an enum value matching the provided variant and path.
    #[must_use]
    pub fn new(variant: &str, path: Option<&str>) -> Self {
        Self {
            variant: variant.to_string(),
            path: path.map(ToString::to_string),
        }
    }

    /// Build an enum value that ignores the path for loose matching.
    #[must_use]
    pub fn loose(variant: &str) -> Self {
        Self::new(variant, None)
    }
}

impl fmt::Display for ValueEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{path}::{}", self.variant),
            None => write!(f, "{}", self.variant),
        }
    }
}
