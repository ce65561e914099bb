use std::fmt;

///
/// EntityFieldModel
/// Non-key member metadata used to type join conditions.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntityFieldModel {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl EntityFieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

///
/// FieldKind
///
/// Declared scalar type of a member.
/// Aligned one-to-one with the non-null `Value` variants.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float64,
    Text,
    Ulid,
    Enum(&'static EnumModel),
}

impl FieldKind {
    /// Inclusive range of an integer kind, widened to `i128`.
    #[must_use]
    pub const fn integer_range(self) -> Option<(i128, i128)> {
        let range = match self {
            Self::Int8 => (i8::MIN as i128, i8::MAX as i128),
            Self::Int16 => (i16::MIN as i128, i16::MAX as i128),
            Self::Int32 => (i32::MIN as i128, i32::MAX as i128),
            Self::Int64 => (i64::MIN as i128, i64::MAX as i128),
            Self::Uint8 => (0, u8::MAX as i128),
            Self::Uint16 => (0, u16::MAX as i128),
            Self::Uint32 => (0, u32::MAX as i128),
            Self::Uint64 => (0, u64::MAX as i128),
            _ => return None,
        };

        Some(range)
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.integer_range().is_some()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float64 => "float64",
            Self::Text => "text",
            Self::Ulid => "ulid",
            Self::Enum(model) => return write!(f, "enum({})", model.path),
        };
        write!(f, "{label}")
    }
}

///
/// EnumModel
///
/// Enumeration declared as a key or member type.
/// Variants carry their discriminant so integer keys can widen into them.
///

#[derive(Debug, Eq, Hash, PartialEq)]
pub struct EnumModel {
    pub path: &'static str,
    pub variants: &'static [(&'static str, i64)],
}

impl EnumModel {
    #[must_use]
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(_, value)| *value == discriminant)
            .map(|(name, _)| *name)
    }

    #[must_use]
    pub fn has_variant(&self, name: &str) -> bool {
        self.variants.iter().any(|(variant, _)| *variant == name)
    }
}
