use crate::{
    model::field::{EnumModel, FieldKind},
    value::{Float64, Value, ValueEnum},
};
use num_traits::ToPrimitive;
use serde::Deserialize;

///
/// CONSTANTS
///

// Largest integer magnitude an f64 represents exactly.
const F64_SAFE_I128: i128 = 1i128 << 53;

///
/// CoercionId
///
/// Identifier for the literal coercion policy applied when a key value is
/// wrapped for its declared member type.
///
/// Strict requires the value variant to already match the declared kind.
/// NumericWiden converts between integer widths when the value fits,
/// widens integers into Float64 when exact, and maps integer discriminants
/// onto enum variants.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CoercionId {
    Strict,
    #[default]
    NumericWiden,
}

/// Wrap `value` as a literal of `kind` under `coercion`.
///
/// Returns `None` when the value cannot represent the declared kind.
/// `Value::Null` never coerces; null checks belong to the caller.
#[must_use]
pub fn coerce(value: &Value, kind: FieldKind, coercion: CoercionId) -> Option<Value> {
    if value.is_null() {
        return None;
    }

    if let Some(strict) = coerce_strict(value, kind) {
        return Some(strict);
    }

    match coercion {
        CoercionId::Strict => None,
        CoercionId::NumericWiden => coerce_widen(value, kind),
    }
}

fn coerce_strict(value: &Value, kind: FieldKind) -> Option<Value> {
    let matches = matches!(
        (kind, value),
        (FieldKind::Bool, Value::Bool(_))
            | (FieldKind::Int8, Value::Int8(_))
            | (FieldKind::Int16, Value::Int16(_))
            | (FieldKind::Int32, Value::Int32(_))
            | (FieldKind::Int64, Value::Int64(_))
            | (FieldKind::Uint8, Value::Uint8(_))
            | (FieldKind::Uint16, Value::Uint16(_))
            | (FieldKind::Uint32, Value::Uint32(_))
            | (FieldKind::Uint64, Value::Uint64(_))
            | (FieldKind::Float64, Value::Float64(_))
            | (FieldKind::Text, Value::Text(_))
            | (FieldKind::Ulid, Value::Ulid(_))
    );
    if matches {
        return Some(value.clone());
    }

    match (kind, value) {
        (FieldKind::Enum(model), Value::Enum(value)) => enum_by_name(model, value),
        _ => None,
    }
}

fn coerce_widen(value: &Value, kind: FieldKind) -> Option<Value> {
    let int = value.as_i128()?;

    match kind {
        FieldKind::Float64 => {
            if !(-F64_SAFE_I128..=F64_SAFE_I128).contains(&int) {
                return None;
            }
            int.to_f64().and_then(Float64::try_new).map(Value::Float64)
        }
        FieldKind::Enum(model) => {
            let discriminant = int.to_i64()?;
            let variant = model.variant_by_discriminant(discriminant)?;

            Some(Value::Enum(ValueEnum::new(variant, Some(model.path))))
        }
        kind if kind.is_integer() => integer_of_kind(int, kind),
        _ => None,
    }
}

// Canonicalize an enum value onto the declared model (path filled in).
fn enum_by_name(model: &EnumModel, value: &ValueEnum) -> Option<Value> {
    if let Some(path) = &value.path
        && path != model.path
    {
        return None;
    }
    if !model.has_variant(&value.variant) {
        return None;
    }

    Some(Value::Enum(ValueEnum::new(&value.variant, Some(model.path))))
}

fn integer_of_kind(int: i128, kind: FieldKind) -> Option<Value> {
    match kind {
        FieldKind::Int8 => int.to_i8().map(Value::Int8),
        FieldKind::Int16 => int.to_i16().map(Value::Int16),
        FieldKind::Int32 => int.to_i32().map(Value::Int32),
        FieldKind::Int64 => int.to_i64().map(Value::Int64),
        FieldKind::Uint8 => int.to_u8().map(Value::Uint8),
        FieldKind::Uint16 => int.to_u16().map(Value::Uint16),
        FieldKind::Uint32 => int.to_u32().map(Value::Uint32),
        FieldKind::Uint64 => int.to_u64().map(Value::Uint64),
        _ => None,
    }
}
