mod condition;
mod predicate;


use crate::{
    error::BuildError,
    model::{entity::EntityModel, key::PrimaryKeyModel},
    value::{Float64, Value, ValueEnum},
};
use ulid::Ulid;

pub use condition::{KeyValueEntry, KeyValueMap};
pub use predicate::{key_predicate, key_predicate_for};

///
/// KeyInput
///
/// Caller-supplied key for a find-by-key lookup.
///
/// Scalar binds directly to a single-column primary key. Composite keys
/// are either named (`CompositeKey`, matched by member name) or positional
/// (tuples, matched by primary-key declaration order, one value per key).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyInput {
    Scalar(Value),
    Composite(CompositeKey),
    Positional(Vec<Value>),
}

///
/// CompositeKey
///
/// Ordered named key members, e.g. `{ order_id: 10, line_no: 2 }`.
/// Members not named by the entity's primary key are ignored.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompositeKey {
    members: Vec<(String, Value)>,
}

impl CompositeKey {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a named member; a repeated name replaces the earlier value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.members.iter_mut().find(|(member, _)| *member == name) {
            Some((_, slot)) => *slot = value,
            None => self.members.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<CompositeKey> for KeyInput {
    fn from(key: CompositeKey) -> Self {
        Self::Composite(key)
    }
}

macro_rules! impl_scalar_key_input {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for KeyInput {
                fn from(v: $type) -> Self {
                    Self::Scalar(v.into())
                }
            }
        )*
    };
}

impl_scalar_key_input!(
    Value, bool, i8, i16, i32, i64, u8, u16, u32, u64, Float64, String, &str, Ulid, ValueEnum,
);

impl<A, B> From<(A, B)> for KeyInput
where
    A: Into<Value>,
    B: Into<Value>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::Positional(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for KeyInput
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Positional(vec![a.into(), b.into(), c.into()])
    }
}

/// Fail with `MissingPrimaryKey` unless the entity declares a primary key.
pub fn ensure_primary_key(model: &EntityModel) -> Result<(), BuildError> {
    if model.has_primary_key() {
        Ok(())
    } else {
        Err(BuildError::missing_primary_key(model.path))
    }
}

// Resolve one raw value per primary key, in declaration order.
// No coercion happens here; only presence and null checks.
pub(crate) fn bind_key_values(
    model: &'static EntityModel,
    key: KeyInput,
) -> Result<Vec<(&'static PrimaryKeyModel, Value)>, BuildError> {
    let keys = model.primary_keys;

    match key {
        KeyInput::Scalar(value) => {
            if value.is_null() {
                return Err(BuildError::NullKey);
            }
            match keys {
                [only] => Ok(vec![(only, value)]),
                // a scalar has no members, so the first key is the one missing
                [first, ..] => Err(BuildError::missing_key_member(first.name)),
                [] => Err(BuildError::missing_primary_key(model.path)),
            }
        }
        KeyInput::Composite(composite) => keys
            .iter()
            .map(|pk| {
                let value = composite
                    .get(pk.name)
                    .ok_or_else(|| BuildError::missing_key_member(pk.name))?;
                non_null(pk, value.clone())
            })
            .collect(),
        KeyInput::Positional(values) => {
            // short tuples report the first unbound key below
            if values.len() > keys.len() {
                return Err(BuildError::KeyArityMismatch {
                    expected: keys.len(),
                    found: values.len(),
                });
            }
            let mut values = values.into_iter();
            keys.iter()
                .map(|pk| {
                    let value = values
                        .next()
                        .ok_or_else(|| BuildError::missing_key_member(pk.name))?;
                    non_null(pk, value)
                })
                .collect()
        }
    }
}

fn non_null(
    pk: &'static PrimaryKeyModel,
    value: Value,
) -> Result<(&'static PrimaryKeyModel, Value), BuildError> {
    if value.is_null() {
        Err(BuildError::null_key_value(pk.name))
    } else {
        Ok((pk, value))
    }
}
