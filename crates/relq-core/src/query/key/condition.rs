use crate::{
    db::expr::{DbColumn, DbExpr, DbTable},
    error::BuildError,
    model::{entity::EntityModel, key::PrimaryKeyModel},
    value::Value,
};
use derive_more::{Deref, IntoIterator};
use tracing::{debug, trace};

///
/// KeyValueEntry
/// One primary key and the value the caller filled in for it.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyValueEntry {
    pub key: &'static PrimaryKeyModel,
    pub value: Option<Value>,
}

///
/// KeyValueMap
///
/// Ordered, fillable mapping from primary keys to values.
///
/// Created empty from an entity model, filled by the caller, then consumed
/// once by `compile`. Entry order is primary-key declaration order and
/// never changes.
///

#[derive(Clone, Debug, Deref, Eq, Hash, IntoIterator, PartialEq)]
pub struct KeyValueMap {
    #[into_iterator(owned, ref)]
    entries: Vec<KeyValueEntry>,
}

impl KeyValueMap {
    /// One unset entry per primary key, in declaration order.
    ///
    /// An entity without a primary key yields an empty map; callers are
    /// expected to have checked `ensure_primary_key` first.
    #[must_use]
    pub fn template(model: &'static EntityModel) -> Self {
        let entries = model
            .primary_keys
            .iter()
            .map(|key| KeyValueEntry { key, value: None })
            .collect();

        Self { entries }
    }

    /// Fill the entry for the named key.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), BuildError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.key.name == name)
            .ok_or_else(|| BuildError::missing_key_member(name))?;
        entry.value = Some(value.into());

        Ok(())
    }

    /// Fill the entry at a primary-key position.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) -> Result<(), BuildError> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| BuildError::missing_key_member(format!("#{index}")))?;
        entry.value = Some(value.into());

        Ok(())
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, BuildError> {
        self.set(name, value)?;

        Ok(self)
    }

    /// True once every entry holds a non-null value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.value.as_ref().is_some_and(|value| !value.is_null()))
    }

    /// Compile into a conjunctive equality condition over `table`.
    ///
    /// Every entry is checked before any node is built, so a `NullKeyValue`
    /// failure never leaves a partial tree behind. An empty map compiles to
    /// `None`: a vacuous condition the caller must not use as a key filter.
    pub fn compile(self, table: &DbTable) -> Result<Option<DbExpr>, BuildError> {
        if let Some(unset) = self
            .entries
            .iter()
            .find(|entry| entry.value.as_ref().is_none_or(Value::is_null))
        {
            return Err(BuildError::null_key_value(unset.key.name));
        }

        let key_count = self.entries.len();
        let condition = DbExpr::and_all(self.entries.into_iter().filter_map(|entry| {
            let value = entry.value?;
            trace!(key = entry.key.name, column = entry.key.column, "key condition term");

            Some(DbExpr::equal(
                DbExpr::column(
                    table.clone(),
                    DbColumn::new(entry.key.column, entry.key.kind),
                ),
                DbExpr::parameter(value, entry.key.kind),
            ))
        }));

        debug!(table = %table, keys = key_count, "compiled key condition");

        Ok(condition)
    }
}
