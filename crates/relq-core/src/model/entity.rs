use crate::model::{
    field::{EntityFieldModel, FieldKind},
    key::PrimaryKeyModel,
};

///
/// EntityModel
/// Immutable runtime model for one mapped entity.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name.
    pub entity_name: &'static str,
    /// Backing table name.
    pub table: &'static str,
    /// Primary key members. Order is canonical for every key-derived structure.
    pub primary_keys: &'static [PrimaryKeyModel],
    /// Non-key members addressable from join conditions.
    pub fields: &'static [EntityFieldModel],
}

impl EntityModel {
    #[must_use]
    pub const fn has_primary_key(&self) -> bool {
        !self.primary_keys.is_empty()
    }

    /// Look up a primary key member by name.
    #[must_use]
    pub fn primary_key(&self, name: &str) -> Option<&'static PrimaryKeyModel> {
        self.primary_keys.iter().find(|key| key.name == name)
    }

    /// Declared kind of any member, key or not.
    #[must_use]
    pub fn member_kind(&self, name: &str) -> Option<FieldKind> {
        self.primary_key(name).map(|key| key.kind).or_else(|| {
            self.fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| field.kind)
        })
    }
}
