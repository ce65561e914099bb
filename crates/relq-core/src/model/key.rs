use crate::model::field::FieldKind;

///
/// PrimaryKeyModel
///
/// One member participating in an entity's identity.
/// Identity is the member name; two descriptors with the same name on the
/// same entity never occur.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PrimaryKeyModel {
    /// Member name as used in predicates and composite key inputs.
    pub name: &'static str,
    /// Declared member type.
    pub kind: FieldKind,
    /// Backing column.
    pub column: &'static str,
}

impl PrimaryKeyModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, column: &'static str) -> Self {
        Self { name, kind, column }
    }
}
