mod fingerprint;

#[cfg(test)]
mod tests;

use crate::{model::field::FieldKind, value::Value};
use std::fmt;

///
/// Database expression tree
///
/// Immutable condition nodes handed to SQL rendering. Trees are built
/// bottom-up and never mutated; structurally identical inputs produce `==`
/// trees with identical fingerprints, which downstream caches key on.
///

///
/// DbTable
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DbTable {
    pub name: String,
    pub schema: Option<String>,
}

impl DbTable {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl fmt::Display for DbTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

///
/// DbColumn
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DbColumn {
    pub name: String,
    pub kind: FieldKind,
}

impl DbColumn {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

///
/// DbExpr
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DbExpr {
    ColumnAccess { table: DbTable, column: DbColumn },
    Parameter { value: Value, kind: FieldKind },
    Equal(Box<Self>, Box<Self>),
    And(Box<Self>, Box<Self>),
}

impl DbExpr {
    #[must_use]
    pub const fn column(table: DbTable, column: DbColumn) -> Self {
        Self::ColumnAccess { table, column }
    }

    #[must_use]
    pub const fn parameter(value: Value, kind: FieldKind) -> Self {
        Self::Parameter { value, kind }
    }

    #[must_use]
    pub fn equal(left: Self, right: Self) -> Self {
        Self::Equal(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Left-fold terms with `And`, preserving their order.
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn and_all(terms: impl IntoIterator<Item = Self>) -> Option<Self> {
        terms
            .into_iter()
            .reduce(|acc, term| Self::and(acc, term))
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::ColumnAccess { .. } | Self::Parameter { .. } => 1,
            Self::Equal(left, right) | Self::And(left, right) => {
                1 + left.node_count() + right.node_count()
            }
        }
    }

    /// Conjuncts in left-to-right order, flattening nested `And` nodes.
    #[must_use]
    pub fn conjuncts(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        collect_conjuncts(self, &mut out);
        out
    }
}

fn collect_conjuncts<'a>(expr: &'a DbExpr, out: &mut Vec<&'a DbExpr>) {
    match expr {
        DbExpr::And(left, right) => {
            collect_conjuncts(left, out);
            collect_conjuncts(right, out);
        }
        other => out.push(other),
    }
}

impl fmt::Display for DbExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnAccess { table, column } => write!(f, "{table}.{}", column.name),
            Self::Parameter { value, kind } => write!(f, "@{value}:{kind}"),
            Self::Equal(left, right) => write!(f, "{left} = {right}"),
            Self::And(left, right) => write!(f, "({left} AND {right})"),
        }
    }
}
