//! Core query-expression construction for relq: entity models, key
//! predicates, key conditions, join plans, and the database expression tree
//! they lower into.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod query;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Canonical usage shown when a join specification has the wrong shape.
pub const JOIN_USAGE_EXAMPLE: &str =
    "join::<User, City>(|user, city| [JoinType::Left, user.city_id == city.id])";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No builders, errors, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::expr::{DbColumn, DbExpr, DbTable},
        model::{entity::EntityModel, field::FieldKind, key::PrimaryKeyModel},
        query::{join::JoinType, key::CompositeKey, predicate::Predicate},
        traits::EntityKind,
        value::Value,
    };
}
