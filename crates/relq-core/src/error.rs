use crate::{model::field::FieldKind, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

///
/// BuildError
///
/// Caller/input errors raised while constructing key predicates, key
/// conditions, or join plans. None of these are transient; every check runs
/// eagerly and no partial result accompanies an error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BuildError {
    #[error("entity type '{entity}' does not define a primary key")]
    MissingPrimaryKey { entity: String },

    #[error("key value could not be null")]
    NullKey,

    #[error("primary key '{key}' could not be null")]
    NullKeyValue { key: String },

    #[error("key input does not define a member for key '{key}'")]
    MissingKeyMember { key: String },

    #[error("key input has {found} positional values; the entity declares {expected} primary keys")]
    KeyArityMismatch { expected: usize, found: usize },

    #[error("value {found:?} is incompatible with primary key '{key}' of kind {expected}")]
    IncompatibleKeyValue {
        key: String,
        expected: FieldKind,
        found: Value,
    },

    #[error("invalid join specification '{spec}'. the correct usage is like: {usage}")]
    InvalidJoinSpecification { spec: String, usage: &'static str },

    #[error("invalid join specification '{spec}': expected {expected} elements, found {found}")]
    JoinArityMismatch {
        spec: String,
        expected: usize,
        found: usize,
    },

    #[error("unsupported join type '{expr}'; expected a constant JoinType")]
    UnsupportedJoinType { expr: String },

    #[error("unsupported join condition '{expr}'; a join condition must be boolean")]
    InvalidJoinCondition { expr: String },

    #[error("join step {step} references parameter '{parameter}' before it is joined")]
    ParameterOutOfScope { step: usize, parameter: String },
}

impl BuildError {
    /// Component that raised this error.
    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::MissingPrimaryKey { .. }
            | Self::NullKey
            | Self::MissingKeyMember { .. }
            | Self::KeyArityMismatch { .. }
            | Self::IncompatibleKeyValue { .. } => ErrorOrigin::KeyPredicate,
            Self::NullKeyValue { .. } => ErrorOrigin::KeyCondition,
            Self::InvalidJoinSpecification { .. }
            | Self::JoinArityMismatch { .. }
            | Self::UnsupportedJoinType { .. }
            | Self::InvalidJoinCondition { .. }
            | Self::ParameterOutOfScope { .. } => ErrorOrigin::Join,
        }
    }

    /// Name of the offending primary key, when the error concerns one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NullKeyValue { key }
            | Self::MissingKeyMember { key }
            | Self::IncompatibleKeyValue { key, .. } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn missing_primary_key(entity: impl Into<String>) -> Self {
        Self::MissingPrimaryKey {
            entity: entity.into(),
        }
    }

    pub(crate) fn null_key_value(key: impl Into<String>) -> Self {
        Self::NullKeyValue { key: key.into() }
    }

    pub(crate) fn missing_key_member(key: impl Into<String>) -> Self {
        Self::MissingKeyMember { key: key.into() }
    }
}

///
/// ErrorOrigin
///
/// Builder that produced a `BuildError`. `NullKeyValue` is shared between
/// the key predicate and key condition builders and reports the latter.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorOrigin {
    KeyPredicate,
    KeyCondition,
    Join,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::KeyPredicate => "key_predicate",
            Self::KeyCondition => "key_condition",
            Self::Join => "join",
        };
        write!(f, "{label}")
    }
}
