use crate::{
    config::BuildConfig,
    error::BuildError,
    model::entity::EntityModel,
    query::{
        key::{KeyInput, bind_key_values, ensure_primary_key},
        predicate::{KeyPredicate, Predicate},
    },
    traits::EntityKind,
    value::coerce,
};
use tracing::debug;

///
/// Build the find-by-key predicate for `model`.
///
/// Checks run in this order and fail fast:
/// - the entity declares a primary key
/// - the key itself is not null
/// - every primary key resolves to a non-null member of the key input
/// - every resolved value coerces to its declared kind
///
/// The result compares each primary-key member with its value, AND-ed left
/// to right in primary-key declaration order.
///
pub fn key_predicate(
    model: &'static EntityModel,
    key: impl Into<KeyInput>,
    config: &BuildConfig,
) -> Result<KeyPredicate, BuildError> {
    ensure_primary_key(model)?;

    let coercion = config.key_coercion;
    let terms = bind_key_values(model, key.into())?
        .into_iter()
        .map(|(pk, value)| {
            let wrapped = coerce(&value, pk.kind, coercion).ok_or_else(|| {
                BuildError::IncompatibleKeyValue {
                    key: pk.name.to_string(),
                    expected: pk.kind,
                    found: value.clone(),
                }
            })?;

            Ok(Predicate::eq(pk.name, wrapped, coercion))
        })
        .collect::<Result<Vec<_>, BuildError>>()?;

    let term_count = terms.len();
    let predicate =
        Predicate::fold_and(terms).ok_or_else(|| BuildError::missing_primary_key(model.path))?;

    debug!(
        entity = model.path,
        keys = term_count,
        "built key predicate"
    );

    Ok(KeyPredicate {
        entity: model,
        parameter: config.row_parameter.clone(),
        predicate,
    })
}

/// Typed entry point: `key_predicate` over `E::MODEL`.
pub fn key_predicate_for<E: EntityKind>(
    key: impl Into<KeyInput>,
    config: &BuildConfig,
) -> Result<KeyPredicate, BuildError> {
    key_predicate(E::MODEL, key, config)
}
