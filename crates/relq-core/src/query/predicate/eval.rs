use crate::{
    query::predicate::ast::{EqPredicate, Predicate},
    value::{CoercionId, Value},
};

///
/// FieldPresence
///
/// Result of reading a member from a row during predicate evaluation.
/// Distinguishes a missing member from a present member holding `Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Member exists and has a value (including `Value::Null`).
    Present(Value),
    /// Member is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that can expose members by name.
/// This decouples predicate evaluation from concrete entity types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// Evaluate a predicate against a single row.
///
/// Pure runtime evaluation: no schema access and no validation.
/// A missing member, a `Null` member, or an undefined comparison
/// evaluates to `false`.
///
#[must_use]
pub(crate) fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Eq(eq) => eval_eq(row, eq),
    }
}

fn eval_eq<R: Row + ?Sized>(row: &R, eq: &EqPredicate) -> bool {
    let FieldPresence::Present(actual) = row.field(&eq.field) else {
        return false;
    };
    if actual.is_null() {
        return false;
    }

    compare_eq(&actual, &eq.value, eq.coercion)
}

// Equality under the coercion the predicate was built with.
fn compare_eq(actual: &Value, expected: &Value, coercion: CoercionId) -> bool {
    if actual == expected {
        return true;
    }

    match (actual, expected) {
        // loose enum values match on variant name alone
        (Value::Enum(left), Value::Enum(right)) if left.path.is_none() || right.path.is_none() => {
            left.variant == right.variant
        }
        _ => match coercion {
            CoercionId::Strict => false,
            CoercionId::NumericWiden => match (actual.as_i128(), expected.as_i128()) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            },
        },
    }
}
