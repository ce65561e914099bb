use crate::{
    model::entity::EntityModel,
    query::predicate::eval::{Row, eval},
    value::{CoercionId, Value},
};
use std::{fmt, ops::BitAnd};

///
/// Predicate AST
///
/// Backend-agnostic predicate over one entity row. Members are addressed by
/// name; binding to columns and tables happens in later stages.
///

///
/// EqPredicate
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EqPredicate {
    pub field: String,
    pub value: Value,
    pub coercion: CoercionId,
}

impl EqPredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, value: Value, coercion: CoercionId) -> Self {
        Self {
            field: field.into(),
            value,
            coercion,
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Eq(EqPredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value, coercion: CoercionId) -> Self {
        Self::Eq(EqPredicate::new(field, value, coercion))
    }

    /// Left-fold terms with AND, preserving order: `[a, b, c]` becomes
    /// `And([And([a, b]), c])`. A single term is returned unwrapped.
    #[must_use]
    pub fn fold_and(terms: impl IntoIterator<Item = Self>) -> Option<Self> {
        terms
            .into_iter()
            .reduce(|acc, term| Self::And(vec![acc, term]))
    }

    /// Equality terms in evaluation order.
    #[must_use]
    pub fn eq_terms(&self) -> Vec<&EqPredicate> {
        let mut out = Vec::new();
        collect_eq_terms(self, &mut out);
        out
    }
}

fn collect_eq_terms<'a>(predicate: &'a Predicate, out: &mut Vec<&'a EqPredicate>) {
    match predicate {
        Predicate::True | Predicate::False => {}
        Predicate::And(children) => {
            for child in children {
                collect_eq_terms(child, out);
            }
        }
        Predicate::Eq(eq) => out.push(eq),
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

///
/// KeyPredicate
///
/// Reusable `entity -> bool` predicate for find-by-key queries.
/// Holds no external references beyond the static entity model.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPredicate {
    pub entity: &'static EntityModel,
    pub parameter: String,
    pub predicate: Predicate,
}

impl KeyPredicate {
    /// Evaluate against one row of the entity.
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        eval(row, &self.predicate)
    }
}

impl fmt::Display for KeyPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => ", self.parameter)?;
        write_predicate(f, &self.parameter, &self.predicate)
    }
}

fn write_predicate(f: &mut fmt::Formatter<'_>, param: &str, predicate: &Predicate) -> fmt::Result {
    match predicate {
        Predicate::True => write!(f, "true"),
        Predicate::False => write!(f, "false"),
        Predicate::Eq(eq) => write!(f, "{param}.{} == {}", eq.field, eq.value),
        Predicate::And(children) => {
            write!(f, "(")?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, " && ")?;
                }
                write_predicate(f, param, child)?;
            }
            write!(f, ")")
        }
    }
}
