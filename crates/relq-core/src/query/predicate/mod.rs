mod ast;
mod eval;


pub use ast::{EqPredicate, KeyPredicate, Predicate};
pub use eval::{FieldPresence, Row};
