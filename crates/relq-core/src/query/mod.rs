//! Query-expression construction.
//!
//! - `key`: find-by-key predicates and key conditions over a table
//! - `join`: join specification resolution into ordered join steps
//! - `expr`: typed object-expression input consumed by `join`
//! - `predicate`: backend-agnostic entity predicates
pub mod expr;
pub mod join;
pub mod key;
pub mod predicate;
