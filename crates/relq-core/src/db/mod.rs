//! Backend-agnostic database expression layer consumed by SQL rendering.
pub mod expr;
