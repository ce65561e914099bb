//! Runtime entity metadata.
//!
//! Types in `model` are the read-only descriptions the builders consume:
//! which members an entity has, which of them form its primary key (in
//! canonical order), and which column backs each key member.
//!
//! In general:
//! - mapping configuration decides *what exists*
//! - `model` is *what the builders read*
pub mod entity;
pub mod field;
pub mod key;
