//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus create DTOs where inserts need one.

pub mod project;
pub mod usage_event;
pub mod user;
