//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//!
//! Read-only fields (`id`, event `created_at`) are absent from the DTOs, so
//! client-supplied values for them are silently ignored on input.

pub mod category;
pub mod event;
pub mod place;
pub mod reminder;
pub mod user;
