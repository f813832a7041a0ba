//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` view returned to API clients
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Patch` fields) for partial updates

pub mod context;
pub mod user;
