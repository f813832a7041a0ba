//! Entity services: one unit of work per operation.
//!
//! Writes run inside a transaction and reads on a single pooled
//! connection. A transaction dropped before `commit` rolls back, so every
//! early return through `?` leaves the database untouched. Database errors
//! leave this layer already classified as [`CoreError`] variants.
//!
//! [`CoreError`]: roster_core::error::CoreError

pub mod context_service;
pub mod user_service;

pub use context_service::ContextService;
pub use user_service::UserService;
