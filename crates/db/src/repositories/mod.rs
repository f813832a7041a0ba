//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&mut PgConnection` as the first argument, so the same call
//! works on a pooled connection or inside a transaction (`&mut *tx`).

pub mod context_repo;
pub mod user_context_repo;
pub mod user_repo;

pub use context_repo::ContextRepo;
pub use user_context_repo::UserContextRepo;
pub use user_repo::UserRepo;
