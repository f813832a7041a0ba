//! Domain core for the roster service.
//!
//! Pure logic only: identifiers, the error taxonomy, field validation,
//! pagination maths and the partial-update wrapper. Nothing in this crate
//! touches the database or the network.

pub mod context;
pub mod error;
pub mod pagination;
pub mod patch;
pub mod search;
pub mod types;
pub mod user;
pub mod validation;
