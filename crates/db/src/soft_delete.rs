//! The one definition of "logically removed".
//!
//! Every default read composes [`NOT_DELETED`] through these helpers
//! instead of spelling the filter out by hand.

/// Predicate that hides soft-deleted rows.
pub const NOT_DELETED: &str = "is_deleted = FALSE";

/// `SELECT <columns> FROM <table> WHERE is_deleted = FALSE`.
///
/// Callers append further conditions with `AND`.
pub fn select_live(columns: &str, table: &str) -> String {
    format!("SELECT {columns} FROM {table} WHERE {NOT_DELETED}")
}

/// Soft-delete by `id` (`$1`).
///
/// There is no `is_deleted` guard: repeating the statement is a no-op apart
/// from the `updated_at` trigger, and `rows_affected() == 0` means the row
/// never existed.
pub fn mark_deleted(table: &str) -> String {
    format!("UPDATE {table} SET is_deleted = TRUE WHERE id = $1")
}
