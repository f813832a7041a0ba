//! Tri-state wrapper for partially-updatable fields.
//!
//! A JSON update body can omit a field, send it as `null`, or send a value.
//! `Option<T>` collapses the first two; [`Patch`] keeps them apart so a
//! nullable column can be cleared without confusing "clear" with "leave
//! alone".
//!
//! Fields must carry `#[serde(default)]` so an omitted key becomes
//! [`Patch::Absent`]:
//!
//! ```
//! use roster_core::patch::Patch;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct UpdatePhone {
//!     #[serde(default)]
//!     phone: Patch<String>,
//! }
//!
//! let body: UpdatePhone = serde_json::from_str("{}").unwrap();
//! assert_eq!(body.phone, Patch::Absent);
//! ```

use serde::{Deserialize, Deserializer};

/// One updatable attribute of a partial-update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key omitted: no change requested.
    Absent,
    /// Key present with `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    /// The supplied value, if any. `Absent` and `Null` both yield `None`.
    ///
    /// This is the reading used for non-nullable columns, where a `null`
    /// preserves the stored value.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// The change requested for a nullable column.
    ///
    /// `None` means leave the column alone; `Some(None)` means set it to
    /// `NULL`; `Some(Some(v))` means overwrite with `v`.
    pub fn nullable_change(&self) -> Option<Option<&T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; omission goes through Default.
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}
