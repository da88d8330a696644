//! Serde helpers shared by the record types.

use serde::{Deserialize, Deserializer};

/// Deserializes a list that the server may send as `null`.
///
/// Use together with `#[serde(default)]` so an absent field also yields an
/// empty list.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
