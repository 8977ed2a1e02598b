//! Serde helpers for partial-update payloads.
//!
//! A patch field on a nullable column has three states: absent (leave the
//! column alone), `null` (clear it), or a value. Model that as
//! `Option<Option<T>>` and annotate the field with
//! `#[serde(default, deserialize_with = "vows_core::util::patch::nullable")]`.

use serde::{Deserialize, Deserializer};

/// ## Summary
/// Deserializes a present field into `Some(inner)`, where `inner` is `None`
/// for an explicit JSON `null`. Absent fields fall back to `Default` (`None`).
///
/// ## Errors
/// Propagates the inner deserializer error.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
