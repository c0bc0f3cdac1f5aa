use serde::{Deserialize, Deserializer, Serialize};

/// Cursor pagination block of list responses.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub has_more: bool,
    /// Opaque server token. Pass back unchanged as `cursor`.
    pub next_cursor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
}

/// Response of the markdown create endpoints. Only `id` is relied upon.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct CreatedResource {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

/// Single-resource responses arrive either wrapped (`{"issue": {...}}`) or bare.
pub trait Envelope: serde::de::DeserializeOwned {
    type Inner: serde::de::DeserializeOwned;

    fn into_inner(self) -> Option<Self::Inner>;
}

/// Reads `null` as the type's default, matching a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
