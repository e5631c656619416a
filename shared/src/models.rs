//! Domain value types
//!
//! `FavoriteBook` is stored as an encoded JSON string in the user record and
//! exposed to clients as a structured object. `decode(encode(x)) == x` holds
//! for every well-formed value.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's favorite book, as surfaced on the profile page.
///
/// The optional `author_name` list mirrors the shape returned by the
/// Open Library search API, which the client uses for book lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FavoriteBook {
    #[validate(length(min = 1, message = "String must contain at least 1 character(s)"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<Vec<String>>,
}

impl FavoriteBook {
    /// Serialize to the encoded string form persisted by the user store.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the persisted string form back into a structured value.
    pub fn decode(encoded: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(encoded)
    }
}
