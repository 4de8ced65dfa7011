//! User profile records.

use serde::{Deserialize, Serialize};

/// The authenticated session's profile.
///
/// Fetched on screen mount and replaced wholesale on save; the server copy
/// is the source of truth for any normalization it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend-assigned identifier, fixed per session.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address; existing records may not have one yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
}

/// Registration payload posted to the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Account password, stored as the backend receives it.
    pub password: String,
    /// Contact phone number.
    pub phone: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_without_address_roundtrips() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":"u1","name":"Lan","email":"lan@example.com","phone":"0900000000","avatar":""}"#,
        )
        .unwrap();
        assert!(profile.address.is_none());

        // A missing address must stay missing on the wire, not become null.
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("address").is_none());
    }
}
