use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NovaError, Result};
use crate::wire::null_as_default;

/// Backend-issued profile of the signed-in user.
///
/// Claims beyond name, email and picture are opaque and kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignedInProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Avatar URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub picture: String,
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl SignedInProfile {
    /// Name to show in headers; falls back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Body of `POST /api/auth/google`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenRequest {
    pub id_token: String,
}

/// Response of the identity exchange.
///
/// `profile` is only meaningful when `ok` is true; use
/// [`AuthResponse::into_profile`] instead of reading it directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub profile: Option<SignedInProfile>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl AuthResponse {
    pub fn into_profile(self) -> Result<SignedInProfile> {
        if !self.ok {
            return Err(NovaError::auth(format!(
                "identity exchange refused: {}",
                Value::Object(self.details)
            )));
        }
        self.profile
            .ok_or_else(|| NovaError::auth("identity exchange returned no profile"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_keeps_extra_claims() {
        let profile: SignedInProfile = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png",
            "sub": "1234",
            "role": "founder"
        }))
        .unwrap();
        assert_eq!(profile.claims["sub"], "1234");

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["role"], "founder");
        assert_eq!(back["name"], "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = SignedInProfile {
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "ada@example.com");
    }

    #[test]
    fn test_refused_exchange_is_auth_error() {
        let response: AuthResponse =
            serde_json::from_value(json!({"ok": false, "error": "invalid token"})).unwrap();
        let err = response.into_profile().unwrap_err();
        assert!(err.is_auth());
        assert!(err.to_string().contains("invalid token"));
    }

    #[test]
    fn test_ok_without_profile_is_auth_error() {
        let response: AuthResponse = serde_json::from_value(json!({"ok": true})).unwrap();
        assert!(response.into_profile().unwrap_err().is_auth());
    }

    #[test]
    fn test_ok_exchange_yields_profile() {
        let response: AuthResponse = serde_json::from_value(json!({
            "ok": true,
            "profile": {"name": "Ada", "email": "ada@example.com", "picture": ""}
        }))
        .unwrap();
        assert_eq!(response.into_profile().unwrap().name, "Ada");
    }

    #[test]
    fn test_null_profile_fields_read_as_empty() {
        let response: AuthResponse = serde_json::from_value(json!({
            "ok": true,
            "profile": {"name": null, "email": "ada@example.com", "picture": null, "sub": "1"}
        }))
        .unwrap();
        let profile = response.into_profile().unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.picture, "");
        assert_eq!(profile.display_name(), "ada@example.com");
        assert_eq!(profile.claims["sub"], "1");
    }
}
