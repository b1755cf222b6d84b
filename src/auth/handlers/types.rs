/**
 * Authentication Handler Types
 *
 * Request/response types for the auth endpoints, plus the small field
 * helpers shared with the profile handlers.
 */

use serde::{Deserialize, Serialize};

use crate::users::db::User;

/// Registration request body.
///
/// All three fields are required; they are `Option` so presence is checked
/// by the handler, which owns the error message.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for register and login: confirmation, bearer token, and the
/// public slice of the user record.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// Public user fields. The password hash never leaves the store layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile_picture: String,
    pub bio: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
            bio: user.bio.clone(),
        }
    }
}

/// Treat an absent field and a blank field the same way: not provided.
/// Returns the trimmed value otherwise.
pub(crate) fn provided(field: &Option<String>) -> Option<&str> {
    match field.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(value) => Some(value),
    }
}

/// Shape check matching the address pattern the user schema enforces:
/// something before the `@`, and a domain containing an interior dot.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_trims_and_rejects_blank() {
        assert_eq!(provided(&Some("  alice  ".to_string())), Some("alice"));
        assert_eq!(provided(&Some("   ".to_string())), None);
        assert_eq!(provided(&Some(String::new())), None);
        assert_eq!(provided(&None), None);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));

        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
    }
}
