use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo::User;

/// Signup body. Fields are optional at the type level so that missing or
/// null values reach the validation layer instead of a framework reject.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

/// Public projection of a user; password material is structurally absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ana".into(),
            last_name: "Lee".into(),
            email_address: "ana@x.com".into(),
            password_hash: "$argon2id$fake".into(),
        }
    }

    #[test]
    fn profile_uses_camel_case_keys() {
        let json = serde_json::to_string(&UserProfile::from(sample_user())).unwrap();
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(json.contains("emailAddress"));
    }

    #[test]
    fn profile_never_contains_password_material() {
        let json = serde_json::to_string(&UserProfile::from(sample_user())).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn signup_body_tolerates_missing_fields() {
        let body: CreateUserRequest = serde_json::from_str(r#"{"firstName":"Ana"}"#).unwrap();
        assert_eq!(body.first_name.as_deref(), Some("Ana"));
        assert!(body.last_name.is_none());
        assert!(body.email_address.is_none());
        assert!(body.password.is_none());
    }
}
