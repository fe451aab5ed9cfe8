use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `GET /user/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    /// Role names in server order (e.g. `USER`, `MODERATOR`, `ADMIN`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Row of the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserSummary {
    /// Highest role held, used as the "current role" when changing roles.
    pub fn primary_role(&self) -> &str {
        ["ROOT", "ADMIN", "MODERATOR", "USER"]
            .into_iter()
            .find(|candidate| self.roles.iter().any(|r| r == candidate))
            .unwrap_or("USER")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpRequest {
    pub const USERNAME_LEN: (usize, usize) = (4, 15);
    pub const PASSWORD_LEN: (usize, usize) = (6, 20);
    pub const EMAIL_MAX_LEN: usize = 40;

    /// First validation problem, if any, in form field order.
    pub fn validate(&self) -> Result<(), String> {
        let username = self.username.trim();
        let (min, max) = Self::USERNAME_LEN;
        if !(min..=max).contains(&username.chars().count()) {
            return Err(format!("Username must be between {min} and {max} characters."));
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Please enter a valid email.".to_string());
        }
        if email.len() > Self::EMAIL_MAX_LEN {
            return Err(format!(
                "Email is too long (Maximum {} characters allowed).",
                Self::EMAIL_MAX_LEN
            ));
        }

        let (min, max) = Self::PASSWORD_LEN;
        if !(min..=max).contains(&self.password.chars().count()) {
            return Err(format!("Password must be between {min} and {max} characters."));
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    pub user_id: String,
    pub current_role: String,
    pub new_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignUpRequest {
        SignUpRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn user_deserializes_from_camel_case() {
        let user: User =
            serde_json::from_str(r#"{"id":"1","username":"bob","roles":["USER","ADMIN"]}"#)
                .unwrap();
        assert_eq!(user.username, "bob");
        assert!(user.has_role("ADMIN"));
        assert!(!user.has_role("MODERATOR"));
    }

    #[test]
    fn user_without_roles_has_none() {
        let user: User = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert!(user.roles.is_empty());
        assert!(!user.has_role("USER"));
    }

    #[test]
    fn primary_role_picks_highest() {
        let summary = UserSummary {
            id: "1".to_string(),
            username: "m".to_string(),
            email: None,
            roles: vec!["USER".to_string(), "MODERATOR".to_string()],
        };
        assert_eq!(summary.primary_role(), "MODERATOR");
    }

    #[test]
    fn login_request_uses_server_field_names() {
        let json = serde_json::to_string(&LoginRequest {
            username_or_email: "bob".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();
        assert!(json.contains("\"usernameOrEmail\":\"bob\""));
    }

    #[test]
    fn valid_signup_passes() {
        assert!(signup().validate().is_ok());
    }

    #[test]
    fn signup_rejects_short_username() {
        let request = SignUpRequest {
            username: "al".to_string(),
            ..signup()
        };
        assert!(request.validate().unwrap_err().contains("Username"));
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let request = SignUpRequest {
            confirm_password: "other12".to_string(),
            ..signup()
        };
        assert_eq!(request.validate().unwrap_err(), "Passwords do not match.");
    }

    #[test]
    fn signup_rejects_bad_email() {
        let request = SignUpRequest {
            email: "not-an-email".to_string(),
            ..signup()
        };
        assert!(request.validate().unwrap_err().contains("email"));
    }
}
