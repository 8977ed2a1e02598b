//! Bodies for the auth routes.

use serde::Deserialize;
use validator::Validate;

use vows_core::constants::MIN_PASSWORD_LENGTH;
use vows_core::util::patch::nullable;
use vows_db::model::user::AdminUserChanges;

#[derive(Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub current_password: String,
    #[validate(length(min = MIN_PASSWORD_LENGTH))]
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub display_name: Option<Option<String>>,
}

impl ProfileInput {
    #[must_use]
    pub fn into_changes(self) -> AdminUserChanges {
        AdminUserChanges {
            username: self.username,
            email: self.email,
            display_name: self.display_name,
        }
    }
}
