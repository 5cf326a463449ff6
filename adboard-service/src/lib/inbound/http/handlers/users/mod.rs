use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;

pub mod appoint_admin;
pub mod ban_user;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod unban_user;
pub mod update_user;

/// User fields exposed over the API; the password hash never leaves the
/// domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub is_admin: bool,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            surname: user.surname.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_admin: user.is_admin,
            is_banned: user.is_banned,
            created_at: user.created_at,
        }
    }
}
