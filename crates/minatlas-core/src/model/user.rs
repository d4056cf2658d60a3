use serde::{Deserialize, Serialize};

use crate::model::ids::{RoleId, UserId};
use crate::store::Record;

/// A registered account.
///
/// `username` is unique case-sensitively; `password_hash` is opaque to this
/// crate and produced by a [`crate::users::PasswordHasher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID")]
    pub id: UserId,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "PasswordHash")]
    pub password_hash: String,
    #[serde(rename = "RoleID")]
    pub role_id: RoleId,
    #[serde(rename = "Email")]
    pub email: String,
}

impl User {
    #[must_use]
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role_id: RoleId,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            role_id,
            email: email.into(),
        }
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const HEADERS: &'static [&'static str] =
        &["UserID", "Username", "PasswordHash", "RoleID", "Email"];

    fn key(&self) -> u32 {
        self.id.get()
    }
}
