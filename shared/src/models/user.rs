//! User Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// User profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: String,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
    pub updated_at: Option<i64>,
}

/// Update user profile payload
///
/// Full replacement: every field is the desired state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoUpdate {
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: String,
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
}

impl From<&UserInfo> for UserInfoUpdate {
    fn from(user: &UserInfo) -> Self {
        Self {
            name: user.name.clone(),
            surname: user.surname.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            birth_date: user.birth_date.clone(),
            gender: user.gender,
        }
    }
}
