use serde::{Deserialize, Serialize};

use crate::core::domain::entity::user::User;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserWebOutput {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserWebOutput {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeletedUserWebOutput {
    pub message: String,
    pub user: UserWebOutput,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeededUsersWebOutput {
    pub message: String,
    pub users: Vec<UserWebOutput>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthWebOutput {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorWebOutput {
    pub error: String,
}
