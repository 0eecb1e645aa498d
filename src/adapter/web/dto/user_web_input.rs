use serde::{Deserialize, Serialize};

use crate::core::domain::entity::user::user::UnvalidatedUserInput;

impl From<UserWebInput> for UnvalidatedUserInput {
    fn from(value: UserWebInput) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

/// Body of `POST /api/users` and `PUT /api/users/:id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserWebInput {
    pub name: String,
    pub email: String,
}
