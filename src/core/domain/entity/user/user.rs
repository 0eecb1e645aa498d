use thiserror::Error;

use crate::core::domain::entity::user::NewUser;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
}

#[derive(Debug)]
pub struct UnvalidatedUserInput {
    pub name: String,
    pub email: String,
}

impl TryFrom<UnvalidatedUserInput> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: UnvalidatedUserInput) -> Result<Self, Self::Error> {
        let name = value.name.trim();
        if name.is_empty() {
            return Err(UserValidationError::BlankField { field: "name" });
        }
        let email = value.email.trim();
        if email.is_empty() {
            return Err(UserValidationError::BlankField { field: "email" });
        }
        Ok(NewUser::new(name, email))
    }
}
