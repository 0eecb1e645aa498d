use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Entity already exists: {entity_type} - {details}")]
    AlreadyExists {
        entity_type: String,
        details: String,
    },

    #[error("Entity not found: {entity_type} - {details}")]
    NotFound {
        entity_type: String,
        details: String,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl CommandError {
    pub fn user_not_found(id: impl Display) -> Self {
        CommandError::NotFound {
            entity_type: "User".to_string(),
            details: format!("id: {}", id),
        }
    }

    pub fn user_email_taken(email: &str) -> Self {
        CommandError::AlreadyExists {
            entity_type: "User".to_string(),
            details: format!("email: {}", email),
        }
    }
}
