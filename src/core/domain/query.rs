use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Entity not found: {entity_type} - {details}")]
    NotFound {
        entity_type: String,
        details: String,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl QueryError {
    pub fn user_not_found(id: impl Display) -> Self {
        QueryError::NotFound {
            entity_type: "User".to_string(),
            details: format!("id: {}", id),
        }
    }
}
