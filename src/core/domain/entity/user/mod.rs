pub mod user;

use async_trait::async_trait;

use crate::core::domain::command::CommandError;
use crate::core::domain::query::QueryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// A user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Write side of the user store. Implementations own email uniqueness.
#[async_trait]
pub trait UserCommand: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, CommandError>;

    async fn update(&self, id: i32, user: NewUser) -> Result<User, CommandError>;

    async fn delete(&self, id: i32) -> Result<User, CommandError>;

    /// Inserts every user whose email is not stored yet and returns only the
    /// rows that were actually added.
    async fn insert_missing(&self, users: Vec<NewUser>) -> Result<Vec<User>, CommandError>;
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, QueryError>;

    async fn find_by_id(&self, id: i32) -> Result<User, QueryError>;
}
