use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::user::{NewUser, User, UserCommand, UserQuery};
use crate::core::domain::query::QueryError;

/// Users kept in insertion order. Ids come from a counter that never goes
/// backwards, so a deleted id is not handed out again.
#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: i32,
}

impl UserTable {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .iter()
            .any(|user| user.email == email && Some(user.id) != except)
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    fn push(&mut self, user: NewUser) -> Result<User, CommandError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| CommandError::DatabaseError("user id space exhausted".to_string()))?;
        let user = user.with_id(id);
        self.users.push(user.clone());
        Ok(user)
    }
}

pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Builds a store holding `users` with ids `1..`. Later duplicates of an
    /// email are dropped.
    #[cfg(test)]
    pub fn with_users(users: Vec<NewUser>) -> Self {
        let mut repository = Self::new();
        {
            let table = repository.table.get_mut();
            for user in users {
                if !table.email_taken(&user.email, None) && table.push(user).is_err() {
                    break;
                }
            }
        }
        repository
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserCommand for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, CommandError> {
        let mut table = self.table.write().await;
        if table.email_taken(&user.email, None) {
            return Err(CommandError::user_email_taken(&user.email));
        }
        table.push(user)
    }

    async fn update(&self, id: i32, user: NewUser) -> Result<User, CommandError> {
        let mut table = self.table.write().await;
        let index = table
            .position(id)
            .ok_or_else(|| CommandError::user_not_found(id))?;
        if table.email_taken(&user.email, Some(id)) {
            return Err(CommandError::user_email_taken(&user.email));
        }
        let updated = user.with_id(id);
        table.users[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<User, CommandError> {
        let mut table = self.table.write().await;
        let index = table
            .position(id)
            .ok_or_else(|| CommandError::user_not_found(id))?;
        Ok(table.users.remove(index))
    }

    async fn insert_missing(&self, users: Vec<NewUser>) -> Result<Vec<User>, CommandError> {
        let mut table = self.table.write().await;
        let mut inserted = Vec::new();
        for user in users {
            if table.email_taken(&user.email, None) {
                continue;
            }
            inserted.push(table.push(user)?);
        }
        Ok(inserted)
    }
}

#[async_trait]
impl UserQuery for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, QueryError> {
        Ok(self.table.read().await.users.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<User, QueryError> {
        self.table
            .read()
            .await
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| QueryError::user_not_found(id))
    }
}
