pub mod health;
pub mod seed;
pub mod users;
