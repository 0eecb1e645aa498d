pub mod seed;
pub mod users;
