pub mod command;
pub mod entity;
pub mod query;
