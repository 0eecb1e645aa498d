pub mod config;
pub mod init;
pub mod observability;
pub mod store;
pub mod web;
