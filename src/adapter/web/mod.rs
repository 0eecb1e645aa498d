pub mod app_state;
pub mod create_router;
pub mod dto;
pub mod handler;
pub mod presenter;
pub mod route;
