pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod seed_users;
pub mod update_user;

#[cfg(test)]
pub(crate) mod test_support;
