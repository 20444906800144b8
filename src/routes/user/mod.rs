mod handler;
mod model;

pub use handler::{create_user, delete_user, list_users, read_user, update_user};
pub use model::{CreateUserRequest, ListUsersQuery, ListUsersResponse, UpdateUserRequest};
