mod handler;
mod model;

pub use handler::{create_user, delete_user, search_user, update_user};
pub use model::{EnvelopeRequest, EnvelopeResponse, UserData};
