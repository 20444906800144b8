use std::sync::Arc;

use config::Config;
use database::UserStore;
use users::UserService;

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod users;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, config: Config) -> Self {
        Self {
            users: UserService::new(store, config.max_page_limit),
            config: Arc::new(config),
        }
    }
}
