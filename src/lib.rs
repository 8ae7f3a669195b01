pub mod categories;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod geolocation;
pub mod handlers;
pub mod html;
pub mod map;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod utils;

use sea_orm::DatabaseConnection;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub sessions: SessionStore,
}
