//! Movie catalog: REST backend for movies and the humans in them.

pub mod config;
pub mod error;
pub mod extractors;
pub mod migration;
pub mod models;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::{apply_schema, reset_schema};
pub use models::{Human, HumanInMovie, Movie};
pub use response::{error_body, success_created, success_keyed, success_many};
pub use state::AppState;
pub use store::{connect, connect_in_memory};
pub use routes::{app, common_routes, resource_routes};
pub use service::{CastingService, HumanService, MovieService, RequestValidator};
