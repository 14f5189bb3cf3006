//! Infrastructure layer: Postgres persistence and process configuration.

pub mod config;
pub mod postgres;

pub use config::{AppConfig, ConfigError};
pub use postgres::PostgresWebinarRepository;
