//! HTTP service mode: environment configuration and the axum router.

pub mod config;
pub mod routes;

pub use config::Config;
pub use routes::router;
