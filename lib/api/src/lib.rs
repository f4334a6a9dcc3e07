pub mod error;
pub mod rest;

pub use error::ApiError;
pub use rest::{configure, form_config, json_config, RestApi, ServerConfig, DEFAULT_JSON_LIMIT};
