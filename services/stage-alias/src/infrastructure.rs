// Infrastructure layer modules
pub mod alias_config;
pub mod logging;

// Re-exports
pub use alias_config::{AliasConfig, ENV_FUNCTION_ALIAS};
pub use logging::init_logging;
