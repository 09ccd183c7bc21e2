//! Configuration constants and utilities for tickline
//!
//! Every setting has a built-in default that an environment variable can
//! override. Command line flags take precedence over both.

use crate::todo::models::DEFAULT_SEED;

/// Environment variable holding a replacement seed list (JSON text)
pub const SEED_ENV_VAR: &str = "TICKLINE_SEED";

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV_VAR: &str = "TICKLINE_LOG_LEVEL";

/// Log level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "error";

fn env_string(name: &str) -> Option<String> {
    std::env::var_os(name).and_then(|val| val.into_string().ok())
}

/// Seed JSON: `--seed` flag, then environment, then the built-in sample list
pub fn get_seed_json(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| env_string(SEED_ENV_VAR))
        .unwrap_or_else(|| DEFAULT_SEED.to_string())
}

/// Log level: debug when verbose, then environment, then the default
pub fn get_log_level(verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    env_string(LOG_LEVEL_ENV_VAR)
        .map(|level| level.to_lowercase())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
