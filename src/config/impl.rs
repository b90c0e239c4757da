use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to built-in defaults if `init_config` was never called, so
/// library code stays usable from tests and embedders.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::default()))
        .clone()
}

/// Initialize the global configuration from `config.toml` and the environment
///
/// # Examples
/// ```no_run
/// use shortrack::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    init_config_from(None);
}

/// Initialize the global configuration from an explicit TOML path
///
/// Only the first call has any effect.
pub fn init_config_from(path: Option<&str>) {
    CONFIG.get_or_init(|| Arc::new(StaticConfig::load_from(path)));
}
