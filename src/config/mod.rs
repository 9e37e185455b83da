//! Application Configuration Module
//!
//! Server, storage, and economics settings loaded from TOML, replacing the
//! hardcoded conversion factors and country rate tables with operator-tunable
//! values.
//!
//! ## Loading Order
//!
//! 1. `FIELDPLAN_CONFIG` environment variable (path to TOML file)
//! 2. `fieldplan.toml` in the current working directory
//! 3. Built-in defaults (matching the original hardcoded values)
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(AppConfig::load());
//!
//! // Anywhere in the codebase:
//! let rate = config::get().economics.country_rate("NORWAY");
//! ```

mod app_config;

pub use app_config::*;

use std::sync::OnceLock;

/// Global application configuration, initialized once at startup.
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: AppConfig) {
    if APP_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global configuration.
///
/// Panics if `init()` has not been called — a missing config is a fatal
/// startup error, not a recoverable condition.
#[allow(clippy::expect_used)]
pub fn get() -> &'static AppConfig {
    APP_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    APP_CONFIG.get().is_some()
}
