//! Build-time Configuration
//!
//! The backend base URL never reaches the page: Trunk proxies `/api` to it
//! (see Trunk.toml). Only the request path and storage key are compiled in.

/// Path of the seed list, relative to the page origin
const DEFAULT_API_PATH: &str = "/api";

/// Page settings, fixed when the wasm bundle is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub api_path: &'static str,
    pub storage_key: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_path: DEFAULT_API_PATH,
            storage_key: todo_core::STORAGE_KEY,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `TODO_BOARD_API_PATH` / `TODO_BOARD_STORAGE_KEY`
    /// when set at compile time
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("TODO_BOARD_API_PATH"),
            option_env!("TODO_BOARD_STORAGE_KEY"),
        )
    }

    fn with_overrides(api_path: Option<&'static str>, storage_key: Option<&'static str>) -> Self {
        let defaults = Self::default();
        Self {
            api_path: api_path.filter(|p| !p.is_empty()).unwrap_or(defaults.api_path),
            storage_key: storage_key.filter(|k| !k.is_empty()).unwrap_or(defaults.storage_key),
        }
    }
}
