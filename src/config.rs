//! Runtime Configuration
//!
//! Defaults can be overridden by `<meta>` tags in the host page:
//!
//! ```html
//! <meta name="memo-api-root" content="/api">
//! <meta name="memo-log-level" content="info">
//! ```

use log::LevelFilter;

const API_ROOT_META: &str = "memo-api-root";
const LOG_LEVEL_META: &str = "memo-log-level";
const DEFAULT_API_ROOT: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix of every REST call, without trailing `/`
    pub api_root: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Read overrides from the current document. Invalid values keep the
    /// default; the returned warnings should be logged once logging is up.
    pub fn load() -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(root) = read_meta(API_ROOT_META) {
            match normalize_api_root(&root) {
                Ok(root) => config.api_root = root,
                Err(e) => warnings.push(e),
            }
        }
        if let Some(level) = read_meta(LOG_LEVEL_META) {
            match parse_level(&level) {
                Ok(level) => config.log_level = level,
                Err(e) => warnings.push(e),
            }
        }

        (config, warnings)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }
}

/// `debug` in debug builds, `info` in release builds
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other => Err(format!(
            "unsupported log level `{other}`; expected off|trace|debug|info|warn|error"
        )),
    }
}

pub fn normalize_api_root(root: &str) -> Result<String, String> {
    let trimmed = root.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err("api root cannot be empty".to_string());
    }
    Ok(trimmed.to_string())
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}
