//! Runtime configuration of the console
//!
//! Resolved once per page load. The backend base URL comes from, in order:
//! 1. `localStorage["simplify_admin.api_base"]` (per-browser override)
//! 2. `SIMPLIFY_API_BASE` at build time
//! 3. `{protocol}//{hostname}:8080/api` of the current page

use once_cell::unsync::OnceCell;
use web_sys::window;

const API_BASE_OVERRIDE_KEY: &str = "simplify_admin.api_base";
const LOG_LEVEL_OVERRIDE_KEY: &str = "simplify_admin.log_level";
const DEFAULT_BACKEND_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every resource path is appended to, without trailing slash
    pub api_base: String,
    /// `limit` sent with list requests
    pub page_limit: u32,
    pub log_level: log::Level,
}

thread_local! {
    static CONFIG: OnceCell<AppConfig> = const { OnceCell::new() };
}

impl AppConfig {
    /// Configuration of the running page (resolved on first use)
    pub fn current() -> AppConfig {
        CONFIG.with(|cell| cell.get_or_init(AppConfig::load).clone())
    }

    fn load() -> AppConfig {
        let location = window().map(|w| w.location()).map(|l| {
            (
                l.protocol().unwrap_or_else(|_| "http:".to_string()),
                l.hostname().unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        });
        AppConfig {
            api_base: resolve_api_base(
                storage_item(API_BASE_OVERRIDE_KEY),
                option_env!("SIMPLIFY_API_BASE"),
                location,
            ),
            page_limit: contracts::shared::list_query::DEFAULT_LIMIT,
            log_level: parse_log_level(storage_item(LOG_LEVEL_OVERRIDE_KEY).as_deref()),
        }
    }
}

fn storage_item(key: &str) -> Option<String> {
    window()?.local_storage().ok()??.get_item(key).ok()?
}

/// Pick the first non-blank source and strip trailing slashes.
pub fn resolve_api_base(
    stored: Option<String>,
    build_time: Option<&str>,
    location: Option<(String, String)>,
) -> String {
    let explicit = stored
        .filter(|s| !s.trim().is_empty())
        .or_else(|| build_time.filter(|s| !s.trim().is_empty()).map(str::to_string));

    let base = match explicit {
        Some(base) => base.trim().to_string(),
        None => {
            let (protocol, hostname) =
                location.unwrap_or_else(|| ("http:".to_string(), "localhost".to_string()));
            format!("{}//{}:{}/api", protocol, hostname, DEFAULT_BACKEND_PORT)
        }
    };
    base.trim_end_matches('/').to_string()
}

pub fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_override_wins() {
        let base = resolve_api_base(
            Some("https://admin.example.cl/api/".into()),
            Some("http://build:9000/api"),
            Some(("http:".into(), "localhost".into())),
        );
        assert_eq!(base, "https://admin.example.cl/api");
    }

    #[test]
    fn build_time_value_beats_location() {
        let base = resolve_api_base(None, Some("http://build:9000/api"), None);
        assert_eq!(base, "http://build:9000/api");
    }

    #[test]
    fn falls_back_to_page_host() {
        let base = resolve_api_base(
            Some("  ".into()),
            None,
            Some(("https:".into(), "panel.local".into())),
        );
        assert_eq!(base, "https://panel.local:8080/api");
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!(parse_log_level(Some("warn")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("nonsense")), log::Level::Debug);
        assert_eq!(parse_log_level(None), log::Level::Debug);
    }
}
