use std::time::Duration;

use crate::log::LogLevel;

const DEFAULT_BASE_PATH: &str = "/portfolio-site/";
const DEFAULT_LOADING_MS: u64 = 1_500;
const DEFAULT_TYPEWRITER_MS: u64 = 50;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
// Any intersecting pixel; a fixed fraction is unreachable for sections taller
// than the viewport divided by that fraction.
const REVEAL_THRESHOLD: f64 = 0.0;
const REVEAL_DURATION_MS: u64 = 600;
const MENU_STAGGER_MS: u64 = 100;

const LOADING_MS_BOUNDS: (u64, u64) = (0, 10_000);
const TYPEWRITER_MS_BOUNDS: (u64, u64) = (10, 1_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub base_path: String,
    pub loading_duration: Duration,
    pub typewriter_delay: Duration,
    pub reveal_threshold: f64,
    pub reveal_duration: Duration,
    pub menu_stagger: Duration,
    pub log_level: LogLevel,
    pub messaging_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Values baked in by the bundler at compile time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "PORTFOLIO_BASE_PATH" => option_env!("PORTFOLIO_BASE_PATH"),
                "PORTFOLIO_LOADING_MS" => option_env!("PORTFOLIO_LOADING_MS"),
                "PORTFOLIO_TYPEWRITER_MS" => option_env!("PORTFOLIO_TYPEWRITER_MS"),
                "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
                "PORTFOLIO_MESSAGING_URL" => option_env!("PORTFOLIO_MESSAGING_URL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_path = parse_non_empty_string(lookup("PORTFOLIO_BASE_PATH"))
            .map(|value| normalize_base_path(&value))
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        let loading_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_LOADING_MS"),
            DEFAULT_LOADING_MS,
            LOADING_MS_BOUNDS,
        );
        let typewriter_ms = parse_u64_with_bounds(
            lookup("PORTFOLIO_TYPEWRITER_MS"),
            DEFAULT_TYPEWRITER_MS,
            TYPEWRITER_MS_BOUNDS,
        );
        let log_level = parse_non_empty_string(lookup("PORTFOLIO_LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let messaging_url = parse_non_empty_string(lookup("PORTFOLIO_MESSAGING_URL"))
            .filter(|value| is_absolute_url(value));

        Self {
            base_path,
            loading_duration: Duration::from_millis(loading_ms),
            typewriter_delay: Duration::from_millis(typewriter_ms),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_duration: Duration::from_millis(REVEAL_DURATION_MS),
            menu_stagger: Duration::from_millis(MENU_STAGGER_MS),
            log_level,
            messaging_url,
        }
    }

    pub fn asset_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }

        let relative = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}{relative}", self.base_path)
    }
}

pub fn is_absolute_url(value: &str) -> bool {
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| value.starts_with(scheme))
}

fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .map(|value| value.clamp(bounds.0, bounds.1))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
