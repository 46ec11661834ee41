use anyhow::{Context, Result};

use crate::pagination::Orientation;

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults describe an A4 page at 96 dpi.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Page cap applied when a request does not carry its own `max_pages`.
    pub max_pages: usize,
    pub content_height_portrait: f32,
    pub content_height_landscape: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_pages: 10,
            content_height_portrait: 1000.0,
            content_height_landscape: 680.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_pages: parse_env("CV_MAX_PAGES", defaults.max_pages)?,
            content_height_portrait: parse_env(
                "CV_CONTENT_HEIGHT_PORTRAIT",
                defaults.content_height_portrait,
            )?,
            content_height_landscape: parse_env(
                "CV_CONTENT_HEIGHT_LANDSCAPE",
                defaults.content_height_landscape,
            )?,
        })
    }

    /// Usable page content height for the given orientation.
    pub fn content_height(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Portrait => self.content_height_portrait,
            Orientation::Landscape => self.content_height_landscape,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_height_follows_orientation() {
        let config = Config::default();
        assert_eq!(config.content_height(Orientation::Portrait), 1000.0);
        assert_eq!(config.content_height(Orientation::Landscape), 680.0);
    }

    #[test]
    fn test_parse_env_falls_back_to_default_when_unset() {
        let value: usize = parse_env("CV_API_TEST_SURELY_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }
}
