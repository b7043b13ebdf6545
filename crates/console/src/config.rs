use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use promo_core::countdown::{parse_draw_date, DEFAULT_DRAW_DATE};

const DEFAULT_API_URL: &str = "http://localhost:7000";
const SESSION_DIR_NAME: &str = ".promo-console";

/// Console configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local API.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Campaign API base URL (default: `http://localhost:7000`).
    pub api_url: String,
    /// Directory holding the session document (default: `~/.promo-console`).
    pub session_dir: PathBuf,
    /// Treat the calling origin as HTTPS when classifying network errors.
    pub origin_https: bool,
    /// Target of the countdown.
    pub draw_date: NaiveDateTime,
    /// Per-request timeout. `None` keeps the HTTP client default.
    pub http_timeout: Option<Duration>,
}

impl ConsoleConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `PROMO_API_URL`           | `http://localhost:7000`  |
    /// | `PROMO_SESSION_DIR`       | `~/.promo-console`       |
    /// | `PROMO_ORIGIN_HTTPS`      | `false`                  |
    /// | `PROMO_DRAW_DATE`         | `2026-04-16T00:00:00`    |
    /// | `PROMO_HTTP_TIMEOUT_SECS` | unset (no timeout)       |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("PROMO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let session_dir = match lookup("PROMO_SESSION_DIR").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("cannot locate the home directory; set PROMO_SESSION_DIR")?
                .join(SESSION_DIR_NAME),
        };

        let origin_https = match lookup("PROMO_ORIGIN_HTTPS") {
            Some(v) => parse_flag(&v).with_context(|| format!("PROMO_ORIGIN_HTTPS must be true or false, got '{v}'"))?,
            None => false,
        };

        let draw_date = parse_draw_date(
            &lookup("PROMO_DRAW_DATE").unwrap_or_else(|| DEFAULT_DRAW_DATE.into()),
        )?;

        let http_timeout = lookup("PROMO_HTTP_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .with_context(|| format!("PROMO_HTTP_TIMEOUT_SECS must be a valid u64, got '{v}'"))
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            api_url,
            session_dir,
            origin_https,
            draw_date,
            http_timeout,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[("PROMO_SESSION_DIR", "/tmp/s")])).unwrap();
        assert_eq!(config.api_url, "http://localhost:7000");
        assert_eq!(config.session_dir, PathBuf::from("/tmp/s"));
        assert!(!config.origin_https);
        assert_eq!(config.draw_date, parse_draw_date(DEFAULT_DRAW_DATE).unwrap());
        assert!(config.http_timeout.is_none());
    }

    #[test]
    fn overrides() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("PROMO_API_URL", "https://api.skyworth.bo"),
            ("PROMO_SESSION_DIR", "/tmp/s"),
            ("PROMO_ORIGIN_HTTPS", "true"),
            ("PROMO_DRAW_DATE", "2026-05-01T20:00:00"),
            ("PROMO_HTTP_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.skyworth.bo");
        assert!(config.origin_https);
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(ConsoleConfig::from_lookup(lookup(&[
            ("PROMO_SESSION_DIR", "/tmp/s"),
            ("PROMO_HTTP_TIMEOUT_SECS", "soon"),
        ]))
        .is_err());
        assert!(ConsoleConfig::from_lookup(lookup(&[
            ("PROMO_SESSION_DIR", "/tmp/s"),
            ("PROMO_ORIGIN_HTTPS", "maybe"),
        ]))
        .is_err());
    }
}
