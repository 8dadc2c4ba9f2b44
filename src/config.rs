use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub transliteration_base_url: String,
    pub transliteration_timeout_secs: u64,
    pub transliteration_debounce_ms: u64,
    pub certificate_store_path: PathBuf,
    pub session_ttl_secs: u64,
    /// Offset from UTC used to date certificates (minutes).
    pub issue_utc_offset_minutes: i32,
}

fn parse_or_default<T: std::str::FromStr>(
    key: &str,
    default: T,
    message: &str,
) -> anyhow::Result<T> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} {}", key, message)),
        _ => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: parse_or_default("PORT", 3000, "must be a valid number between 1-65535")?,
            transliteration_base_url: std::env::var("TRANSLITERATION_BASE_URL")
                .map_err(|_| {
                    anyhow::anyhow!("TRANSLITERATION_BASE_URL environment variable required")
                })
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("TRANSLITERATION_BASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("TRANSLITERATION_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            transliteration_timeout_secs: parse_or_default(
                "TRANSLITERATION_TIMEOUT_SECS",
                10,
                "must be a whole number of seconds",
            )?,
            transliteration_debounce_ms: parse_or_default(
                "TRANSLITERATION_DEBOUNCE_MS",
                500,
                "must be a whole number of milliseconds",
            )?,
            certificate_store_path: std::env::var("CERTIFICATE_STORE_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/certificate-store.json")),
            session_ttl_secs: parse_or_default(
                "SESSION_TTL_SECS",
                3600,
                "must be a whole number of seconds",
            )?,
            issue_utc_offset_minutes: parse_or_default(
                "ISSUE_UTC_OFFSET_MINUTES",
                330,
                "must be a number of minutes",
            )
            .and_then(|minutes: i32| {
                if !(-14 * 60..=14 * 60).contains(&minutes) {
                    anyhow::bail!("ISSUE_UTC_OFFSET_MINUTES must be within +/- 14 hours");
                }
                Ok(minutes)
            })?,
        };

        if config.session_ttl_secs == 0 {
            anyhow::bail!("SESSION_TTL_SECS must be greater than zero");
        }

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Transliteration URL: {}", config.transliteration_base_url);
        tracing::debug!("Certificate store: {}", config.certificate_store_path.display());
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    pub fn transliteration_timeout(&self) -> Duration {
        Duration::from_secs(self.transliteration_timeout_secs)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.transliteration_debounce_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Today's date in the configured issuing time zone.
    pub fn issue_date(&self) -> chrono::NaiveDate {
        let now = chrono::Utc::now();
        match chrono::FixedOffset::east_opt(self.issue_utc_offset_minutes * 60) {
            Some(offset) => now.with_timezone(&offset).date_naive(),
            None => now.date_naive(),
        }
    }
}
