use std::{env, num::NonZeroUsize, time::Duration};

const DEFAULT_CACHE_TTL_SECONDS: u64 = 86_400;
const DEFAULT_CACHE_MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(n) => n,
    None => unreachable!(),
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds, never zero (default: 86,400)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: NonZeroUsize,
    /// Write the projection back to the cache on a read miss (default: false)
    pub cache_repopulate_on_miss: bool,
    /// Path to SQLite database file (default: "staffcache.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 86,400)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_REPOPULATE_ON_MISS` - `true`/`1`/`yes` to enable (default: false)
    /// - `SQLITE_PATH` - SQLite database path (default: "staffcache.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparsable values fall back to their defaults. A zero TTL or entry
    /// count is treated as unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|&seconds| seconds > 0)
                .unwrap_or(DEFAULT_CACHE_TTL_SECONDS),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            cache_repopulate_on_miss: lookup("CACHE_REPOPULATE_ON_MISS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "staffcache.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.cache_ttl_seconds, 86_400);
        assert_eq!(config.cache_max_entries.get(), 10_000);
        assert!(!config.cache_repopulate_on_miss);
        assert_eq!(config.sqlite_path, "staffcache.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "600"),
            ("CACHE_MAX_ENTRIES", "50"),
            ("CACHE_REPOPULATE_ON_MISS", "TRUE"),
            ("SQLITE_PATH", "/tmp/test.db"),
            ("REDIS_URL", "redis://cache:6380"),
        ]);

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.cache_max_entries.get(), 50);
        assert!(config.cache_repopulate_on_miss);
        assert_eq!(config.sqlite_path, "/tmp/test.db");
        assert_eq!(config.redis_url, "redis://cache:6380");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "a day"),
            ("CACHE_MAX_ENTRIES", "0"),
            ("CACHE_REPOPULATE_ON_MISS", "maybe"),
        ]);

        assert_eq!(config.cache_ttl_seconds, 86_400);
        assert_eq!(config.cache_max_entries.get(), 10_000);
        assert!(!config.cache_repopulate_on_miss);
    }

    #[test]
    fn test_zero_ttl_falls_back() {
        let config = config_from(&[("CACHE_TTL_SECONDS", "0")]);
        assert_eq!(config.cache_ttl(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_max_ttl_is_accepted() {
        let config = config_from(&[("CACHE_TTL_SECONDS", "18446744073709551615")]);
        assert_eq!(config.cache_ttl(), Duration::from_secs(u64::MAX));
    }
}
