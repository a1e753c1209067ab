use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::object::{ObjectType, QueueVariant};

/// Load `.env` from the working directory if one exists.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Non-empty value of a config key under a profile.
///
/// With a profile (e.g. `PROD`), `PROD_{KEY}` is consulted before `{KEY}`.
/// Empty values count as unset.
fn lookup(profile: &str, key: &str) -> Option<String> {
    let read = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
    if profile.is_empty() {
        return read(key);
    }
    read(&format!("{}_{}", profile, key)).or_else(|| read(key))
}

fn lookup_or(profile: &str, key: &str, default: &str) -> String {
    lookup(profile, key).unwrap_or_else(|| default.to_string())
}

/// Parsed config value; an unparseable one warns and yields `default`.
fn lookup_parsed<T>(profile: &str, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(profile, key) else {
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(key, value = %raw, error = %e, "invalid config value, using default");
        default
    })
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub state: StateConfig,
    pub filters: FilterConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SIFT_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = lookup("", "SIFT_PROFILE").unwrap_or_default();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            state: StateConfig::from_env_profiled(p),
            filters: FilterConfig::from_env_profiled(p),
            log: LogConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  state:       dir={}, key={}", self.state.dir.display(), self.state.key);
        tracing::info!(
            "  filters:     object={}, queue={}, references={}",
            self.filters.default_object_type,
            self.filters.default_queue,
            self.filters
                .reference_data
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        );
        tracing::info!("  log:         level={}", self.log.level);
    }
}

// ── Persisted filter state ────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Directory backing the file store.
    pub dir: PathBuf,
    /// Fixed key the filter state is stored under.
    pub key: String,
}

impl StateConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            dir: PathBuf::from(lookup_or(p, "FILTER_STATE_DIR", "data/state")),
            key: lookup_or(p, "FILTER_STATE_KEY", "savedFilters"),
        }
    }
}

// ── Filters ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub default_object_type: ObjectType,
    pub default_queue: QueueVariant,
    /// JSON reference snapshot used when no live provider is available.
    pub reference_data: Option<PathBuf>,
}

impl FilterConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            default_object_type: lookup_parsed(p, "DEFAULT_OBJECT_TYPE", ObjectType::Alerts),
            default_queue: lookup_parsed(p, "DEFAULT_QUEUE", QueueVariant::Internal),
            reference_data: lookup(p, "REFERENCE_DATA").map(PathBuf::from),
        }
    }
}

// ── Logging ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub level: String,
}

impl LogConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            level: lookup_or(p, "LOG_LEVEL", "warn"),
        }
    }
}
