use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Resolves profiled keys: tries `{PROFILE}_{KEY}` first, falls back to `{KEY}`.
struct Profiled<'a, F> {
    profile: &'a str,
    lookup: F,
}

impl<'a, F> Profiled<'a, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn opt(&self, key: &str) -> Option<String> {
        if !self.profile.is_empty() {
            let prefixed = format!("{}_{}", self.profile, key);
            if let Some(v) = (self.lookup)(prefixed.as_str()).filter(|s| !s.is_empty()) {
                return Some(v);
            }
        }
        (self.lookup)(key).filter(|s| !s.is_empty())
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.opt(key).unwrap_or_else(|| default.to_string())
    }

    fn u16(&self, key: &str, default: u16) -> u16 {
        self.opt(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SYMCHECK_PROFILE`. When set (e.g. `PROD`), every
    /// key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_opt("SYMCHECK_PROFILE").unwrap_or_default();
        Self::from_lookup(&profile, env_opt)
    }

    /// Build config for a profile from an arbitrary key lookup.
    pub fn from_lookup<F>(profile: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let p = profile.to_uppercase();
        let source = Profiled {
            profile: p.as_str(),
            lookup,
        };
        Self {
            profile: p.clone(),
            server: ServerConfig::from_source(&source),
            catalog: CatalogConfig::from_source(&source),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:   host={}, port={}", self.server.host, self.server.port);
        tracing::info!(
            "  catalog:  {}",
            self.catalog
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        );
    }
}

// ── Server ────────────────────────────────────────────────────

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_source<F: Fn(&str) -> Option<String>>(src: &Profiled<'_, F>) -> Self {
        Self {
            host: src.or("SYMCHECK_HOST", "0.0.0.0"),
            port: src.u16("PORT", DEFAULT_PORT),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Catalog ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Replacement catalog YAML; `None` uses the embedded catalog.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    fn from_source<F: Fn(&str) -> Option<String>>(src: &Profiled<'_, F>) -> Self {
        Self {
            path: src.opt("SYMCHECK_CATALOG_PATH").map(PathBuf::from),
        }
    }
}
