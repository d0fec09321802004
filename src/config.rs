use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-01-01";
pub const DEFAULT_STUDIO_USERNAME: &str = "barbelladmin";
pub const DEFAULT_STUDIO_PASSWORD: &str = "change-me";
pub const STUDIO_REALM: &str = "Barbell Admin";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REVALIDATE_SECS: u64 = 60;

static PROJECT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("project id pattern is valid"));

/// A content-store project id is usable only if it is lowercase alphanumeric
/// plus hyphens.
pub fn is_valid_project_id(project_id: &str) -> bool {
    PROJECT_ID_PATTERN.is_match(project_id)
}

#[derive(Debug, Clone)]
pub struct ContentStoreConfig {
    pub project_id: Option<String>,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ContentStoreConfig {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: Some(project_id.to_string()),
            ..Self::default()
        }
    }

    /// The project id, if one is set and well-formed.
    pub fn valid_project_id(&self) -> Option<&str> {
        self.project_id
            .as_deref()
            .filter(|id| is_valid_project_id(id))
    }

    pub fn is_configured(&self) -> bool {
        self.valid_project_id().is_some()
    }
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: true,
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudioCredentials {
    pub username: String,
    pub password: String,
    pub realm: String,
    pub studio_url: Option<String>,
}

impl StudioCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            realm: STUDIO_REALM.to_string(),
            studio_url: None,
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn is_default(&self) -> bool {
        self.username == DEFAULT_STUDIO_USERNAME && self.password == DEFAULT_STUDIO_PASSWORD
    }
}

impl Default for StudioCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_STUDIO_USERNAME, DEFAULT_STUDIO_PASSWORD)
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub content: ContentStoreConfig,
    pub studio: StudioCredentials,
    pub revalidate: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: ContentStoreConfig::default(),
            studio: StudioCredentials::default(),
            revalidate: Duration::from_secs(DEFAULT_REVALIDATE_SECS),
        }
    }
}

impl SiteConfig {
    /// Reads the site configuration from the process environment. Unset or
    /// unparseable values fall back to their defaults; a missing project id
    /// is a valid "store disconnected" state.
    pub fn from_env() -> Self {
        let defaults = SiteConfig::default();

        let content = ContentStoreConfig {
            project_id: env_raw("SANITY_PROJECT_ID"),
            dataset: env_string("SANITY_DATASET").unwrap_or(defaults.content.dataset),
            api_version: env_string("SANITY_API_VERSION").unwrap_or(defaults.content.api_version),
            use_cdn: env_parsed("SANITY_USE_CDN").unwrap_or(defaults.content.use_cdn),
            token: env_string("SANITY_API_TOKEN"),
            timeout: env_parsed("SANITY_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.content.timeout),
        };

        let studio = StudioCredentials {
            username: env_string("STUDIO_USERNAME").unwrap_or(defaults.studio.username),
            password: env_string("STUDIO_PASSWORD").unwrap_or(defaults.studio.password),
            realm: defaults.studio.realm,
            studio_url: env_string("SANITY_STUDIO_URL"),
        };

        let revalidate = env_parsed("REVALIDATE_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.revalidate);

        Self {
            content,
            studio,
            revalidate,
        }
    }
}

/// The value exactly as set, so validation sees any stray whitespace.
fn env_raw(key: &str) -> Option<String> {
    dotenvy::var(key).ok().filter(|value| !value.is_empty())
}

fn env_string(key: &str) -> Option<String> {
    dotenvy::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = env_string(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key = %key, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}
