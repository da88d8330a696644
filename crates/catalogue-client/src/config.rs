//! Connection settings for the catalogue client.

use std::path::Path;
use std::time::Duration;

use catalogue_model::Release;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};

/// Default GraphQL endpoint of a local catalogue server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/catalogue/graphql";

/// Resource acronym of the release queried when nothing else is configured.
pub const DEFAULT_RELEASE_ACRONYM: &str = "LifeCycle";

/// Release version queried when nothing else is configured.
pub const DEFAULT_RELEASE_VERSION: &str = "1.0.0";

/// Request timeout used when the settings file does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`CatalogueSettings::endpoint`].
pub const ENV_ENDPOINT: &str = "CATALOGUE_ENDPOINT";
/// Environment variable overriding [`CatalogueSettings::release_resource_acronym`].
pub const ENV_RELEASE_ACRONYM: &str = "CATALOGUE_RELEASE_ACRONYM";
/// Environment variable overriding [`CatalogueSettings::release_version`].
pub const ENV_RELEASE_VERSION: &str = "CATALOGUE_RELEASE_VERSION";

/// Settings for talking to one catalogue release.
///
/// Every query this crate builds is scoped to the single release named here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueSettings {
    /// GraphQL endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Acronym of the resource owning the release.
    #[serde(default = "default_release_acronym")]
    pub release_resource_acronym: String,

    /// Version of the release.
    #[serde(default = "default_release_version")]
    pub release_version: String,

    /// Per-request timeout in seconds; `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_release_acronym() -> String {
    DEFAULT_RELEASE_ACRONYM.to_string()
}

fn default_release_version() -> String {
    DEFAULT_RELEASE_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            release_resource_acronym: default_release_acronym(),
            release_version: default_release_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogueSettings {
    /// Reads settings from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| {
            CatalogueError::Config(format!("invalid settings file {}: {e}", path.display()))
        })
    }

    /// Applies the `CATALOGUE_*` environment variables on top of these settings.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Blank values are ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(acronym) = get(ENV_RELEASE_ACRONYM) {
            self.release_resource_acronym = acronym;
        }
        if let Some(version) = get(ENV_RELEASE_VERSION) {
            self.release_version = version;
        }
        self
    }

    /// Rejects settings that cannot produce a usable client.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(CatalogueError::Config(
                "endpoint must not be empty".to_string(),
            ));
        }
        if self.release_resource_acronym.trim().is_empty() {
            return Err(CatalogueError::Config(
                "release resource acronym must not be empty".to_string(),
            ));
        }
        if self.release_version.trim().is_empty() {
            return Err(CatalogueError::Config(
                "release version must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The release every query is scoped to.
    #[must_use]
    pub fn release(&self) -> Release {
        Release::new(&self.release_resource_acronym, &self.release_version)
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}
