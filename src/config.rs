//! Client configuration.
//!
//! Every field has a default, so a RON file only needs to name the settings it
//! changes:
//!
//! ```ron
//! (
//!     locales: (primary: "en", fallback: "ja"),
//!     request_timeout_secs: Some(10),
//!     member_failure: Skip,
//! )
//! ```

use crate::errors::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_CATEGORY_MEMBER_CAP: usize = 20;
pub const DEFAULT_FAVORITES_PATH: &str = "pokedex_favorites.json";

/// Language tags tried, in order, when picking human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalePreference {
    pub primary: String,
    pub fallback: String,
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self {
            primary: "es".to_string(),
            fallback: "en".to_string(),
        }
    }
}

impl LocalePreference {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    pub fn tags(&self) -> [&str; 2] {
        [self.primary.as_str(), self.fallback.as_str()]
    }
}

/// What a collection request does when one of its members cannot be found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberFailurePolicy {
    /// Fail the whole collection request.
    #[default]
    Abort,
    /// Drop the member and keep the rest in their original order.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub locales: LocalePreference,
    pub category_member_cap: usize,
    pub excluded_tags: Vec<String>,
    /// `None` issues requests without a cutoff.
    pub request_timeout_secs: Option<u64>,
    pub member_failure: MemberFailurePolicy,
    pub favorites_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locales: LocalePreference::default(),
            category_member_cap: DEFAULT_CATEGORY_MEMBER_CAP,
            excluded_tags: ["shadow", "unknown", "stellar"]
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            request_timeout_secs: None,
            member_failure: MemberFailurePolicy::default(),
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_PATH),
        }
    }
}

impl ClientConfig {
    /// Load a configuration from a RON file
    pub fn load(path: &Path) -> ClientResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> ClientResult<Self> {
        let config: ClientConfig =
            ron::from_str(content).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }
        if let Err(e) = reqwest::Url::parse(&self.base_url) {
            return Err(ClientError::Config(format!(
                "base_url '{}' is not a valid URL: {}",
                self.base_url, e
            )));
        }
        if self.category_member_cap == 0 {
            return Err(ClientError::Config(
                "category_member_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn is_excluded_tag(&self, tag: &str) -> bool {
        self.excluded_tags.iter().any(|excluded| excluded == tag)
    }
}
