use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::seo::SiteInfo;

pub const API_URL_ENV: &str = "DEVREF_API_URL";
pub const SITE_URL_ENV: &str = "NEXT_PUBLIC_SITE_URL";
pub const API_TOKEN_ENV: &str = "DEVREF_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API.
    pub api_url: String,
    /// Public site base URL used in canonical links and structured data.
    pub site_url: String,
    /// Organization name written into JSON-LD.
    pub organization: String,
    /// Optional bearer token for the admin endpoints.
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    /// Number of cards in the related tools grid.
    pub related_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            site_url: "http://localhost:3000".to_string(),
            organization: "DevRef".to_string(),
            api_token: None,
            timeout_secs: 30,
            related_limit: 6,
        }
    }
}

impl Config {
    /// `<config dir>/devref/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("devref");
            path.push("config.toml");
            path
        })
    }

    /// Loads the config file (an explicit path must exist, the default one
    /// may be missing), then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env();
        config.normalize();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        if let Some(url) = non_empty_env(API_URL_ENV) {
            self.api_url = url;
        }
        if let Some(url) = non_empty_env(SITE_URL_ENV) {
            self.site_url = url;
        }
        if let Some(token) = non_empty_env(API_TOKEN_ENV) {
            self.api_token = Some(token);
        }
    }

    pub fn normalize(&mut self) {
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();
        self.site_url = self.site_url.trim().trim_end_matches('/').to_string();
        if self.related_limit == 0 {
            self.related_limit = Config::default().related_limit;
        }
    }

    pub fn site(&self) -> SiteInfo {
        SiteInfo {
            base_url: self.site_url.clone(),
            organization: self.organization.clone(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
