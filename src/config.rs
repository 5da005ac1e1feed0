// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration
//!
//! Read from `site.yaml` (or any `.yaml`/`.yml`/`.json` file). Every field is
//! optional; missing ones take the defaults below.

use crate::error::{Result as SiteResult, SiteError};
use crate::i18n::{self, load_json_or_yaml};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "site.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Absolute base URL, used for canonical links and the sitemap.
    pub website: String,
    /// Language served at the site root and used for lookup fallback.
    pub default_lang: String,
    pub posts_per_page: usize,
    /// Extra locale files merged over the built-in dictionaries. Relative
    /// paths are resolved against the config file's directory.
    pub locales_dir: Option<PathBuf>,
    /// Refuse to start when dictionaries define different key sets.
    pub strict_keys: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            website: "https://example.com/".to_string(),
            default_lang: "en".to_string(),
            posts_per_page: 10,
            locales_dir: None,
            strict_keys: false,
        }
    }
}

impl SiteConfig {
    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: SiteConfig = load_json_or_yaml(path)?;
        if let (Some(dir), Some(base)) = (config.locales_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.locales_dir = Some(base.join(dir));
            }
        }
        config
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(config)
    }

    /// Like [`SiteConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Normalises `default_lang` and checks value ranges.
    pub fn validate(&mut self) -> SiteResult<()> {
        self.default_lang = i18n::normalize(&self.default_lang);
        if !i18n::is_valid_tag(&self.default_lang) {
            return Err(SiteError::InvalidLanguageTag(self.default_lang.clone()));
        }
        if self.posts_per_page == 0 {
            return Err(SiteError::InvalidConfig {
                field: "posts_per_page",
                reason: "must be at least 1".to_string(),
            });
        }
        let host = self
            .website
            .strip_prefix("https://")
            .or_else(|| self.website.strip_prefix("http://"));
        match host {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
            _ => Err(SiteError::InvalidConfig {
                field: "website",
                reason: format!("`{}` is not an absolute http(s) URL", self.website),
            }),
        }
    }

    /// Replaces the default language (e.g. from the command line) and
    /// re-validates, so the override is normalised like a configured value.
    pub fn with_default_lang(mut self, lang: &str) -> SiteResult<Self> {
        self.default_lang = lang.to_string();
        self.validate()?;
        Ok(self)
    }

    /// Absolute URL for a site path, e.g. `/zh-cn/posts/a/`.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.website.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
