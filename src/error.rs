// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup errors for site configuration and locale data.
//!
//! Lookups never fail; only building the translator (or the site around it)
//! can, and those failures are reported through [`SiteError`].

use thiserror::Error;

/// Errors raised while assembling the site configuration and translator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    /// The configured default language has no dictionary in the registry.
    #[error("default language `{lang}` is not in the locale registry (available: {available})")]
    UnknownDefaultLanguage { lang: String, available: String },

    /// A language code does not look like `xx` or `xx-yy`.
    #[error("invalid language tag `{0}`")]
    InvalidLanguageTag(String),

    /// A site configuration value is out of range or malformed.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Strict key checking found dictionaries that disagree with the default.
    #[error("locale key sets differ from `{default_lang}`: {details}")]
    KeyMismatch { default_lang: String, details: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
