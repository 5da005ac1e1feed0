// SPDX-License-Identifier: PMPL-1.0-or-later

//! Startup wiring: configuration in, translator out.

use crate::config::SiteConfig;
use crate::i18n::{LocaleRegistry, Localizer, Translator};
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Everything the renderer needs, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    translator: Translator,
    locale_files: Vec<PathBuf>,
}

impl Site {
    /// Builds the registry (built-ins plus `locales_dir`) and the translator.
    ///
    /// Fails if the default language has no dictionary, or, with
    /// `strict_keys`, if any dictionary's key set differs from the default's.
    pub fn build(config: SiteConfig) -> Result<Self> {
        let enforce = config.strict_keys;
        Self::assemble(config, enforce)
    }

    /// Like [`Site::build`] but never rejects mismatched key sets, so a
    /// checker can list the offending keys instead of stopping at the first
    /// error. `config.strict_keys` is kept as configured.
    pub fn build_unchecked(config: SiteConfig) -> Result<Self> {
        Self::assemble(config, false)
    }

    fn assemble(config: SiteConfig, enforce_keys: bool) -> Result<Self> {
        let mut registry = LocaleRegistry::builtin();
        let locale_files = match &config.locales_dir {
            Some(dir) => registry.merge_dir(dir)?,
            None => Vec::new(),
        };

        let translator = Translator::new(registry, &config.default_lang)
            .context("building translator")?;

        if enforce_keys {
            translator
                .registry()
                .ensure_uniform_keys(translator.default_lang())
                .context("strict_keys is enabled")?;
        } else {
            for diff in translator.registry().key_diffs(translator.default_lang()) {
                warn!(
                    lang = %diff.lang,
                    missing = diff.missing.len(),
                    extra = diff.extra.len(),
                    "locale key set differs from default language"
                );
            }
        }

        debug!(
            default_lang = translator.default_lang(),
            languages = translator.registry().len(),
            locale_files = locale_files.len(),
            "site ready"
        );
        Ok(Self {
            config,
            translator,
            locale_files,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Locale files merged at startup, in load order.
    pub fn locale_files(&self) -> &[PathBuf] {
        &self.locale_files
    }

    /// Resolves `key` in `lang` (the default language when `None`), or
    /// errors naming both languages that were tried.
    pub fn lookup(&self, lang: Option<&str>, key: &str) -> Result<&str> {
        let default_lang = self.translator.default_lang();
        let lang = lang.unwrap_or(default_lang);
        self.translator.translate(lang, key).ok_or_else(|| {
            anyhow!(
                "no translation for `{}` in {} or {}",
                key,
                crate::i18n::normalize(lang),
                default_lang
            )
        })
    }

    /// A lookup bound to `lang`.
    pub fn localizer(&self, lang: &str) -> Localizer<'_> {
        self.translator.localizer(lang)
    }
}
