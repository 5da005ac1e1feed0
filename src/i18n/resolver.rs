// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key lookup with default-language fallback.
//!
//! A lookup tries the requested language first and then the default
//! language. An unknown language behaves exactly like a known language that
//! lacks the key. A key missing from both yields `None`; resolution itself
//! never fails.

use super::catalog::{LocaleDictionary, LocaleRegistry};
use super::tags;
use crate::error::{Result, SiteError};
use tracing::trace;

/// Resolves `(language, key)` pairs against an immutable registry.
///
/// Built once at startup; share it by reference (it is `Send + Sync`).
#[derive(Debug, Clone)]
pub struct Translator {
    registry: LocaleRegistry,
    default_lang: String,
}

impl Translator {
    /// Wraps `registry`, checking that `default_lang` has a dictionary.
    ///
    /// ```
    /// use blog_site::i18n::{LocaleRegistry, Translator};
    /// let translator = Translator::new(LocaleRegistry::builtin(), "EN").unwrap();
    /// assert_eq!(translator.default_lang(), "en");
    /// assert!(Translator::new(LocaleRegistry::builtin(), "fr").is_err());
    /// ```
    pub fn new(registry: LocaleRegistry, default_lang: &str) -> Result<Self> {
        let default_lang = tags::normalize(default_lang);
        if !registry.contains(&default_lang) {
            let available = registry.languages().collect::<Vec<_>>().join(", ");
            return Err(SiteError::UnknownDefaultLanguage {
                lang: default_lang,
                available,
            });
        }
        Ok(Self {
            registry,
            default_lang,
        })
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Looks up `key` for `lang`, falling back to the default language.
    ///
    /// ```
    /// use blog_site::i18n::{LocaleRegistry, Translator};
    /// let translator = Translator::new(LocaleRegistry::builtin(), "en").unwrap();
    /// assert_eq!(translator.translate("zh-cn", "nav.home"), Some("首页"));
    /// assert_eq!(translator.translate("fr", "nav.home"), Some("Home"));
    /// assert_eq!(translator.translate("zh-cn", "no.such.key"), None);
    /// ```
    pub fn translate(&self, lang: &str, key: &str) -> Option<&str> {
        let tag = tags::normalize(lang);
        if let Some(value) = self.registry.get(&tag).and_then(|dict| dict.get(key)) {
            return Some(value);
        }
        trace!(lang = %tag, key, fallback = %self.default_lang, "translation fallback");
        self.registry
            .get(&self.default_lang)
            .and_then(|dict| dict.get(key))
    }

    /// Binds `lang` once and returns a single-argument lookup.
    ///
    /// ```
    /// use blog_site::i18n::{LocaleRegistry, Translator};
    /// let translator = Translator::new(LocaleRegistry::builtin(), "en").unwrap();
    /// let t = translator.use_translations("zh-cn");
    /// assert_eq!(t("nav.tags"), Some("标签"));
    /// ```
    pub fn use_translations<'a>(&'a self, lang: &str) -> impl Fn(&str) -> Option<&'a str> + 'a {
        let lang = tags::normalize(lang);
        move |key: &str| self.translate(&lang, key)
    }

    /// Every key known to `lang` or the default language, resolved for
    /// `lang`. This is what a template rendering in `lang` can see.
    pub fn resolved(&self, lang: &str) -> LocaleDictionary {
        let tag = tags::normalize(lang);
        let default = self.registry.get(&self.default_lang);
        let own = self.registry.get(&tag);
        default
            .into_iter()
            .chain(own)
            .flat_map(|dict| dict.keys())
            .filter_map(|key| self.translate(&tag, key).map(|value| (key, value)))
            .collect()
    }

    /// Same binding as [`Translator::use_translations`], as a named type that
    /// templates can hold on to.
    pub fn localizer(&self, lang: &str) -> Localizer<'_> {
        Localizer {
            translator: self,
            lang: tags::normalize(lang),
        }
    }
}

/// A [`Translator`] bound to one runtime language.
#[derive(Debug, Clone)]
pub struct Localizer<'a> {
    translator: &'a Translator,
    lang: String,
}

impl<'a> Localizer<'a> {
    /// The bound language, normalised.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// True when the bound language has no dictionary and every lookup goes
    /// straight to the default language.
    pub fn uses_default_only(&self) -> bool {
        !self.translator.registry.contains(&self.lang)
    }

    pub fn t(&self, key: &str) -> Option<&'a str> {
        self.translator.translate(&self.lang, key)
    }

    /// Like [`Localizer::t`] but renders the key itself when nothing matches.
    pub fn t_or_key<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.t(key).unwrap_or(key)
    }
}
