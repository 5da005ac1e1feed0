// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language tag normalisation and validation.
//!
//! Site URLs and locale files use lowercase, hyphenated tags such as `en` or
//! `zh-cn`. Input coming from config files or the command line is normalised
//! to that form before it touches the registry, so `zh_CN`, `ZH-cn` and
//! `zh-cn` all name the same dictionary.
//!
//! Reference for primary subtags:
//! <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use regex::Regex;
use std::sync::OnceLock;

fn subtag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]{2,8}$").expect("subtag pattern is valid"))
}

/// Lowercase a tag, trim it and turn underscores into hyphens.
///
/// ```
/// assert_eq!(blog_site::i18n::normalize(" zh_CN "), "zh-cn");
/// assert_eq!(blog_site::i18n::normalize("en"), "en");
/// ```
pub fn normalize(tag: &str) -> String {
    tag.trim().to_ascii_lowercase().replace('_', "-")
}

/// Splits a normalised tag into its primary language subtag.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Whether `tag` (already normalised) is a usable site language tag.
///
/// The primary subtag must be a known ISO 639-1 code; any further subtags
/// (region, script) must be 2 to 8 ASCII alphanumerics.
///
/// ```
/// use blog_site::i18n::is_valid_tag;
/// assert!(is_valid_tag("en"));
/// assert!(is_valid_tag("zh-cn"));
/// assert!(!is_valid_tag("xx"));
/// assert!(!is_valid_tag("en-"));
/// ```
pub fn is_valid_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let Some(primary) = parts.next() else {
        return false;
    };
    if !is_valid_iso639_1(primary) {
        return false;
    }
    parts.all(|part| subtag_pattern().is_match(part))
}

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Case-sensitive: codes must already be lowercase.
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// English display name for a site language tag.
///
/// Regional Chinese variants get their own names; every other tag is named
/// after its primary subtag.
pub fn language_name(tag: &str) -> Option<&'static str> {
    match tag {
        "zh-cn" | "zh-hans" => return Some("Chinese (Simplified)"),
        "zh-tw" | "zh-hk" | "zh-hant" => return Some("Chinese (Traditional)"),
        _ => {}
    }
    match primary_subtag(tag) {
        "en" => Some("English"),
        "zh" => Some("Chinese"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "pt" => Some("Portuguese"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        _ => None,
    }
}

/// Native display name, used by the language switcher in the site header.
pub fn native_name(tag: &str) -> Option<&'static str> {
    match tag {
        "zh-cn" | "zh-hans" => return Some("简体中文"),
        "zh-tw" | "zh-hk" | "zh-hant" => return Some("繁體中文"),
        _ => {}
    }
    match primary_subtag(tag) {
        "en" => Some("English"),
        "zh" => Some("中文"),
        "ja" => Some("日本語"),
        "ko" => Some("한국어"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "de" => Some("Deutsch"),
        "pt" => Some("Português"),
        "it" => Some("Italiano"),
        "ru" => Some("Русский"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_separator() {
        assert_eq!(normalize("zh_CN"), "zh-cn");
        assert_eq!(normalize("  EN "), "en");
        assert_eq!(normalize("pt-BR"), "pt-br");
    }

    #[test]
    fn valid_tags_accepted() {
        assert!(is_valid_tag("en"));
        assert!(is_valid_tag("zh-cn"));
        assert!(is_valid_tag("zh-hant-tw"));
    }

    #[test]
    fn invalid_tags_rejected() {
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("xx"));
        assert!(!is_valid_tag("eng"));
        assert!(!is_valid_tag("EN"));
        assert!(!is_valid_tag("en-"));
        assert!(!is_valid_tag("en-a"));
        assert!(!is_valid_tag("zh-cn!"));
    }

    #[test]
    fn regional_chinese_names() {
        assert_eq!(language_name("zh-cn"), Some("Chinese (Simplified)"));
        assert_eq!(native_name("zh-tw"), Some("繁體中文"));
        assert_eq!(native_name("zh-sg"), Some("中文"));
    }

    #[test]
    fn names_fall_back_to_primary_subtag() {
        assert_eq!(language_name("en-gb"), Some("English"));
        assert_eq!(native_name("de-at"), Some("Deutsch"));
        assert_eq!(language_name("xx"), None);
    }
}
