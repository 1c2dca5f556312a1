//! Language type: the closed set of languages the plugin ships dictionaries for.
//!
//! `Language` is a plain enum rather than an open string. Adding a language
//! means adding a variant and a dictionary under `locales/`; the registry
//! refuses to build if either is missing.

use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// A language the plugin ships a dictionary for.
///
/// Serializes as its ISO 639-1 code (`"en"`, `"zh"`, `"ja"`), which is also
/// the dictionary file stem under `locales/`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English. The canonical language: templates are authored in it and it
    /// is the fallback when a key or a whole dictionary is missing elsewhere.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
    /// Japanese.
    Ja,
}

impl Language {
    /// Every supported language, in dictionary order.
    pub const ALL: [Language; 3] = [Language::En, Language::Zh, Language::Ja];

    /// Get the ISO 639-1 language code.
    ///
    /// # Returns
    /// The language code as a static string (e.g., "en", "zh", "ja").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
            Language::Ja => "Japanese",
        }
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
            Language::Ja => "日本語",
        }
    }

    /// Look up a language by its bare code.
    ///
    /// Accepts the canonical codes plus `"jp"`, a legacy alias for Japanese
    /// that older host builds reported and the original dictionary set was
    /// keyed by. Codes are matched lowercase; use [`Language::resolve`] for
    /// raw host input.
    ///
    /// # Returns
    /// * `Some(Language)` if the code names a shipped dictionary
    /// * `None` otherwise
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            "ja" | "jp" => Some(Language::Ja),
            _ => None,
        }
    }

    /// Resolve a raw language tag from the host or the operating system.
    ///
    /// Hosts report anything from a bare code to a full BCP 47 tag, and some
    /// platforms use POSIX underscores (`"en_US"`). The tag is normalized,
    /// parsed, and reduced to its primary language subtag before lookup, so
    /// `"zh-Hans-CN"`, `"ja-JP"`, `"en_US"` and `"JP"` all resolve.
    ///
    /// # Returns
    /// * `Some(Language)` if the primary subtag names a shipped dictionary
    /// * `None` for unsupported languages and unparseable tags
    pub fn resolve(tag: &str) -> Option<Language> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = trimmed.replace('_', "-");
        let identifier: LanguageIdentifier = normalized.parse().ok()?;

        Self::from_code(identifier.language.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Code Tests ====================

    #[test]
    fn test_codes_match_dictionary_stems() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Zh.code(), "zh");
        assert_eq!(Language::Ja.code(), "ja");
    }

    #[test]
    fn test_all_lists_every_language_once() {
        assert_eq!(Language::ALL.len(), 3);
        assert!(Language::ALL.contains(&Language::En));
        assert!(Language::ALL.contains(&Language::Zh));
        assert!(Language::ALL.contains(&Language::Ja));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_canonical_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("zh"), Some(Language::Zh));
        assert_eq!(Language::from_code("ja"), Some(Language::Ja));
    }

    #[test]
    fn test_from_code_legacy_jp_alias() {
        assert_eq!(Language::from_code("jp"), Some(Language::Ja));
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_bare_codes() {
        assert_eq!(Language::resolve("en"), Some(Language::En));
        assert_eq!(Language::resolve("zh"), Some(Language::Zh));
        assert_eq!(Language::resolve("ja"), Some(Language::Ja));
    }

    #[test]
    fn test_resolve_region_qualified_tags() {
        assert_eq!(Language::resolve("en-US"), Some(Language::En));
        assert_eq!(Language::resolve("ja-JP"), Some(Language::Ja));
        assert_eq!(Language::resolve("zh-Hans-CN"), Some(Language::Zh));
    }

    #[test]
    fn test_resolve_posix_underscore_tags() {
        assert_eq!(Language::resolve("en_US"), Some(Language::En));
        assert_eq!(Language::resolve("zh_CN"), Some(Language::Zh));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(Language::resolve("EN"), Some(Language::En));
        assert_eq!(Language::resolve("Ja-jp"), Some(Language::Ja));
    }

    #[test]
    fn test_resolve_legacy_jp_alias() {
        assert_eq!(Language::resolve("jp"), Some(Language::Ja));
        assert_eq!(Language::resolve("JP"), Some(Language::Ja));
    }

    #[test]
    fn test_resolve_unsupported_language() {
        assert_eq!(Language::resolve("fr"), None);
        assert_eq!(Language::resolve("ko-KR"), None);
    }

    #[test]
    fn test_resolve_garbage_input() {
        assert_eq!(Language::resolve(""), None);
        assert_eq!(Language::resolve("   "), None);
        assert_eq!(Language::resolve("!!"), None);
        assert_eq!(Language::resolve("en US"), None);
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(Language::resolve(" zh "), Some(Language::Zh));
    }

    // ==================== Display and Serde Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Ja.to_string(), "ja");
    }

    #[test]
    fn test_serde_round_trip_as_code() {
        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"zh\"");

        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Zh);
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::Zh.name(), "Chinese");
        assert_eq!(Language::Zh.native_name(), "中文");
        assert_eq!(Language::Ja.native_name(), "日本語");
    }

    // ==================== Property Tests ====================

    proptest! {
        /// resolve never panics, whatever the host throws at it.
        #[test]
        fn prop_resolve_is_total(tag in "\\PC*") {
            let _ = Language::resolve(&tag);
        }

        /// Region and case never change the resolved language.
        #[test]
        fn prop_resolve_ignores_region(region in "[A-Za-z]{2}") {
            for language in Language::ALL {
                let tag = format!("{}-{}", language.code(), region);
                prop_assert_eq!(Language::resolve(&tag), Some(language));
            }
        }

        /// Every code round-trips through resolve.
        #[test]
        fn prop_code_resolves_to_itself(index in 0usize..3) {
            let language = Language::ALL[index];
            prop_assert_eq!(Language::resolve(language.code()), Some(language));
        }
    }
}
