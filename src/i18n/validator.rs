//! Translation quality validation module.
//!
//! This module checks that a translated template stays structurally faithful
//! to its canonical (English) counterpart: every `{placeholder}` the canonical
//! template interpolates must survive translation, and none may be invented.
//! A dropped placeholder renders as a literal brace token in the UI, so drift
//! here is caught at audit time rather than by a user.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated message templates.
pub struct TemplateValidator;

// Regex pattern for extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TemplateValidator {
    /// Validate that a translation preserves the canonical template's shape.
    ///
    /// This function checks that:
    /// - every `{placeholder}` in the canonical template appears in the translation
    /// - the translation introduces no placeholders of its own
    /// - a non-empty canonical message is not translated to an empty string
    ///
    /// # Arguments
    /// * `canonical` - The canonical template (English)
    /// * `translated` - The translated template
    ///
    /// # Returns
    /// A `ValidationReport` containing any warnings found.
    pub fn validate(canonical: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if !canonical.trim().is_empty() && translated.trim().is_empty() {
            report.warnings.push("translation is empty".to_string());
        }

        let expected = Self::extract_placeholders(canonical);
        let found = Self::extract_placeholders(translated);

        for token in &expected {
            if !found.contains(token) {
                report
                    .warnings
                    .push(format!("missing placeholder {}", token));
            }
        }

        for token in &found {
            if !expected.contains(token) {
                report
                    .warnings
                    .push(format!("unexpected placeholder {}", token));
            }
        }

        report
    }

    /// Extract all `{placeholder}` tokens from a template, sorted and deduplicated.
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{[A-Za-z0-9_]+\}").unwrap());

        let mut tokens: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        tokens.sort_unstable();
        tokens.dedup();
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let text = "Synced {count} records.";
        let tokens = TemplateValidator::extract_placeholders(text);
        assert_eq!(tokens, vec!["{count}"]);
    }

    #[test]
    fn test_extract_placeholders_multiple_sorted() {
        let text = "{second} before {first}";
        let tokens = TemplateValidator::extract_placeholders(text);
        assert_eq!(tokens, vec!["{first}", "{second}"]);
    }

    #[test]
    fn test_extract_placeholders_deduplicated() {
        let text = "{name} and {name} again";
        let tokens = TemplateValidator::extract_placeholders(text);
        assert_eq!(tokens, vec!["{name}"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        let tokens = TemplateValidator::extract_placeholders("No tokens here");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_malformed() {
        let tokens = TemplateValidator::extract_placeholders("open { brace and {unclosed");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_extract_placeholders_with_underscores() {
        let tokens = TemplateValidator::extract_placeholders("{record_count} done");
        assert_eq!(tokens, vec!["{record_count}"]);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_faithful_translation() {
        let canonical = "Synced {count} records.";
        let translated = "已同步 {count} 条记录。";

        let report = TemplateValidator::validate(canonical, translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_placeholder() {
        let canonical = "Sync failed: {reason}";
        let translated = "同步失败";

        let report = TemplateValidator::validate(canonical, translated);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("missing placeholder {reason}"));
    }

    #[test]
    fn test_validate_unexpected_placeholder() {
        let canonical = "Cancel";
        let translated = "取消 {extra}";

        let report = TemplateValidator::validate(canonical, translated);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("unexpected placeholder {extra}"));
    }

    #[test]
    fn test_validate_renamed_placeholder_reports_both() {
        let canonical = "Language: {language}";
        let translated = "言語：{lang}";

        let report = TemplateValidator::validate(canonical, translated);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_validate_empty_translation() {
        let report = TemplateValidator::validate("Run", "   ");
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("empty"));
    }

    #[test]
    fn test_validate_reordered_placeholders_is_clean() {
        let canonical = "{count} of {total}";
        let translated = "{total} 件中 {count} 件";

        let report = TemplateValidator::validate(canonical, translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    // ==================== Property Tests ====================

    proptest! {
        /// A template is always a faithful translation of itself.
        #[test]
        fn prop_identity_translation_is_clean(template in "\\PC*") {
            let report = TemplateValidator::validate(&template, &template);
            prop_assert!(report.is_clean());
        }

        /// Dropping every placeholder is always reported.
        #[test]
        fn prop_dropped_placeholder_warns(name in "[a-z_]{1,12}") {
            let canonical = format!("value is {{{}}}", name);
            let report = TemplateValidator::validate(&canonical, "value is gone");
            prop_assert!(report.has_warnings());
        }
    }
}
