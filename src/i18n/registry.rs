//! Translation registry: validated dictionaries for every supported language.
//!
//! The registry is built once at startup from the dictionaries embedded under
//! `locales/` and is an explicit value, not a global. Construction fails when
//! a dictionary is missing or malformed, or when its key set drifts from the
//! message key catalog, so a registry that exists is known-complete: every
//! language answers every key in [`keys::ALL`].

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rust_embed::RustEmbed;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::i18n::{keys, Language, TemplateValidator};

/// Locale dictionaries compiled into the binary.
#[derive(RustEmbed)]
#[folder = "locales/"]
struct LocaleAssets;

/// Errors raised while building a translation registry.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A supported language has no dictionary file.
    #[error("no dictionary for '{language}' (expected locales/{path})")]
    MissingDictionary { language: Language, path: String },

    /// A dictionary file is not a JSON object of string templates.
    #[error("failed to parse locales/{path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A dictionary defines a different key set than the catalog.
    #[error(
        "dictionary for '{language}' drifted from the message key catalog \
         (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    KeyDrift {
        language: Language,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// Immutable set of validated dictionaries, one per supported language.
#[derive(Debug)]
pub struct TranslationRegistry {
    tables: HashMap<Language, BTreeMap<String, String>>,
}

impl TranslationRegistry {
    /// Build the registry from the dictionaries embedded in the binary.
    ///
    /// # Returns
    /// * `Ok(TranslationRegistry)` when every language in [`Language::ALL`]
    ///   has a dictionary matching the key catalog exactly
    /// * `Err(I18nError)` naming the first offending dictionary otherwise
    pub fn from_embedded() -> Result<Self, I18nError> {
        let mut tables = HashMap::new();

        for language in Language::ALL {
            let path = format!("{}.json", language.code());
            let file = LocaleAssets::get(&path).ok_or_else(|| I18nError::MissingDictionary {
                language,
                path: path.clone(),
            })?;

            let table: BTreeMap<String, String> = serde_json::from_slice(file.data.as_ref())
                .map_err(|source| I18nError::Parse {
                    path: path.clone(),
                    source,
                })?;

            tables.insert(language, table);
        }

        Self::from_tables(tables)
    }

    /// Build a registry from in-memory dictionaries.
    ///
    /// Applies the same validation as [`TranslationRegistry::from_embedded`]:
    /// every supported language must be present and every table must match
    /// the key catalog. Placeholder drift against the canonical dictionary is
    /// logged as a warning but does not fail construction; the audit binary
    /// is the strict gate for that.
    pub fn from_tables(
        tables: HashMap<Language, BTreeMap<String, String>>,
    ) -> Result<Self, I18nError> {
        for language in Language::ALL {
            let table = tables.get(&language).ok_or_else(|| {
                I18nError::MissingDictionary {
                    language,
                    path: format!("{}.json", language.code()),
                }
            })?;
            Self::check_key_set(language, table)?;
        }

        let registry = Self { tables };

        for audit in registry.audit().languages {
            for finding in audit.findings {
                warn!("locale '{}': {}", audit.language, finding);
            }
        }

        Ok(registry)
    }

    /// Look up the template for a key in the given language.
    ///
    /// Falls back to the canonical (default) language when the key is missing,
    /// which after construction-time validation can only happen for keys
    /// outside the catalog.
    ///
    /// # Returns
    /// * `Some(&str)` with the template
    /// * `None` if no dictionary defines the key
    pub fn message(&self, language: Language, key: &str) -> Option<&str> {
        let direct = self.tables.get(&language).and_then(|table| table.get(key));

        let resolved = match direct {
            Some(template) => Some(template),
            None if language != Language::default() => self
                .tables
                .get(&Language::default())
                .and_then(|table| table.get(key)),
            None => None,
        };

        resolved.map(String::as_str)
    }

    /// Look up a template and interpolate `{name}` placeholders.
    ///
    /// Placeholders without a matching argument are left verbatim, so a
    /// template bug shows up as `{count}` in the UI instead of a panic.
    ///
    /// # Arguments
    /// * `language` - Language to render in
    /// * `key` - Message key from [`keys`]
    /// * `args` - `(name, value)` pairs; `name` is without braces
    pub fn format(&self, language: Language, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.message(language, key)
            .map(|template| interpolate(template, args))
    }

    /// Number of keys every dictionary defines.
    pub fn key_count(&self) -> usize {
        keys::ALL.len()
    }

    /// Audit every dictionary against the canonical one.
    ///
    /// Key-set drift cannot appear here (construction already rejects it);
    /// the audit reports placeholder drift and empty translations per
    /// language, in catalog order.
    pub fn audit(&self) -> AuditReport {
        let canonical = self.tables.get(&Language::default());

        let languages = Language::ALL
            .iter()
            .map(|&language| {
                let mut findings = Vec::new();

                if language != Language::default() {
                    if let (Some(reference), Some(table)) =
                        (canonical, self.tables.get(&language))
                    {
                        for key in keys::ALL {
                            let (Some(reference_template), Some(translated)) =
                                (reference.get(key), table.get(key))
                            else {
                                continue;
                            };

                            let report =
                                TemplateValidator::validate(reference_template, translated);
                            for warning in report.warnings {
                                findings.push(format!("{}: {}", key, warning));
                            }
                        }
                    }
                }

                LanguageAudit {
                    language,
                    keys: self.tables.get(&language).map_or(0, BTreeMap::len),
                    findings,
                }
            })
            .collect();

        AuditReport {
            total_keys: keys::ALL.len(),
            languages,
        }
    }

    /// Compare a table's key set against the catalog.
    fn check_key_set(
        language: Language,
        table: &BTreeMap<String, String>,
    ) -> Result<(), I18nError> {
        let expected: BTreeSet<&str> = keys::ALL.iter().copied().collect();
        let actual: BTreeSet<&str> = table.keys().map(String::as_str).collect();

        let missing: Vec<String> = expected
            .difference(&actual)
            .map(|key| key.to_string())
            .collect();
        let unexpected: Vec<String> = actual
            .difference(&expected)
            .map(|key| key.to_string())
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(I18nError::KeyDrift {
                language,
                missing,
                unexpected,
            })
        }
    }
}

/// Result of auditing all dictionaries, serializable for tooling.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Keys the catalog defines (and so every dictionary holds).
    pub total_keys: usize,

    /// Per-language audit, in [`Language::ALL`] order.
    pub languages: Vec<LanguageAudit>,
}

impl AuditReport {
    /// Check whether every dictionary passed with no findings.
    pub fn is_clean(&self) -> bool {
        self.languages.iter().all(|audit| audit.findings.is_empty())
    }
}

/// Audit result for a single language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageAudit {
    /// The audited language.
    pub language: Language,

    /// Keys its dictionary defines.
    pub keys: usize,

    /// Placeholder and emptiness findings, prefixed with the message key.
    pub findings: Vec<String>,
}

/// Substitute `{name}` tokens in a template.
///
/// Single pass, left to right: tokens with a matching argument are replaced,
/// tokens without one are kept verbatim, and substituted values are never
/// rescanned. An unclosed brace ends scanning with the remainder untouched.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        let Some(close) = tail.find('}') else {
            rendered.push('{');
            rendered.push_str(tail);
            return rendered;
        };

        let token = &tail[..close];
        match args.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => rendered.push_str(value),
            None => {
                rendered.push('{');
                rendered.push_str(token);
                rendered.push('}');
            }
        }

        rest = &tail[close + 1..];
    }

    rendered.push_str(rest);
    rendered
}
