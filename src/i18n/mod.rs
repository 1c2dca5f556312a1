//! Internationalization (i18n) module for multi-language support.
//!
//! This module owns everything language-related in the plugin: the closed set
//! of supported languages, the embedded dictionaries, validation of those
//! dictionaries, and the runtime handle the UI reads its strings from.
//!
//! # Architecture
//!
//! - `language`: Type-safe `Language` enum and raw-tag resolution
//! - `keys`: The message key catalog every dictionary must match
//! - `registry`: Dictionaries embedded at build time, validated at startup
//! - `context`: Per-process locale state with change subscriptions
//! - `validator`: Placeholder parity checks between translations
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use base_plugin_kit::i18n::{keys, Language, LocaleContext, TranslationRegistry};
//!
//! // Build the registry once; construction validates every dictionary.
//! let registry = Arc::new(TranslationRegistry::from_embedded()?);
//!
//! // The context starts on the configured default language.
//! let ctx = LocaleContext::new(registry, Language::En);
//!
//! // Render strings; the host bootstrap may switch the language later.
//! let title = ctx.text(keys::PLUGIN_TITLE);
//! let done = ctx.format(keys::STATUS_DONE, &[("count", "12")]);
//! ```

pub mod keys;

mod context;
mod language;
mod registry;
mod validator;

pub use context::LocaleContext;
pub use language::Language;
pub use registry::{AuditReport, I18nError, LanguageAudit, TranslationRegistry};
pub use validator::{TemplateValidator, ValidationReport};
