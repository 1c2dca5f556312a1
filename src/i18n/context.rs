//! Locale context: the handle the rest of the plugin reads its UI language from.
//!
//! The context pairs a validated [`TranslationRegistry`] with the active
//! language. The active language lives in a `tokio::sync::watch` channel:
//! reads never lock, and a late host answer wakes every subscribed reader
//! instead of being polled for.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::i18n::{Language, TranslationRegistry};

/// Shared locale state for one plugin instance.
///
/// Create one per process, wrap it in an `Arc`, and hand clones of that to
/// whatever renders text. There is no global instance.
pub struct LocaleContext {
    registry: Arc<TranslationRegistry>,
    language: watch::Sender<Language>,
}

impl LocaleContext {
    /// Create a context with the given starting language.
    ///
    /// The starting language is the configured default; the host bootstrap
    /// may replace it once, later and asynchronously.
    pub fn new(registry: Arc<TranslationRegistry>, default_language: Language) -> Self {
        let (language, _) = watch::channel(default_language);
        Self { registry, language }
    }

    /// The currently active language.
    pub fn current(&self) -> Language {
        *self.language.borrow()
    }

    /// Replace the active language.
    ///
    /// Subscribers are woken only when the language actually changes;
    /// setting the language that is already active is a no-op.
    pub fn set_language(&self, language: Language) {
        let mut previous = language;
        let changed = self.language.send_if_modified(|active| {
            previous = *active;
            if *active == language {
                return false;
            }
            *active = language;
            true
        });

        if changed {
            debug!("active language changed from '{}' to '{}'", previous, language);
        }
    }

    /// Subscribe to language changes.
    ///
    /// The receiver observes the current value immediately and wakes whenever
    /// the active language changes.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.language.subscribe()
    }

    /// The registry this context renders from.
    pub fn registry(&self) -> &TranslationRegistry {
        &self.registry
    }

    /// Render a message key in the active language.
    ///
    /// Rendering fails open: an unknown key logs a warning and returns the
    /// key itself, so a template bug shows up as `status.done` in the UI
    /// instead of crashing the plugin panel.
    pub fn text(&self, key: &str) -> String {
        match self.registry.message(self.current(), key) {
            Some(template) => template.to_string(),
            None => {
                warn!("unknown message key '{}', rendering the key itself", key);
                key.to_string()
            }
        }
    }

    /// Render a message key with `{name}` placeholders substituted.
    ///
    /// Fails open the same way as [`LocaleContext::text`].
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.registry.format(self.current(), key, args) {
            Some(rendered) => rendered,
            None => {
                warn!("unknown message key '{}', rendering the key itself", key);
                key.to_string()
            }
        }
    }
}
