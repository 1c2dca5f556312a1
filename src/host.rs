//! Host bridge: asynchronous language detection against the embedding host.
//!
//! The plugin runs inside a spreadsheet-base host that knows the user's UI
//! language, but only answers over an asynchronous bridge and sometimes not
//! at all (detached dev server, stale host build). Startup therefore never
//! waits on the host: the UI renders in the configured default language and
//! [`bootstrap_locale`] swaps the language in at most once, later, if and
//! when a usable answer arrives within the timeout.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::config::Config;
use crate::i18n::{Language, LocaleContext};

/// Errors a host bridge can produce.
#[derive(Debug, Error)]
pub enum HostError {
    /// The bridge could not reach the host at all.
    #[error("host bridge unavailable: {0}")]
    Unavailable(String),
}

/// One-shot query channel to the embedding host.
///
/// Implementations answer with a raw language tag (`"en"`, `"zh_CN"`,
/// `"ja-JP"`); resolution against the supported set happens on this side of
/// the seam, so a bridge never needs to know which languages ship.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Query the host for the user's preferred language tag.
    async fn language(&self) -> Result<String, HostError>;
}

/// Bridge that reports the operating system locale.
///
/// Used by the dev preview, where there is no embedding host and the
/// developer's machine stands in for the user.
#[derive(Debug, Default, Clone)]
pub struct SystemLocaleBridge;

#[async_trait]
impl HostBridge for SystemLocaleBridge {
    async fn language(&self) -> Result<String, HostError> {
        sys_locale::get_locale()
            .ok_or_else(|| HostError::Unavailable("operating system reports no locale".to_string()))
    }
}

/// Bridge with a fixed answer.
///
/// Stands in for the real host in tests and demos.
#[derive(Debug, Clone)]
pub struct StaticBridge {
    tag: String,
}

impl StaticBridge {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

#[async_trait]
impl HostBridge for StaticBridge {
    async fn language(&self) -> Result<String, HostError> {
        Ok(self.tag.clone())
    }
}

/// Outcome of a language detection attempt.
///
/// Detection is total: whatever the host does, the caller gets a language to
/// render in and a record of how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// A reported tag resolved to a supported language.
    Resolved(Language),

    /// The default language stays active. `reported` carries the host's tag
    /// when it answered with an unsupported language, and is `None` when the
    /// host failed or timed out.
    Fallback {
        reported: Option<String>,
        language: Language,
    },
}

impl Detection {
    /// The language to render in, whichever way detection went.
    pub fn language(&self) -> Language {
        match self {
            Detection::Resolved(language) => *language,
            Detection::Fallback { language, .. } => *language,
        }
    }
}

/// Ask the bridge for a language, waiting at most `wait`.
///
/// Never errors: an unsupported tag, a bridge failure, and a timeout all
/// fold into [`Detection::Fallback`] carrying `default_language`.
pub async fn detect_language(
    bridge: &dyn HostBridge,
    wait: Duration,
    default_language: Language,
) -> Detection {
    match timeout(wait, bridge.language()).await {
        Ok(Ok(tag)) => match Language::resolve(&tag) {
            Some(language) => {
                info!("host reported language tag '{}', using '{}'", tag, language);
                Detection::Resolved(language)
            }
            None => {
                warn!(
                    "host reported unsupported language tag '{}', keeping '{}'",
                    tag, default_language
                );
                Detection::Fallback {
                    reported: Some(tag),
                    language: default_language,
                }
            }
        },
        Ok(Err(err)) => {
            warn!("host language query failed ({}), keeping '{}'", err, default_language);
            Detection::Fallback {
                reported: None,
                language: default_language,
            }
        }
        Err(_) => {
            warn!(
                "host language query timed out after {:?}, keeping '{}'",
                wait, default_language
            );
            Detection::Fallback {
                reported: None,
                language: default_language,
            }
        }
    }
}

/// Spawn the one-shot locale bootstrap.
///
/// Resolution order follows the configuration: an explicit
/// `language_override` wins, otherwise the host is queried with the
/// configured timeout. The context's language is replaced at most once, and
/// only when resolution succeeds; every fallback leaves the default active.
///
/// Returns the task handle so callers that care about the outcome (tests,
/// the dev preview) can await the [`Detection`]; the UI does not need to.
pub fn bootstrap_locale(
    ctx: Arc<LocaleContext>,
    bridge: Arc<dyn HostBridge>,
    config: &Config,
) -> JoinHandle<Detection> {
    let override_tag = config.language_override.clone();
    let wait = config.host_timeout();

    tokio::spawn(async move {
        let default_language = ctx.current();

        let detection = match override_tag {
            Some(tag) => match Language::resolve(&tag) {
                Some(language) => {
                    info!("language override '{}' resolved to '{}'", tag, language);
                    Detection::Resolved(language)
                }
                None => {
                    warn!(
                        "language override '{}' is not a supported language, querying the host",
                        tag
                    );
                    detect_language(bridge.as_ref(), wait, default_language).await
                }
            },
            None => detect_language(bridge.as_ref(), wait, default_language).await,
        };

        if let Detection::Resolved(language) = &detection {
            ctx.set_language(*language);
        }

        detection
    })
}
