//! Locale bootstrap and bundler configuration for a spreadsheet-base plugin
//! frontend.
//!
//! The crate has two halves:
//!
//! - [`i18n`]: a validated translation registry over the closed set of
//!   shipped languages, plus the [`i18n::LocaleContext`] handle the rest of
//!   the plugin reads its UI language from.
//! - [`bundler`]: the typed build configuration handed to the external
//!   bundler, with deterministic manifests and output-directory preparation.
//!
//! [`host`] joins them at runtime: a one-shot, timeout-bounded query of the
//! embedding host for the user's preferred language, applied to the locale
//! context without ever blocking startup.

pub mod bundler;
pub mod config;
pub mod host;
pub mod i18n;
