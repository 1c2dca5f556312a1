//! Typed build configuration handed to the external bundler.
//!
//! The bundler itself (dev server, module graph, minification) is an external
//! tool; this module owns the configuration the plugin feeds it. The
//! configuration is a plain value with an explicit schema, validated before
//! any bundler runs and written out as a deterministic JSON manifest.
//! Output-directory preparation is the one build-time operation the plugin
//! side owns, so it lives here as well.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::net::IpAddr;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

/// Framework integration plugin the bundler must load.
pub const FRAMEWORK_PLUGIN: &str = "@vitejs/plugin-vue";

/// Component auto-import plugin for the host's design system.
pub const COMPONENT_RESOLVER_PLUGIN: &str = "@arco-plugins/vite-vue";

/// Theme package the component resolver applies.
pub const COMPONENT_THEME: &str = "@arco-themes/vue-lark-base-plugin";

/// Alias the source tree is imported under.
pub const SOURCE_ALIAS: &str = "@";

/// File name of the manifest written next to the project's package manifest.
pub const MANIFEST_FILE: &str = "plugin.bundle.json";

/// Errors raised while validating or applying a build configuration.
#[derive(Debug, Error)]
pub enum BundlerError {
    /// The configuration lists no bundler plugins.
    #[error("build configuration has no bundler plugins")]
    EmptyPlugins,

    /// The same plugin appears twice.
    #[error("duplicate bundler plugin '{0}'")]
    DuplicatePlugin(String),

    /// The public base path is empty.
    #[error("public base path must not be empty")]
    EmptyBase,

    /// The output directory would escape the project root, or is the root.
    #[error("output directory '{0}' must be a relative path strictly inside the project root")]
    UnsafeOutputDir(PathBuf),

    /// Manifest serialization failed.
    #[error("failed to encode bundler manifest: {0}")]
    Encode(#[from] serde_json::Error),

    /// A filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// A bundler plugin and its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSpec {
    /// Package name of the plugin.
    pub name: String,

    /// String-valued plugin options, in stable order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: &str) -> Self {
        self.options.insert(key.to_string(), value.to_string());
        self
    }
}

/// Dev server binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServer {
    /// Interface to bind. All interfaces by default, so the host's embedding
    /// iframe can reach the dev server from outside localhost.
    pub host: IpAddr,
    pub port: u16,
}

/// Production output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Compilation target the bundler lowers to.
    pub target: String,

    /// Output directory, relative to the project root.
    pub dir: PathBuf,

    /// Clear the output directory before each build.
    pub clean: bool,
}

/// Complete build configuration for the plugin frontend.
///
/// Field order is the manifest's key order; together with the `BTreeMap`s
/// this makes serialization deterministic, so the manifest diffs cleanly and
/// repeated builds produce identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Public base path assets are referenced under. Relative (`"./"`) so the
    /// bundle works from whatever path the host serves it.
    pub base: String,

    /// Bundler plugins, in load order.
    pub plugins: Vec<PluginSpec>,

    /// Dev server binding.
    pub server: DevServer,

    /// Production output settings.
    pub output: Output,

    /// Import aliases, alias to project-relative path.
    pub aliases: BTreeMap<String, PathBuf>,
}

/// What [`BuildConfig::prepare_output`] did to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    /// Absolute (root-joined) output directory, now existing and empty
    /// unless `clean` was off.
    pub dir: PathBuf,

    /// Whether a previous output directory was removed.
    pub cleared: bool,
}

impl BuildConfig {
    /// The standard configuration for the plugin frontend.
    ///
    /// Matches what the host's plugin template expects: relative base,
    /// framework plugin plus themed component resolver, esnext output into
    /// the configured directory, and the `@` source alias.
    pub fn for_plugin(config: &Config) -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert(SOURCE_ALIAS.to_string(), PathBuf::from("src"));

        Self {
            base: "./".to_string(),
            plugins: vec![
                PluginSpec::new(FRAMEWORK_PLUGIN),
                PluginSpec::new(COMPONENT_RESOLVER_PLUGIN)
                    .with_option("style", "css")
                    .with_option("theme", COMPONENT_THEME),
            ],
            server: DevServer {
                host: config.dev_server_host,
                port: config.dev_server_port,
            },
            output: Output {
                target: "esnext".to_string(),
                dir: config.out_dir.clone(),
                clean: true,
            },
            aliases,
        }
    }

    /// Check the configuration against `root` without touching the filesystem.
    ///
    /// # Returns
    /// * `Ok(())` when the configuration is usable
    /// * `Err(BundlerError)` for an empty base, no plugins, a duplicated
    ///   plugin, or an output directory outside the project root
    ///
    /// Aliases pointing at paths that do not exist yet are only warned about;
    /// scaffolding order should not fail validation.
    pub fn validate(&self, root: &Path) -> Result<(), BundlerError> {
        if self.base.is_empty() {
            return Err(BundlerError::EmptyBase);
        }
        if self.plugins.is_empty() {
            return Err(BundlerError::EmptyPlugins);
        }

        let mut seen = HashSet::new();
        for plugin in &self.plugins {
            if !seen.insert(plugin.name.as_str()) {
                return Err(BundlerError::DuplicatePlugin(plugin.name.clone()));
            }
        }

        self.safe_output_dir(root)?;

        for (alias, target) in &self.aliases {
            if !root.join(target).exists() {
                warn!(
                    "alias '{}' points at missing path '{}'",
                    alias,
                    target.display()
                );
            }
        }

        Ok(())
    }

    /// Bring the output directory to a known state.
    ///
    /// With `clean` on, a pre-existing output directory is removed wholesale
    /// before being recreated, so stale assets from a previous build can
    /// never leak into the next bundle. The operation is idempotent: running
    /// it twice leaves the same empty directory.
    pub fn prepare_output(&self, root: &Path) -> Result<OutputSummary, BundlerError> {
        let dir = self.safe_output_dir(root)?;

        let mut cleared = false;
        if self.output.clean && dir.exists() {
            fs::remove_dir_all(&dir).map_err(|source| BundlerError::Io {
                context: format!("failed to clear output directory '{}'", dir.display()),
                source,
            })?;
            cleared = true;
        }

        fs::create_dir_all(&dir).map_err(|source| BundlerError::Io {
            context: format!("failed to create output directory '{}'", dir.display()),
            source,
        })?;

        info!("output directory ready at '{}' (cleared: {})", dir.display(), cleared);
        Ok(OutputSummary { dir, cleared })
    }

    /// Write the configuration as a pretty-printed JSON manifest.
    ///
    /// Identical configurations produce identical bytes.
    pub fn write_manifest(&self, path: &Path) -> Result<(), BundlerError> {
        let mut manifest = serde_json::to_string_pretty(self)?;
        manifest.push('\n');

        fs::write(path, manifest).map_err(|source| BundlerError::Io {
            context: format!("failed to write manifest '{}'", path.display()),
            source,
        })
    }

    /// Resolve the output directory against `root`, rejecting anything that
    /// is absolute, escapes the root, or is the root itself.
    fn safe_output_dir(&self, root: &Path) -> Result<PathBuf, BundlerError> {
        let dir = &self.output.dir;
        if dir.as_os_str().is_empty() || dir.is_absolute() {
            return Err(BundlerError::UnsafeOutputDir(dir.clone()));
        }

        let mut depth: i32 = 0;
        for component in dir.components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::CurDir => {}
                Component::ParentDir => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(BundlerError::UnsafeOutputDir(dir.clone()));
                    }
                }
                _ => return Err(BundlerError::UnsafeOutputDir(dir.clone())),
            }
        }
        if depth == 0 {
            return Err(BundlerError::UnsafeOutputDir(dir.clone()));
        }

        Ok(root.join(dir))
    }
}
