use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use base_plugin_kit::bundler::{self, BuildConfig};
use base_plugin_kit::config::Config;
use base_plugin_kit::host::{bootstrap_locale, Detection, SystemLocaleBridge};
use base_plugin_kit::i18n::{keys, LocaleContext, TranslationRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("base_plugin_kit=info".parse()?),
        )
        .init();

    info!("Starting pre-bundle step");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Validate the embedded locale dictionaries; construction logs
    // each placeholder finding
    info!("Validating locale dictionaries");
    let registry = Arc::new(TranslationRegistry::from_embedded()?);
    let audit = registry.audit();
    info!(
        "Validated {} message keys across {} locales",
        audit.total_keys,
        audit.languages.len()
    );

    // Step 2: Validate the build configuration
    info!("Validating build configuration");
    let build = BuildConfig::for_plugin(&config);
    build.validate(&config.project_root)?;

    // Step 3: Prepare the output directory
    let summary = build.prepare_output(&config.project_root)?;
    info!(
        "Output directory '{}' ready (previous build cleared: {})",
        summary.dir.display(),
        summary.cleared
    );

    // Step 4: Write the bundler manifest
    let manifest_path = config.project_root.join(bundler::MANIFEST_FILE);
    build.write_manifest(&manifest_path)?;
    info!("Wrote bundler manifest to '{}'", manifest_path.display());

    // Step 5: Preview the locale the dev server would boot with
    let ctx = Arc::new(LocaleContext::new(registry, config.default_language));
    let detection = bootstrap_locale(ctx.clone(), Arc::new(SystemLocaleBridge), &config)
        .await
        .context("locale bootstrap task panicked")?;

    match &detection {
        Detection::Resolved(language) => {
            info!("Dev preview locale resolved to '{}'", language);
        }
        Detection::Fallback {
            reported: Some(tag),
            language,
        } => {
            info!(
                "System locale '{}' is not supported, dev preview stays on '{}'",
                tag, language
            );
        }
        Detection::Fallback {
            reported: None,
            language,
        } => {
            info!("System locale unavailable, dev preview stays on '{}'", language);
        }
    }
    info!(
        "Sample title in '{}': {}",
        ctx.current(),
        ctx.text(keys::PLUGIN_TITLE)
    );

    info!("Pre-bundle step complete");
    Ok(())
}
