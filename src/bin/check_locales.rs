//! Locale audit binary - checks dictionary key parity and placeholder use
//!
//! Usage:
//!   cargo run --bin check-locales              # Report findings, exit 0
//!   cargo run --bin check-locales -- --strict  # Findings fail the run
//!   cargo run --bin check-locales -- --json    # Machine-readable report only
//!
//! The run always fails when a dictionary is missing, malformed, or defines
//! a different key set than the message catalog; those are build errors, not
//! findings. Placeholder drift and empty translations are findings: reported
//! by default, fatal with --strict. Logs go to stderr; stdout carries only
//! the report. Wire the strict form into CI next to the test suite.

use anyhow::{bail, Context, Result};
use base_plugin_kit::i18n::TranslationRegistry;

fn main() -> Result<()> {
    // Initialize logging on stderr, keeping stdout for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("base_plugin_kit=info".parse().unwrap()),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let strict = args.iter().any(|arg| arg == "--strict");
    let json_only = args.iter().any(|arg| arg == "--json");

    let registry =
        TranslationRegistry::from_embedded().context("Locale dictionaries failed validation")?;
    let audit = registry.audit();

    if json_only {
        println!(
            "{}",
            serde_json::to_string_pretty(&audit).context("Failed to encode audit report")?
        );
    } else {
        println!("\n========== LOCALE AUDIT ==========");
        println!("Message keys in catalog: {}", audit.total_keys);
        for language in &audit.languages {
            println!(
                "\n{} ({} keys): {}",
                language.language,
                language.keys,
                if language.findings.is_empty() {
                    "ok"
                } else {
                    "findings"
                }
            );
            for finding in &language.findings {
                println!("  - {}", finding);
            }
        }
        println!("==================================\n");
    }

    let findings: usize = audit
        .languages
        .iter()
        .map(|language| language.findings.len())
        .sum();

    if findings == 0 {
        if !json_only {
            println!(
                "✅ {} locales share all {} message keys",
                audit.languages.len(),
                audit.total_keys
            );
        }
    } else if strict {
        bail!("{} placeholder finding(s), failing due to --strict", findings);
    } else if !json_only {
        println!("⚠️  {} placeholder finding(s), see report above", findings);
    }

    Ok(())
}
