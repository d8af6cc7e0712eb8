//! Tracing subscriber installation.
//!
//! Filtering follows `RUST_LOG`. Blank, oversized or unparsable filters fall
//! back to the default directive instead of aborting start-up.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable read for the filter directive.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Directive used when `RUST_LOG` is absent or unusable.
pub const DEFAULT_DIRECTIVE: &str = "info";

const MAX_DIRECTIVE_LEN: usize = 4096;

/// Builds a filter from a raw directive, falling back to `fallback`.
#[must_use]
pub fn filter_from(raw: Option<&str>, fallback: &str) -> EnvFilter {
    raw.map(str::trim)
        .filter(|directive| !directive.is_empty() && directive.len() <= MAX_DIRECTIVE_LEN)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Installs a formatted subscriber writing to standard error.
///
/// A subscriber installed earlier in the process is left in place.
pub fn init() {
    let raw = std::env::var(FILTER_ENV).ok();
    let filter = filter_from(raw.as_deref(), DEFAULT_DIRECTIVE);
    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
    if installed.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("workforce_tasks=loudest"))]
    fn unusable_directives_fall_back(#[case] raw: Option<&str>) {
        let filter = filter_from(raw, "warn");
        assert_eq!(filter.to_string(), "warn");
    }

    #[rstest]
    fn oversized_directive_falls_back() {
        let raw = "debug,".repeat(MAX_DIRECTIVE_LEN);
        let filter = filter_from(Some(&raw), DEFAULT_DIRECTIVE);
        assert_eq!(filter.to_string(), DEFAULT_DIRECTIVE);
    }

    #[rstest]
    fn valid_directive_is_used() {
        let filter = filter_from(Some(" workforce_tasks=debug "), DEFAULT_DIRECTIVE);
        assert_eq!(filter.to_string(), "workforce_tasks=debug");
    }
}
