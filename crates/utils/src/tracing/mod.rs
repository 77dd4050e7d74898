use hitrate_core::{DEFAULT_LOG_FILTER, HITRATE_LOG_VAR};
use tracing::{span, Level, Span};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Installs a compact stderr formatter filtered by `RUST_LOG`, falling back
/// to `info`. Returns an error if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = build_filter(None)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build the filter from the environment, or from `directives` when given
fn build_filter(
    directives: Option<&str>,
) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = match directives {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_env(HITRATE_LOG_VAR)
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?,
    };
    Ok(filter)
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering one reporting cycle
pub fn cycle_span(cache_label: &str) -> Span {
    span!(Level::DEBUG, "hit_rate_cycle", cache_label = %cache_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directives_parse() {
        let filter = build_filter(Some("hitrate_cache=debug")).unwrap();
        assert!(filter.to_string().contains("hitrate_cache=debug"));
    }

    #[test]
    fn test_invalid_directives_rejected() {
        assert!(build_filter(Some("hitrate_cache=bogus")).is_err());
    }

    #[test]
    fn test_cycle_span_metadata() {
        let span = cycle_span("cache-A");
        if let Some(metadata) = span.metadata() {
            assert_eq!(metadata.name(), "hit_rate_cycle");
            assert_eq!(*metadata.level(), Level::DEBUG);
            assert!(metadata.fields().field("cache_label").is_some());
        }
    }

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let _ = init();
        assert!(init().is_err());
    }
}
