use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "pro_catalog=info";
const VERBOSE_DIRECTIVE: &str = "pro_catalog=debug,info";

/// `RUST_LOG` wins over the built-in directive when set.
fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Human-readable output for interactive runs.
pub fn init_cli_logger(verbose: bool) {
    let directive = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };

    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(fmt::layer().with_target(false).compact())
        .init();
}

/// One JSON object per event, selected by `monitoring.json_logs` in the
/// TOML config.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(
            fmt::layer()
                .with_target(false)
                .json()
                .with_current_span(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        assert!(DEFAULT_DIRECTIVE.parse::<EnvFilter>().is_ok());
        assert!(VERBOSE_DIRECTIVE.parse::<EnvFilter>().is_ok());
    }
}
