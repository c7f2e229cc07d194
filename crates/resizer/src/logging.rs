//! Logging initialization.
//!
//! Uses the `tracing` ecosystem. Inside Lambda every line goes to CloudWatch
//! as JSON with the current invocation span attached; locally the output is
//! human-readable unless `--json-logs` is given.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set by the Lambda execution environment for the bootstrap process.
const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `verbose` - If true, enables DEBUG level logging; otherwise INFO level.
/// * `json_format` - If true, outputs structured JSON logs.
///
/// # Notes
///
/// - Log output goes to stderr (stdout is reserved for `invoke` reports)
/// - The RUST_LOG environment variable can override the log level
/// - SDK internals are capped at WARN unless RUST_LOG says otherwise
pub fn init(verbose: bool, json_format: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    if json_format || running_in_lambda() {
        // CloudWatch stamps each line itself
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{level},aws_config=warn,aws_smithy_runtime=warn,hyper=warn")
}

/// Whether this process is a Lambda bootstrap.
pub fn running_in_lambda() -> bool {
    std::env::var_os(LAMBDA_RUNTIME_API).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
        assert!(default_directives(true).starts_with("debug,"));
    }
}
