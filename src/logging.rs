//! Structured logging setup shared by the command-line tools.
//!
//! The library itself only emits `tracing` events; nothing is printed unless a binary installs a
//! subscriber through [`init_tracing`].

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs the time elapsed since `$start` at debug level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// debug_time!(start, "all_pairs");
/// ```
#[macro_export]
macro_rules! debug_time {
    ($start:expr, $name:expr) => {
        tracing::debug!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::debug!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initializes a stderr subscriber for the crate and the calling binary `target`.
///
/// `RUST_LOG` and then `TRIGRAPH_LOG` take precedence over the command-line arguments.
/// Without either, `log_level` is used if given, otherwise `debug` when `verbose` and `warn` else.
pub fn init_tracing(
    target: &str,
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("TRIGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directives(target, level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

/// Turns a bare level into directives for this crate and `target`; full directives pass through.
fn directives(target: &str, level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("trigraph={level},{target}={level}")
    }
}
