//! Logging setup using the `tracing` ecosystem.
//!
//! Diagnostics go to stderr so they never mix with anything a caller pipes
//! from stdout. The filter is chosen in this order:
//!
//! 1. `POM_GRAPH_LOG` environment variable, any `EnvFilter` directive
//! 2. `--verbose`: debug level for pom-graph
//! 3. `--quiet`: errors only
//! 4. Default: warnings

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::common::LoggingArgs;
use crate::constants::logging::{DEFAULT_FILTER, LOG_ENV_VAR, QUIET_FILTER, VERBOSE_FILTER};

/// Filter directive implied by the command line flags alone
pub fn default_directive(args: &LoggingArgs) -> &'static str {
    if args.verbose {
        VERBOSE_FILTER
    } else if args.quiet {
        QUIET_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(args: &LoggingArgs) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(args)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(console::colors_enabled_stderr())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
