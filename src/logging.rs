//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "CYCLE_STEPPER_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr.
///
/// Filter directives come from `CYCLE_STEPPER_LOG` (e.g. `cycle_stepper=debug`)
/// and default to `warn`. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (tests, embedding callers)
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .ok();
}
