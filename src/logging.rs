//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events; binaries decide whether and where
//! they are written by calling [`initialize`] once at startup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `joblist=debug`.
pub const LOG_ENV: &str = "JOBLIST_LOG";

/// Install a formatting subscriber that writes to stderr.
///
/// The filter comes from [`LOG_ENV`] when set, otherwise it is `debug` for
/// verbose runs and `warn` for everything else. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn initialize(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
