//! Logging utilities for viewport windows
//!
//! Everything in this workspace logs through `tracing`. Applications that do
//! not install their own subscriber can call one of the `init_*` helpers.

#[cfg(feature = "tracing")]
use tracing::{debug, info};

/// Default filter: info+ for the viewport crates, warn+ for everything else
#[cfg(feature = "tracing")]
const DEFAULT_FILTER: &str = "dear_viewport=info,dear_viewport_winit=info,dear_viewport_wgpu=info,warn";

/// Development filter: debug+ for the viewport crates, info+ for everything else
#[cfg(feature = "tracing")]
const DEV_FILTER: &str =
    "dear_viewport=debug,dear_viewport_winit=debug,dear_viewport_wgpu=debug,info";

/// Initialize a tracing subscriber with sensible defaults
///
/// `RUST_LOG` takes precedence over the built-in filter.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize a tracing subscriber with a custom filter
#[cfg(feature = "tracing")]
pub fn init_tracing_with_filter(filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize a verbose tracing subscriber for development
#[cfg(feature = "tracing")]
pub fn init_tracing_dev() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEV_FILTER.into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

/// Log a platform backend becoming available
#[cfg(feature = "tracing")]
pub fn log_platform_init(platform: &str) {
    info!("viewport platform backend {} initialized", platform);
}

/// Log a graphics backend becoming available
#[cfg(feature = "tracing")]
pub fn log_renderer_init(renderer: &str) {
    info!("viewport graphics backend {} initialized", renderer);
}

/// Log the number of live viewport windows
#[cfg(feature = "tracing")]
pub fn log_live_windows(count: usize) {
    debug!("live viewport windows: {}", count);
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing_with_filter(_filter: &str) {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing_dev() {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub fn log_platform_init(_platform: &str) {}

#[cfg(not(feature = "tracing"))]
pub fn log_renderer_init(_renderer: &str) {}

#[cfg(not(feature = "tracing"))]
pub fn log_live_windows(_count: usize) {}

// Crate-internal conditional logging. Only usable in statement position.
macro_rules! vp_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! vp_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! vp_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

macro_rules! vp_error {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::error!($($arg)*);
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn logging_macros_expand_without_subscriber() {
        vp_trace!("trace {}", 1);
        vp_debug!("debug {}", 2);
        vp_warn!("warn {}", 3);
        vp_error!("error {}", 4);
    }

    #[test]
    fn init_is_repeatable() {
        super::init_tracing_with_filter("off");
        super::init_tracing_with_filter("off");
    }
}
