//! Platform-aware logging initialization.
//!
//! For WASM builds this routes `tracing` events to the browser console; for
//! native builds (tests, tooling) it is a no-op and the host environment is
//! expected to install its own subscriber.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for the current platform.
///
/// Idempotent: safe to call more than once, only the first call does work.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    let level = stored_log_level().unwrap_or(LevelFilter::WARN);

    tracing_subscriber::registry().with(level).with(fmt_layer).init();
}

/// Developer override persisted in localStorage under `nv_web_log_level`.
#[cfg(feature = "web")]
fn stored_log_level() -> Option<tracing::level_filters::LevelFilter> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let level = storage.get_item("nv_web_log_level").ok()??;

    match level.as_str() {
        "error" => Some(tracing::level_filters::LevelFilter::ERROR),
        "warn" => Some(tracing::level_filters::LevelFilter::WARN),
        "info" => Some(tracing::level_filters::LevelFilter::INFO),
        "debug" => Some(tracing::level_filters::LevelFilter::DEBUG),
        "trace" => Some(tracing::level_filters::LevelFilter::TRACE),
        _ => None,
    }
}
