use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global subscriber, logging to stderr at `initial_level` until
/// [`apply_log_level`] swaps the filter.
#[must_use]
pub fn init_tracing(initial_level: &str) -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(initial_level));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

/// Replaces the active filter with `level`, keeping the current one if it does not parse.
pub fn apply_log_level(handle: &FilterHandle, level: &str) {
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(%level, "Invalid log level in config, keeping previous filter");
    }
}
