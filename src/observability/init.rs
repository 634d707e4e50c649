//! Subscriber setup.

use super::tracer::{file_tracer_provider, SCOPE};
use crate::infrastructure::paths::{get_data_dir, trace_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level directive used when the configuration names none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the trace file.
///
/// `config.trace_level` is an `EnvFilter` directive such as `"debug"` or
/// `"countrydeck=trace"`. Tracing is best effort: if the data directory cannot
/// be created, or a subscriber is already installed, this does nothing.
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "CountryDeck"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(trace_path(), resource);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE)))
        .try_init();
}
