//! Tracing initialization and subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "tunesearch-otlp.json";

/// Resolves the filter directive: `RUST_LOG` first, then `trace_level`, then `info`.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Installs the global subscriber with OTLP file export.
///
/// Spans are written to `<data dir>/tunesearch/tunesearch-otlp.json`,
/// rotated at 10 MB with three backups. Calling this more than once is
/// harmless; only the first call installs a subscriber.
///
/// # Errors
///
/// Returns an I/O error if the data directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use tunesearch::observability::init_tracing;
/// use tunesearch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config)?;
/// tracing::debug!("tracing is now active");
/// # Ok::<(), tunesearch::TunesearchError>(())
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "tunesearch"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        RotationPolicy::default(),
        resource,
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("tunesearch"));

    let installed = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(otel_layer)
        .try_init()
        .is_ok();

    tracing::debug!(installed, path = %data_dir.join(TRACE_FILE_NAME).display(), "tracing initialized");
    Ok(())
}
