//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **File export**: spans land in `<data dir>/tunesearch/tunesearch-otlp.json`
//! - **Rotation**: 10 MB per file, three numbered backups
//! - **Format**: one OTLP/JSON `resourceSpans` document per line
//!
//! The level comes from `RUST_LOG` if set, otherwise from `trace_level` in
//! the configuration, otherwise `info`.
//!
//! Each fetch task runs inside its own `fetch_page` span carrying the
//! session id and offset.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotatingFileWriter, RotationPolicy};
pub use init::{init_tracing, TRACE_FILE_NAME};
