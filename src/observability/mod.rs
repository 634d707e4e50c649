//! Tracing with OTLP/JSON file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → countrydeck-otlp.json
//! ```
//!
//! The trace file lives in the plugin data directory and rotates at 10 MB,
//! keeping three backups (`countrydeck-otlp.json.1` to `.3`). The level comes
//! from the `trace_level` plugin option and defaults to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
