//! Span exporter writing OTLP/JSON lines to a rotating file.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter::OtlpEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::future::ready;
use std::path::PathBuf;

/// Instrumentation scope recorded on every exported span.
pub const SCOPE: &str = "countrydeck";

struct FileSpanExporter {
    file: RotatingFile,
    encoder: OtlpEncoder,
    stopped: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("trace exporter stopped"))
        } else {
            let line = self.encoder.encode(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports each finished span synchronously to `path`.
///
/// The plugin runs single-threaded in WASI, so a simple (unbatched) exporter
/// is used.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path, RotationPolicy::default()),
        encoder: OtlpEncoder::new(resource.clone(), SCOPE),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;
    use tempfile::TempDir;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "CountryDeck")]);
        let provider = file_tracer_provider(path.clone(), resource);

        provider.tracer(SCOPE).in_span("fetch_countries", |_cx| {});
        let _ = provider.force_flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &line["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "fetch_countries");
        assert_eq!(span["traceId"].as_str().map(str::len), Some(32));
    }
}
