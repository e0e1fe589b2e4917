//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans land in `~/.local/share/zellij/userspot/userspot-otlp.json`, one OTLP
//! JSON document per line. The file rotates at 5 MiB into `.1`, `.2`, and `.3`.
//!
//! The level comes from the `trace_level` plugin option and defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` implementation and OTLP JSON encoding
//! - [`rotation`]: Size-rotated line file

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE};
pub use rotation::RotatingFile;
