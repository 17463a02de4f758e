//! Observability for the Maison storefront.
//!
//! Provides structured logging correlated by session id:
//! - `StructuredLogger` - logger carrying session context
//! - `LogEntry` / `LogLevel` - structured log records
//! - `LogBuilder` - fluent API for logs with fields

mod logging;

pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
