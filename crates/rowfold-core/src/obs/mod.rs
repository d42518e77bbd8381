//! Extraction trace boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect extraction
//! semantics. `LogTraceSink` bridges events onto `tracing`.

mod sink;

pub use sink::{DriverMode, ExtractTraceEvent, ExtractTraceSink, LogTraceSink};
