use crate::{
    error::ErrorClass,
    extract::{Cardinality, ExtractorKind},
};
use derive_more::Display;

///
/// DriverMode
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum DriverMode {
    #[display("head")]
    Head,

    #[display("all")]
    All,
}

///
/// ExtractTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtractTraceEvent {
    Start {
        mode: DriverMode,
        kind: ExtractorKind,
        cardinality: Cardinality,
    },
    Finish {
        mode: DriverMode,
        kind: ExtractorKind,
        rows: u64,
        results: u64,
    },
    Error {
        mode: DriverMode,
        kind: ExtractorKind,
        rows: u64,
        class: ErrorClass,
    },
}

///
/// ExtractTraceSink
///

pub trait ExtractTraceSink {
    fn on_event(&self, event: ExtractTraceEvent);
}

///
/// LogTraceSink
///
/// Forwards trace events to the `tracing` subscriber installed by the host.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct LogTraceSink;

impl ExtractTraceSink for LogTraceSink {
    fn on_event(&self, event: ExtractTraceEvent) {
        match event {
            ExtractTraceEvent::Start {
                mode,
                kind,
                cardinality,
            } => {
                tracing::debug!(%mode, %kind, %cardinality, "extraction started");
            }
            ExtractTraceEvent::Finish {
                mode,
                kind,
                rows,
                results,
            } => {
                tracing::debug!(%mode, %kind, rows, results, "extraction finished");
            }
            ExtractTraceEvent::Error {
                mode,
                kind,
                rows,
                class,
            } => {
                tracing::warn!(%mode, %kind, rows, %class, "extraction failed");
            }
        }
    }
}
